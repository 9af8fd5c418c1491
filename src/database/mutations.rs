use crate::database::models::{
    AdvanceRecord, AttendanceRecord, AttendanceStatus, Employee, EmployeeUpdate, ExtraRecord,
    Location, NewEmployee, PaymentOutcome,
};
use crate::database::queries;
use crate::error::LedgerError;
use crate::utils::time::period_of;
use crate::utils::validation::{
    validate_daily_rate, validate_non_negative_amount, validate_positive_amount,
};
use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;

// Write operations. Callers go through Store so every mutation runs under
// its lock; nothing here is reachable from outside the crate.

pub(crate) async fn mark_attendance(
    pool: &SqlitePool,
    employee_id: i64,
    date: NaiveDate,
    status: AttendanceStatus,
) -> Result<AttendanceRecord, LedgerError> {
    let now = Utc::now();

    // One row per (employee, date): a second mark overwrites the first
    // and refreshes its timestamp.
    if let Some(existing) = queries::get_attendance_on(pool, employee_id, date).await? {
        sqlx::query("UPDATE attendance SET status = ?, recorded_at = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(now)
            .bind(existing.id)
            .execute(pool)
            .await?;

        return queries::get_attendance_by_id(pool, existing.id).await;
    }

    let record_id = sqlx::query(
        "INSERT INTO attendance (employee_id, date, status, recorded_at) VALUES (?, ?, ?, ?)",
    )
    .bind(employee_id)
    .bind(date)
    .bind(status.as_str())
    .bind(now)
    .execute(pool)
    .await?
    .last_insert_rowid();

    queries::get_attendance_by_id(pool, record_id).await
}

pub(crate) async fn clear_attendance(
    pool: &SqlitePool,
    employee_id: i64,
    date: NaiveDate,
) -> Result<bool, LedgerError> {
    let result = sqlx::query("DELETE FROM attendance WHERE employee_id = ? AND date = ?")
        .bind(employee_id)
        .bind(date)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub(crate) async fn register_payment(
    pool: &SqlitePool,
    employee_id: i64,
    date: NaiveDate,
    base_amount: i64,
    extra_amount: i64,
) -> Result<PaymentOutcome, LedgerError> {
    validate_positive_amount(base_amount)?;
    validate_non_negative_amount(extra_amount)?;

    // First write wins: a day already paid stays exactly as recorded.
    if let Some(existing) = queries::get_payment_on(pool, employee_id, date).await? {
        tracing::warn!(
            "Duplicate payment ignored: employee_id={}, date={}, existing payment id={}",
            employee_id,
            date,
            existing.id
        );
        return Ok(PaymentOutcome::AlreadyPaid(existing));
    }

    let payment_id = sqlx::query(
        "INSERT INTO payments (employee_id, date, base_amount, extra_amount, status, period, recorded_at)
         VALUES (?, ?, ?, ?, 'paid', ?, ?)",
    )
    .bind(employee_id)
    .bind(date)
    .bind(base_amount)
    .bind(extra_amount)
    .bind(period_of(date))
    .bind(Utc::now())
    .execute(pool)
    .await?
    .last_insert_rowid();

    let payment = queries::get_payment_by_id(pool, payment_id).await?;
    Ok(PaymentOutcome::Recorded(payment))
}

pub(crate) async fn register_advance(
    pool: &SqlitePool,
    employee_id: i64,
    amount: i64,
    date: NaiveDate,
    note: Option<&str>,
) -> Result<AdvanceRecord, LedgerError> {
    validate_positive_amount(amount)?;

    let advance_id = sqlx::query(
        "INSERT INTO advances (employee_id, date, amount, note, period, recorded_at)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(employee_id)
    .bind(date)
    .bind(amount)
    .bind(note)
    .bind(period_of(date))
    .bind(Utc::now())
    .execute(pool)
    .await?
    .last_insert_rowid();

    queries::get_advance_by_id(pool, advance_id).await
}

pub(crate) async fn remove_advance(pool: &SqlitePool, advance_id: i64) -> Result<bool, LedgerError> {
    let result = sqlx::query("DELETE FROM advances WHERE id = ?")
        .bind(advance_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub(crate) async fn register_extra(
    pool: &SqlitePool,
    employee_id: i64,
    amount: i64,
    date: NaiveDate,
    hours: Option<f64>,
    note: Option<&str>,
) -> Result<ExtraRecord, LedgerError> {
    validate_positive_amount(amount)?;

    let extra_id = sqlx::query(
        "INSERT INTO extras (employee_id, date, amount, hours, note, period, recorded_at)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(employee_id)
    .bind(date)
    .bind(amount)
    .bind(hours)
    .bind(note)
    .bind(period_of(date))
    .bind(Utc::now())
    .execute(pool)
    .await?
    .last_insert_rowid();

    queries::get_extra_by_id(pool, extra_id).await
}

pub(crate) async fn remove_extra(pool: &SqlitePool, extra_id: i64) -> Result<bool, LedgerError> {
    let result = sqlx::query("DELETE FROM extras WHERE id = ?")
        .bind(extra_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub(crate) async fn create_location(pool: &SqlitePool, name: &str) -> Result<Location, LedgerError> {
    let location_id = sqlx::query("INSERT INTO locations (name, active) VALUES (?, TRUE)")
        .bind(name)
        .execute(pool)
        .await?
        .last_insert_rowid();

    queries::get_location_by_id(pool, location_id).await
}

pub(crate) async fn toggle_location(
    pool: &SqlitePool,
    location_id: i64,
) -> Result<Option<Location>, LedgerError> {
    let result = sqlx::query("UPDATE locations SET active = NOT active WHERE id = ?")
        .bind(location_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    let location = queries::get_location_by_id(pool, location_id).await?;
    Ok(Some(location))
}

pub(crate) async fn create_employee(
    pool: &SqlitePool,
    new_employee: &NewEmployee,
) -> Result<Employee, LedgerError> {
    validate_daily_rate(new_employee.daily_rate)?;

    let employee_id = sqlx::query(
        "INSERT INTO employees (name, role, daily_rate, location_id, active)
         VALUES (?, ?, ?, ?, TRUE)",
    )
    .bind(&new_employee.name)
    .bind(&new_employee.role)
    .bind(new_employee.daily_rate)
    .bind(new_employee.location_id)
    .execute(pool)
    .await?
    .last_insert_rowid();

    queries::get_employee_by_id(pool, employee_id).await
}

pub(crate) async fn update_employee(
    pool: &SqlitePool,
    employee_id: i64,
    update: &EmployeeUpdate,
) -> Result<Option<Employee>, LedgerError> {
    if let Some(rate) = update.daily_rate {
        validate_daily_rate(rate)?;
    }

    // NULL binds fall through COALESCE, so omitted fields keep their value.
    let result = sqlx::query(
        "UPDATE employees
         SET name = COALESCE(?, name),
             role = COALESCE(?, role),
             daily_rate = COALESCE(?, daily_rate),
             location_id = COALESCE(?, location_id),
             active = COALESCE(?, active)
         WHERE id = ?",
    )
    .bind(update.name.as_deref())
    .bind(update.role.as_deref())
    .bind(update.daily_rate)
    .bind(update.location_id)
    .bind(update.active)
    .bind(employee_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    let employee = queries::get_employee_by_id(pool, employee_id).await?;
    Ok(Some(employee))
}

/// Clears the four event streams and keeps locations and employees.
pub(crate) async fn reset_ledgers(pool: &SqlitePool) -> Result<(), LedgerError> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM attendance").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM payments").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM advances").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM extras").execute(&mut *tx).await?;

    tx.commit().await?;

    tracing::info!("All ledger streams cleared, master data kept");
    Ok(())
}
