use crate::database::models::{
    AdvanceRecord, AttendanceRecord, Employee, ExtraRecord, Location, PaymentRecord,
};
use crate::error::LedgerError;
use chrono::NaiveDate;
use sqlx::SqlitePool;

// Master data queries

pub async fn get_employee_by_id(
    pool: &SqlitePool,
    employee_id: i64,
) -> Result<Employee, LedgerError> {
    let employee = sqlx::query_as::<_, Employee>(
        "SELECT id, name, role, daily_rate, location_id, active FROM employees WHERE id = ?",
    )
    .bind(employee_id)
    .fetch_one(pool)
    .await?;

    Ok(employee)
}

pub async fn list_employees(pool: &SqlitePool) -> Result<Vec<Employee>, LedgerError> {
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT id, name, role, daily_rate, location_id, active FROM employees
         ORDER BY name COLLATE NOCASE ASC, id ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(employees)
}

pub async fn list_active_employees(pool: &SqlitePool) -> Result<Vec<Employee>, LedgerError> {
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT id, name, role, daily_rate, location_id, active FROM employees
         WHERE active = TRUE
         ORDER BY name COLLATE NOCASE ASC, id ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(employees)
}

pub async fn list_active_employees_for_location(
    pool: &SqlitePool,
    location_id: i64,
) -> Result<Vec<Employee>, LedgerError> {
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT id, name, role, daily_rate, location_id, active FROM employees
         WHERE location_id = ? AND active = TRUE
         ORDER BY name COLLATE NOCASE ASC, id ASC",
    )
    .bind(location_id)
    .fetch_all(pool)
    .await?;

    Ok(employees)
}

pub async fn get_location_by_id(
    pool: &SqlitePool,
    location_id: i64,
) -> Result<Location, LedgerError> {
    let location =
        sqlx::query_as::<_, Location>("SELECT id, name, active FROM locations WHERE id = ?")
            .bind(location_id)
            .fetch_one(pool)
            .await?;

    Ok(location)
}

pub async fn list_locations(pool: &SqlitePool) -> Result<Vec<Location>, LedgerError> {
    let locations = sqlx::query_as::<_, Location>(
        "SELECT id, name, active FROM locations ORDER BY name COLLATE NOCASE ASC, id ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(locations)
}

// Attendance queries

pub async fn get_attendance_by_id(
    pool: &SqlitePool,
    record_id: i64,
) -> Result<AttendanceRecord, LedgerError> {
    let record = sqlx::query_as::<_, AttendanceRecord>(
        "SELECT id, employee_id, date, status, recorded_at FROM attendance WHERE id = ?",
    )
    .bind(record_id)
    .fetch_one(pool)
    .await?;

    Ok(record)
}

pub async fn get_attendance_on(
    pool: &SqlitePool,
    employee_id: i64,
    date: NaiveDate,
) -> Result<Option<AttendanceRecord>, LedgerError> {
    let record = sqlx::query_as::<_, AttendanceRecord>(
        "SELECT id, employee_id, date, status, recorded_at FROM attendance
         WHERE employee_id = ? AND date = ?",
    )
    .bind(employee_id)
    .bind(date)
    .fetch_optional(pool)
    .await?;

    Ok(record)
}

pub async fn attendance_for_range(
    pool: &SqlitePool,
    employee_id: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Vec<AttendanceRecord>, LedgerError> {
    let records = sqlx::query_as::<_, AttendanceRecord>(
        "SELECT id, employee_id, date, status, recorded_at FROM attendance
         WHERE employee_id = ? AND date >= ? AND date <= ?
         ORDER BY date ASC",
    )
    .bind(employee_id)
    .bind(start_date)
    .bind(end_date)
    .fetch_all(pool)
    .await?;

    Ok(records)
}

/// Absence dates for one employee, newest first. Feeds the streak detector.
pub async fn absent_dates(
    pool: &SqlitePool,
    employee_id: i64,
) -> Result<Vec<NaiveDate>, LedgerError> {
    let dates = sqlx::query_scalar::<_, NaiveDate>(
        "SELECT date FROM attendance
         WHERE employee_id = ? AND status = 'absent'
         ORDER BY date DESC",
    )
    .bind(employee_id)
    .fetch_all(pool)
    .await?;

    Ok(dates)
}

// Payment queries

pub async fn get_payment_by_id(
    pool: &SqlitePool,
    payment_id: i64,
) -> Result<PaymentRecord, LedgerError> {
    let payment = sqlx::query_as::<_, PaymentRecord>(
        "SELECT id, employee_id, date, base_amount, extra_amount, status, period, recorded_at
         FROM payments WHERE id = ?",
    )
    .bind(payment_id)
    .fetch_one(pool)
    .await?;

    Ok(payment)
}

pub async fn get_payment_on(
    pool: &SqlitePool,
    employee_id: i64,
    date: NaiveDate,
) -> Result<Option<PaymentRecord>, LedgerError> {
    let payment = sqlx::query_as::<_, PaymentRecord>(
        "SELECT id, employee_id, date, base_amount, extra_amount, status, period, recorded_at
         FROM payments WHERE employee_id = ? AND date = ?",
    )
    .bind(employee_id)
    .bind(date)
    .fetch_optional(pool)
    .await?;

    Ok(payment)
}

pub async fn payments_for_range(
    pool: &SqlitePool,
    employee_id: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Vec<PaymentRecord>, LedgerError> {
    let payments = sqlx::query_as::<_, PaymentRecord>(
        "SELECT id, employee_id, date, base_amount, extra_amount, status, period, recorded_at
         FROM payments
         WHERE employee_id = ? AND date >= ? AND date <= ?
         ORDER BY date ASC",
    )
    .bind(employee_id)
    .bind(start_date)
    .bind(end_date)
    .fetch_all(pool)
    .await?;

    Ok(payments)
}

pub async fn payments_for_period(
    pool: &SqlitePool,
    period: &str,
) -> Result<Vec<PaymentRecord>, LedgerError> {
    let payments = sqlx::query_as::<_, PaymentRecord>(
        "SELECT id, employee_id, date, base_amount, extra_amount, status, period, recorded_at
         FROM payments
         WHERE period = ?
         ORDER BY date ASC, employee_id ASC",
    )
    .bind(period)
    .fetch_all(pool)
    .await?;

    Ok(payments)
}

// Advance queries

pub async fn get_advance_by_id(
    pool: &SqlitePool,
    advance_id: i64,
) -> Result<AdvanceRecord, LedgerError> {
    let advance = sqlx::query_as::<_, AdvanceRecord>(
        "SELECT id, employee_id, date, amount, note, period, recorded_at
         FROM advances WHERE id = ?",
    )
    .bind(advance_id)
    .fetch_one(pool)
    .await?;

    Ok(advance)
}

pub async fn advances_for_range(
    pool: &SqlitePool,
    employee_id: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Vec<AdvanceRecord>, LedgerError> {
    let advances = sqlx::query_as::<_, AdvanceRecord>(
        "SELECT id, employee_id, date, amount, note, period, recorded_at
         FROM advances
         WHERE employee_id = ? AND date >= ? AND date <= ?
         ORDER BY date ASC, id ASC",
    )
    .bind(employee_id)
    .bind(start_date)
    .bind(end_date)
    .fetch_all(pool)
    .await?;

    Ok(advances)
}

pub async fn advances_for_period(
    pool: &SqlitePool,
    period: &str,
) -> Result<Vec<AdvanceRecord>, LedgerError> {
    let advances = sqlx::query_as::<_, AdvanceRecord>(
        "SELECT id, employee_id, date, amount, note, period, recorded_at
         FROM advances
         WHERE period = ?
         ORDER BY date ASC, id ASC",
    )
    .bind(period)
    .fetch_all(pool)
    .await?;

    Ok(advances)
}

// Extra queries

pub async fn get_extra_by_id(pool: &SqlitePool, extra_id: i64) -> Result<ExtraRecord, LedgerError> {
    let extra = sqlx::query_as::<_, ExtraRecord>(
        "SELECT id, employee_id, date, amount, hours, note, period, recorded_at
         FROM extras WHERE id = ?",
    )
    .bind(extra_id)
    .fetch_one(pool)
    .await?;

    Ok(extra)
}

pub async fn extras_for_range(
    pool: &SqlitePool,
    employee_id: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Vec<ExtraRecord>, LedgerError> {
    let extras = sqlx::query_as::<_, ExtraRecord>(
        "SELECT id, employee_id, date, amount, hours, note, period, recorded_at
         FROM extras
         WHERE employee_id = ? AND date >= ? AND date <= ?
         ORDER BY date ASC, id ASC",
    )
    .bind(employee_id)
    .bind(start_date)
    .bind(end_date)
    .fetch_all(pool)
    .await?;

    Ok(extras)
}

pub async fn extras_for_period(
    pool: &SqlitePool,
    period: &str,
) -> Result<Vec<ExtraRecord>, LedgerError> {
    let extras = sqlx::query_as::<_, ExtraRecord>(
        "SELECT id, employee_id, date, amount, hours, note, period, recorded_at
         FROM extras
         WHERE period = ?
         ORDER BY date ASC, id ASC",
    )
    .bind(period)
    .fetch_all(pool)
    .await?;

    Ok(extras)
}

// Overview counters

pub async fn count_active_employees(pool: &SqlitePool) -> Result<i64, LedgerError> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees WHERE active = TRUE")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

pub async fn count_active_locations(pool: &SqlitePool) -> Result<i64, LedgerError> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM locations WHERE active = TRUE")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

pub async fn count_present_on(pool: &SqlitePool, date: NaiveDate) -> Result<i64, LedgerError> {
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM attendance WHERE date = ? AND status = 'present'",
    )
    .bind(date)
    .fetch_one(pool)
    .await?;

    Ok(count)
}

pub async fn total_paid_base_in_period(
    pool: &SqlitePool,
    period: &str,
) -> Result<i64, LedgerError> {
    let total = sqlx::query_scalar::<_, i64>(
        "SELECT COALESCE(SUM(base_amount), 0) FROM payments
         WHERE period = ? AND status = 'paid'",
    )
    .bind(period)
    .fetch_one(pool)
    .await?;

    Ok(total)
}
