pub mod migrations;
pub mod models;
pub(crate) mod mutations;
pub mod queries;

use crate::error::LedgerError;
use models::{
    AdvanceRecord, AttendanceRecord, AttendanceStatus, Employee, EmployeeUpdate, ExtraRecord,
    Location, NewEmployee, PaymentOutcome,
};
use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tokio::sync::Mutex;

/// Handle to the ledger database.
///
/// All writes go through methods on this type and are serialized by an
/// internal lock, so one mutation finishes before the next starts and a
/// concurrent read never sees a half-applied change. Reads go straight to
/// [`queries`] with the pool from [`Store::pool`].
pub struct Store {
    pool: SqlitePool,
    write_lock: Mutex<()>,
}

impl Store {
    /// Opens (creating if missing) the database at `database_url` and runs
    /// migrations.
    pub async fn connect(database_url: &str) -> Result<Self, LedgerError> {
        let connect_options =
            SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePool::connect_with(connect_options).await?;

        migrations::run_migrations(&pool).await?;

        tracing::info!("Connected to ledger database at {}", database_url);

        Ok(Store {
            pool,
            write_lock: Mutex::new(()),
        })
    }

    /// In-memory database for tests. The pool is capped at one connection
    /// that is never recycled; a fresh connection would see an empty
    /// database.
    pub async fn in_memory() -> Result<Self, LedgerError> {
        let connect_options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(connect_options)
            .await?;

        migrations::run_migrations(&pool).await?;

        Ok(Store {
            pool,
            write_lock: Mutex::new(()),
        })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Records attendance for one employee on one day. Marking a day twice
    /// overwrites the earlier status and refreshes its timestamp; the store
    /// never holds two rows for the same (employee, date).
    pub async fn mark_attendance(
        &self,
        employee_id: i64,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> Result<AttendanceRecord, LedgerError> {
        let _guard = self.write_lock.lock().await;
        mutations::mark_attendance(&self.pool, employee_id, date, status).await
    }

    /// Removes the attendance mark for (employee, date). Returns `false`
    /// when there was nothing to remove.
    pub async fn clear_attendance(
        &self,
        employee_id: i64,
        date: NaiveDate,
    ) -> Result<bool, LedgerError> {
        let _guard = self.write_lock.lock().await;
        mutations::clear_attendance(&self.pool, employee_id, date).await
    }

    /// Registers a base-salary payment for one day. A day already paid is
    /// left untouched and reported via [`PaymentOutcome::AlreadyPaid`].
    pub async fn register_payment(
        &self,
        employee_id: i64,
        date: NaiveDate,
        base_amount: i64,
        extra_amount: i64,
    ) -> Result<PaymentOutcome, LedgerError> {
        let _guard = self.write_lock.lock().await;
        mutations::register_payment(&self.pool, employee_id, date, base_amount, extra_amount).await
    }

    pub async fn register_advance(
        &self,
        employee_id: i64,
        amount: i64,
        date: NaiveDate,
        note: Option<&str>,
    ) -> Result<AdvanceRecord, LedgerError> {
        let _guard = self.write_lock.lock().await;
        mutations::register_advance(&self.pool, employee_id, amount, date, note).await
    }

    pub async fn remove_advance(&self, advance_id: i64) -> Result<bool, LedgerError> {
        let _guard = self.write_lock.lock().await;
        mutations::remove_advance(&self.pool, advance_id).await
    }

    pub async fn register_extra(
        &self,
        employee_id: i64,
        amount: i64,
        date: NaiveDate,
        hours: Option<f64>,
        note: Option<&str>,
    ) -> Result<ExtraRecord, LedgerError> {
        let _guard = self.write_lock.lock().await;
        mutations::register_extra(&self.pool, employee_id, amount, date, hours, note).await
    }

    pub async fn remove_extra(&self, extra_id: i64) -> Result<bool, LedgerError> {
        let _guard = self.write_lock.lock().await;
        mutations::remove_extra(&self.pool, extra_id).await
    }

    pub async fn create_location(&self, name: &str) -> Result<Location, LedgerError> {
        let _guard = self.write_lock.lock().await;
        mutations::create_location(&self.pool, name).await
    }

    /// Flips a location between active and inactive. Unknown ids are a
    /// no-op returning `None`.
    pub async fn toggle_location(&self, location_id: i64) -> Result<Option<Location>, LedgerError> {
        let _guard = self.write_lock.lock().await;
        mutations::toggle_location(&self.pool, location_id).await
    }

    pub async fn create_employee(
        &self,
        new_employee: &NewEmployee,
    ) -> Result<Employee, LedgerError> {
        let _guard = self.write_lock.lock().await;
        mutations::create_employee(&self.pool, new_employee).await
    }

    /// Applies the supplied fields, keeping the rest. Unknown ids are a
    /// no-op returning `None`. Employees are deactivated here, never
    /// deleted.
    pub async fn update_employee(
        &self,
        employee_id: i64,
        update: &EmployeeUpdate,
    ) -> Result<Option<Employee>, LedgerError> {
        let _guard = self.write_lock.lock().await;
        mutations::update_employee(&self.pool, employee_id, update).await
    }

    /// Clears attendance, payments, advances and extras. Locations and
    /// employees survive.
    pub async fn reset_ledgers(&self) -> Result<(), LedgerError> {
        let _guard = self.write_lock.lock().await;
        mutations::reset_ledgers(&self.pool).await
    }
}
