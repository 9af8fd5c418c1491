use crate::error::LedgerError;
use sqlx::SqlitePool;
use tracing::info;

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), LedgerError> {
    info!("Running database migrations...");

    create_locations_table(pool).await?;
    create_employees_table(pool).await?;
    create_attendance_table(pool).await?;
    create_payments_table(pool).await?;
    create_advances_table(pool).await?;
    create_extras_table(pool).await?;

    info!("Database migrations completed successfully");
    Ok(())
}

async fn create_locations_table(pool: &SqlitePool) -> Result<(), LedgerError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS locations (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            active BOOLEAN NOT NULL DEFAULT TRUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_employees_table(pool: &SqlitePool) -> Result<(), LedgerError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            role TEXT NOT NULL,
            daily_rate INTEGER NOT NULL,
            location_id INTEGER NOT NULL,
            active BOOLEAN NOT NULL DEFAULT TRUE,
            FOREIGN KEY (location_id) REFERENCES locations (id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_attendance_table(pool: &SqlitePool) -> Result<(), LedgerError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            id INTEGER PRIMARY KEY,
            employee_id INTEGER NOT NULL,
            date DATE NOT NULL,
            status TEXT NOT NULL CHECK (status IN ('present', 'absent')),
            recorded_at DATETIME NOT NULL,
            FOREIGN KEY (employee_id) REFERENCES employees (id),
            UNIQUE (employee_id, date)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_payments_table(pool: &SqlitePool) -> Result<(), LedgerError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS payments (
            id INTEGER PRIMARY KEY,
            employee_id INTEGER NOT NULL,
            date DATE NOT NULL,
            base_amount INTEGER NOT NULL,
            extra_amount INTEGER NOT NULL DEFAULT 0,
            status TEXT NOT NULL DEFAULT 'paid',
            period TEXT NOT NULL,
            recorded_at DATETIME NOT NULL,
            FOREIGN KEY (employee_id) REFERENCES employees (id),
            UNIQUE (employee_id, date)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_advances_table(pool: &SqlitePool) -> Result<(), LedgerError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS advances (
            id INTEGER PRIMARY KEY,
            employee_id INTEGER NOT NULL,
            date DATE NOT NULL,
            amount INTEGER NOT NULL,
            note TEXT,
            period TEXT NOT NULL,
            recorded_at DATETIME NOT NULL,
            FOREIGN KEY (employee_id) REFERENCES employees (id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_extras_table(pool: &SqlitePool) -> Result<(), LedgerError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS extras (
            id INTEGER PRIMARY KEY,
            employee_id INTEGER NOT NULL,
            date DATE NOT NULL,
            amount INTEGER NOT NULL,
            hours REAL,
            note TEXT,
            period TEXT NOT NULL,
            recorded_at DATETIME NOT NULL,
            FOREIGN KEY (employee_id) REFERENCES employees (id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
