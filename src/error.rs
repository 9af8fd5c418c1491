use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Amount must be greater than zero, got {0}")]
    NonPositiveAmount(i64),

    #[error("Amount must not be negative, got {0}")]
    NegativeAmount(i64),

    #[error("Daily rate must be greater than zero, got {0}")]
    NonPositiveRate(i64),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    MalformedDate(String),

    #[error("Invalid month {month} in year {year}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid attendance status '{0}', expected 'present' or 'absent'")]
    InvalidStatus(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
