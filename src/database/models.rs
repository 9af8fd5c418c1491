use crate::error::LedgerError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub daily_rate: i64,
    pub location_id: i64,
    pub active: bool,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,
    pub status: String, // "present" or "absent"
    pub recorded_at: DateTime<Utc>,
}

impl AttendanceRecord {
    pub fn is_present(&self) -> bool {
        self.status == AttendanceStatus::Present.as_str()
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,
    pub base_amount: i64,
    pub extra_amount: i64,
    pub status: String, // always "paid" once stored; an absent row is the unpaid state
    pub period: String, // "YYYY-MM", derived from date
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AdvanceRecord {
    pub id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,
    pub amount: i64,
    pub note: Option<String>,
    pub period: String,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ExtraRecord {
    pub id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,
    pub amount: i64,
    pub hours: Option<f64>, // informational only, never enters balance arithmetic
    pub note: Option<String>,
    pub period: String,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
        }
    }
}

impl FromStr for AttendanceStatus {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(AttendanceStatus::Present),
            "absent" => Ok(AttendanceStatus::Absent),
            _ => Err(LedgerError::InvalidStatus(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub role: String,
    pub daily_rate: i64,
    pub location_id: i64,
}

/// Partial update; `None` fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub role: Option<String>,
    pub daily_rate: Option<i64>,
    pub location_id: Option<i64>,
    pub active: Option<bool>,
}

/// Result of a payment registration: duplicates are answered with the
/// already-stored row instead of a second insert.
#[derive(Debug, Clone)]
pub enum PaymentOutcome {
    Recorded(PaymentRecord),
    AlreadyPaid(PaymentRecord),
}

impl PaymentOutcome {
    pub fn record(&self) -> &PaymentRecord {
        match self {
            PaymentOutcome::Recorded(record) => record,
            PaymentOutcome::AlreadyPaid(record) => record,
        }
    }

    pub fn was_recorded(&self) -> bool {
        matches!(self, PaymentOutcome::Recorded(_))
    }
}
