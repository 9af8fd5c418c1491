//! Attendance and day-wage payroll ledger.
//!
//! Four event streams (attendance marks, base-salary payments, cash
//! advances, extra credits) are written through [`Store`] under its
//! per-mutation lock, then reconciled on demand by the [`engine`] into
//! per-employee settlement summaries and consecutive-absence alerts.
//! All arithmetic runs on whole monetary units and ISO calendar dates.

pub mod config;
pub mod database;
pub mod engine;
pub mod error;
pub mod utils;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database::models::{
    AdvanceRecord, AttendanceRecord, AttendanceStatus, Employee, EmployeeUpdate, ExtraRecord,
    Location, NewEmployee, PaymentOutcome, PaymentRecord,
};
pub use database::Store;
pub use engine::absence::{
    absence_alerts, check_consecutive_absences, has_consecutive_absences, longest_absence_run,
};
pub use engine::summary::{
    daily_overview, employee_summary, location_board, rank_by_pending, summarize,
    summarize_employees, DailyOverview, DateRange, EmployeeSummary, SettlementStatus, SummaryRow,
};
pub use error::LedgerError;
