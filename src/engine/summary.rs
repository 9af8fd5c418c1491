use crate::database::models::{
    AdvanceRecord, AttendanceRecord, Employee, ExtraRecord, PaymentRecord,
};
use crate::database::queries;
use crate::error::LedgerError;
use crate::utils::time::{month_bounds, period_of};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Inclusive date window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, LedgerError> {
        if start > end {
            return Err(LedgerError::InvalidDateRange { start, end });
        }
        Ok(DateRange { start, end })
    }

    /// Window covering one calendar month.
    pub fn month(year: i32, month: u32) -> Result<Self, LedgerError> {
        let (start, end) = month_bounds(year, month)?;
        Ok(DateRange { start, end })
    }

    pub fn single_day(date: NaiveDate) -> Self {
        DateRange {
            start: date,
            end: date,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Where an employee's settlement stands for a date window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementStatus {
    /// No present days and no registered extras in the window.
    NoActivity,
    /// Nothing outstanding. Overpaid windows land here too.
    Paid,
    /// Some money moved (payment or advance) but a balance remains.
    Partial,
    /// Earnings with no payment or advance against them yet.
    Pending,
}

impl SettlementStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettlementStatus::NoActivity => "no_activity",
            SettlementStatus::Paid => "paid",
            SettlementStatus::Partial => "partial",
            SettlementStatus::Pending => "pending",
        }
    }
}

/// Reconciled figures for one employee over one date window.
///
/// Report and export composers consume this object as-is; they never go
/// back to the raw records to re-derive a sum, so the balance arithmetic
/// lives in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    pub days_worked: i64,
    pub total_earned: i64,
    pub total_paid_base: i64,
    pub total_paid_extras: i64,
    pub total_advances: i64,
    pub total_registered_extras: i64,
    pub pending_balance: i64,
    pub status: SettlementStatus,
}

/// Reconciles the four event streams into a settlement summary.
///
/// Each stream is filtered to the window here, so callers may hand in
/// wider slices. Extras paid out with a payment (`extra_amount`) and
/// extras registered on their own ledger are separate lines: only the
/// registered side enters the balance, and paid extras reduce nothing.
pub fn summarize(
    daily_rate: i64,
    range: DateRange,
    attendance: &[AttendanceRecord],
    payments: &[PaymentRecord],
    advances: &[AdvanceRecord],
    extras: &[ExtraRecord],
) -> EmployeeSummary {
    let days_worked = attendance
        .iter()
        .filter(|record| range.contains(record.date) && record.is_present())
        .count() as i64;

    let total_earned = days_worked * daily_rate;

    let mut total_paid_base = 0i64;
    let mut total_paid_extras = 0i64;
    for payment in payments.iter().filter(|p| range.contains(p.date)) {
        total_paid_base += payment.base_amount;
        total_paid_extras += payment.extra_amount;
    }

    let total_advances: i64 = advances
        .iter()
        .filter(|advance| range.contains(advance.date))
        .map(|advance| advance.amount)
        .sum();

    let mut total_registered_extras = 0i64;
    let mut registered_extra_count = 0usize;
    for extra in extras.iter().filter(|e| range.contains(e.date)) {
        total_registered_extras += extra.amount;
        registered_extra_count += 1;
    }

    let pending_balance = total_earned + total_registered_extras - total_paid_base - total_advances;

    let status = if days_worked == 0 && registered_extra_count == 0 {
        SettlementStatus::NoActivity
    } else if pending_balance <= 0 {
        SettlementStatus::Paid
    } else if total_paid_base > 0 || total_advances > 0 {
        SettlementStatus::Partial
    } else {
        SettlementStatus::Pending
    };

    EmployeeSummary {
        days_worked,
        total_earned,
        total_paid_base,
        total_paid_extras,
        total_advances,
        total_registered_extras,
        pending_balance,
        status,
    }
}

/// Fetches the four streams for one employee and reconciles them.
pub async fn employee_summary(
    pool: &SqlitePool,
    employee: &Employee,
    range: DateRange,
) -> Result<EmployeeSummary, LedgerError> {
    let attendance =
        queries::attendance_for_range(pool, employee.id, range.start, range.end).await?;
    let payments = queries::payments_for_range(pool, employee.id, range.start, range.end).await?;
    let advances = queries::advances_for_range(pool, employee.id, range.start, range.end).await?;
    let extras = queries::extras_for_range(pool, employee.id, range.start, range.end).await?;

    Ok(summarize(
        employee.daily_rate,
        range,
        &attendance,
        &payments,
        &advances,
        &extras,
    ))
}

/// One employee with their reconciled figures, as handed to list consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRow {
    pub employee: Employee,
    pub summary: EmployeeSummary,
}

pub async fn summarize_employees(
    pool: &SqlitePool,
    employees: &[Employee],
    range: DateRange,
) -> Result<Vec<SummaryRow>, LedgerError> {
    let mut rows = Vec::with_capacity(employees.len());
    for employee in employees {
        let summary = employee_summary(pool, employee, range).await?;
        rows.push(SummaryRow {
            employee: employee.clone(),
            summary,
        });
    }
    Ok(rows)
}

/// Largest outstanding balance first; equal balances fall back to name
/// order so repeated runs list employees identically.
pub fn rank_by_pending(rows: &mut [SummaryRow]) {
    rows.sort_by(|a, b| {
        b.summary
            .pending_balance
            .cmp(&a.summary.pending_balance)
            .then_with(|| {
                a.employee
                    .name
                    .to_lowercase()
                    .cmp(&b.employee.name.to_lowercase())
            })
    });
}

/// Settlement board for one location: its active employees, reconciled
/// over the window and ranked by outstanding balance.
pub async fn location_board(
    pool: &SqlitePool,
    location_id: i64,
    range: DateRange,
) -> Result<Vec<SummaryRow>, LedgerError> {
    let employees = queries::list_active_employees_for_location(pool, location_id).await?;
    let mut rows = summarize_employees(pool, &employees, range).await?;
    rank_by_pending(&mut rows);
    Ok(rows)
}

/// Headline counters for one day. The paid figure covers base amounts in
/// the day's period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyOverview {
    pub active_employees: i64,
    pub active_locations: i64,
    pub present_today: i64,
    pub paid_this_month: i64,
}

pub async fn daily_overview(
    pool: &SqlitePool,
    date: NaiveDate,
) -> Result<DailyOverview, LedgerError> {
    let active_employees = queries::count_active_employees(pool).await?;
    let active_locations = queries::count_active_locations(pool).await?;
    let present_today = queries::count_present_on(pool, date).await?;
    let paid_this_month = queries::total_paid_base_in_period(pool, &period_of(date)).await?;

    Ok(DailyOverview {
        active_employees,
        active_locations,
        present_today,
        paid_this_month,
    })
}
