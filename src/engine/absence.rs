use crate::database::models::Employee;
use crate::database::queries;
use crate::error::LedgerError;
use chrono::NaiveDate;
use sqlx::SqlitePool;

/// Longest run of absences on consecutive calendar days.
///
/// Only recorded absence dates are measured: a day with no record at all
/// neither extends a run nor breaks one. The scan walks the dates newest
/// first and restarts the counter at 1 on any gap wider than one day.
pub fn longest_absence_run(dates: &[NaiveDate]) -> u32 {
    if dates.is_empty() {
        return 0;
    }

    let mut sorted = dates.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    // A repeated date would read as a zero-day gap and split the run.
    sorted.dedup();

    let mut longest = 1u32;
    let mut streak = 1u32;

    for pair in sorted.windows(2) {
        let gap = pair[0].signed_duration_since(pair[1]).num_days();
        if gap == 1 {
            streak += 1;
            longest = longest.max(streak);
        } else {
            streak = 1;
        }
    }

    longest
}

/// True when at least `threshold` recorded absences fall on consecutive
/// calendar days.
pub fn has_consecutive_absences(dates: &[NaiveDate], threshold: u32) -> bool {
    longest_absence_run(dates) >= threshold
}

/// Store-backed detector for one employee.
pub async fn check_consecutive_absences(
    pool: &SqlitePool,
    employee_id: i64,
    threshold: u32,
) -> Result<bool, LedgerError> {
    let dates = queries::absent_dates(pool, employee_id).await?;
    Ok(has_consecutive_absences(&dates, threshold))
}

/// Active employees currently at or over the absence threshold.
pub async fn absence_alerts(
    pool: &SqlitePool,
    threshold: u32,
) -> Result<Vec<Employee>, LedgerError> {
    let mut flagged = Vec::new();

    for employee in queries::list_active_employees(pool).await? {
        if check_consecutive_absences(pool, employee.id, threshold).await? {
            flagged.push(employee);
        }
    }

    Ok(flagged)
}
