use crate::error::LedgerError;
use chrono::NaiveDate;

/// Period key for a date, e.g. 2024-03-15 -> "2024-03".
pub fn period_of(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

pub fn current_date() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn current_period() -> String {
    period_of(current_date())
}

/// First and last day of a calendar month, inclusive.
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), LedgerError> {
    let first =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(LedgerError::InvalidMonth { year, month })?;

    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .ok_or(LedgerError::InvalidMonth { year, month })?;
    let last = first_of_next
        .pred_opt()
        .ok_or(LedgerError::InvalidMonth { year, month })?;

    Ok((first, last))
}

pub fn parse_date(date_str: &str) -> Result<NaiveDate, LedgerError> {
    let date_str = date_str.trim();
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| LedgerError::MalformedDate(date_str.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn period_is_year_and_month() {
        assert_eq!(period_of(date("2024-03-15")), "2024-03");
        assert_eq!(period_of(date("2024-11-01")), "2024-11");
    }

    #[test]
    fn period_matches_date_prefix() {
        let d = date("2024-07-09");
        assert_eq!(period_of(d), d.format("%Y-%m-%d").to_string()[0..7]);
    }

    #[test]
    fn month_bounds_regular_month() {
        let (first, last) = month_bounds(2024, 4).unwrap();
        assert_eq!(first, date("2024-04-01"));
        assert_eq!(last, date("2024-04-30"));
    }

    #[test]
    fn month_bounds_december_wraps_year() {
        let (first, last) = month_bounds(2023, 12).unwrap();
        assert_eq!(first, date("2023-12-01"));
        assert_eq!(last, date("2023-12-31"));
    }

    #[test]
    fn month_bounds_leap_february() {
        let (_, last) = month_bounds(2024, 2).unwrap();
        assert_eq!(last, date("2024-02-29"));

        let (_, last) = month_bounds(2023, 2).unwrap();
        assert_eq!(last, date("2023-02-28"));
    }

    #[test]
    fn month_bounds_rejects_invalid_month() {
        assert!(month_bounds(2024, 0).is_err());
        assert!(month_bounds(2024, 13).is_err());
    }

    #[test]
    fn parse_date_accepts_iso_and_trims() {
        assert_eq!(parse_date("2024-01-05").unwrap(), date("2024-01-05"));
        assert_eq!(parse_date(" 2024-01-05 ").unwrap(), date("2024-01-05"));
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(parse_date("01/05/2024").is_err());
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("").is_err());
    }
}
