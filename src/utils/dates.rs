//! Date filter resolution for list and stats queries.

use chrono::{Local, NaiveDate};
use serde_json::json;

use crate::domain::analysis::DateRange;
use crate::error::AppError;

/// Current calendar day in the server's local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Builds a [`DateRange`] from the `date`, `from` and `to` query parameters.
///
/// A single `date` wins over `from`/`to`. Missing bounds are unbounded.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if `from` is after `to`.
pub fn resolve_range(
    date: Option<NaiveDate>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<DateRange, AppError> {
    if let Some(day) = date {
        return Ok(DateRange::day(day));
    }

    if let (Some(from), Some(to)) = (from, to)
        && from > to
    {
        return Err(AppError::bad_request(
            "Invalid date range",
            json!({ "reason": "'from' must not be after 'to'", "from": from, "to": to }),
        ));
    }

    Ok(DateRange::new(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_single_date_wins() {
        let range = resolve_range(Some(d("2025-06-01")), Some(d("2025-01-01")), None).unwrap();
        assert_eq!(range, DateRange::day(d("2025-06-01")));
    }

    #[test]
    fn test_open_bounds() {
        let range = resolve_range(None, Some(d("2025-01-01")), None).unwrap();
        assert_eq!(range.from, Some(d("2025-01-01")));
        assert_eq!(range.to, None);

        assert!(resolve_range(None, None, None).unwrap().is_unbounded());
    }

    #[test]
    fn test_today_is_a_single_day_range() {
        let day = today();
        assert!(DateRange::day(day).contains(day));
        assert!(!DateRange::day(day).contains(day.succ_opt().unwrap()));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = resolve_range(None, Some(d("2025-02-01")), Some(d("2025-01-01"))).unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }
}
