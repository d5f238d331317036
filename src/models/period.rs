//! Report period model.
//!
//! This module contains the [`ReportPeriod`] type that defines the date
//! range a timesheet report covers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An inclusive date range for a timesheet report.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::ReportPeriod;
/// use chrono::NaiveDate;
///
/// let period = ReportPeriod {
///     start_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()));
/// assert!(period.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
}

impl ReportPeriod {
    /// Checks if a given date falls within this period.
    ///
    /// The check is inclusive of both start and end dates.
    ///
    /// # Example
    ///
    /// ```
    /// use timesheet_engine::models::ReportPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = ReportPeriod {
    ///     start_date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2026, 3, 6).unwrap(),
    /// };
    ///
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()));
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 3, 6).unwrap()));
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 3, 7).unwrap()));
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Checks that the period is well-formed.
    ///
    /// Malformed ranges are rejected here, before the engine runs; the
    /// engine itself assumes a validated range.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPeriod`] when the end date precedes
    /// the start date.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end_date < self.start_date {
            return Err(EngineError::InvalidPeriod {
                message: format!(
                    "end date {} is before start date {}",
                    self.end_date, self.start_date
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn march_week() -> ReportPeriod {
        ReportPeriod {
            start_date: make_date("2026-03-02"),
            end_date: make_date("2026-03-06"),
        }
    }

    #[test]
    fn test_contains_date_within_period() {
        assert!(march_week().contains_date(make_date("2026-03-04")));
    }

    #[test]
    fn test_contains_date_on_boundaries() {
        let period = march_week();
        assert!(period.contains_date(period.start_date));
        assert!(period.contains_date(period.end_date));
    }

    #[test]
    fn test_contains_date_outside_period() {
        let period = march_week();
        assert!(!period.contains_date(make_date("2026-03-01")));
        assert!(!period.contains_date(make_date("2026-03-07")));
    }

    #[test]
    fn test_validate_accepts_well_formed_period() {
        assert!(march_week().validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_single_day_period() {
        let period = ReportPeriod {
            start_date: make_date("2026-03-02"),
            end_date: make_date("2026-03-02"),
        };
        assert!(period.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_period() {
        let period = ReportPeriod {
            start_date: make_date("2026-03-06"),
            end_date: make_date("2026-03-02"),
        };
        let error = period.validate().unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid report period: end date 2026-03-02 is before start date 2026-03-06"
        );
    }

    #[test]
    fn test_serialize_period() {
        let json = serde_json::to_string(&march_week()).unwrap();
        assert!(json.contains("\"start_date\":\"2026-03-02\""));
        assert!(json.contains("\"end_date\":\"2026-03-06\""));
    }

    #[test]
    fn test_deserialize_period() {
        let json = r#"{"start_date": "2026-03-02", "end_date": "2026-03-06"}"#;
        let period: ReportPeriod = serde_json::from_str(json).unwrap();
        assert_eq!(period, march_week());
    }
}
