//! Shift configuration model.
//!
//! This module defines the ShiftConfig struct describing the expected
//! working window and tolerances for an employee.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Per-employee scheduling policy.
///
/// The scheduled window may wrap past midnight (overnight shift); the
/// engine never assumes `scheduled_end > scheduled_start`.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::ShiftConfig;
/// use chrono::NaiveTime;
///
/// let shift = ShiftConfig {
///     name: "Commercial".to_string(),
///     scheduled_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     scheduled_end: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
///     break_minutes: 60,
///     grace_minutes: 5,
/// };
/// assert!(!shift.is_overnight());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftConfig {
    /// Display name of the shift (e.g. "Commercial", "Night").
    pub name: String,
    /// Scheduled start of the working day (time-of-day, no date).
    pub scheduled_start: NaiveTime,
    /// Scheduled end of the working day (time-of-day, no date).
    pub scheduled_end: NaiveTime,
    /// Expected break duration in minutes.
    pub break_minutes: u32,
    /// Minutes of lateness tolerated before lateness is counted.
    pub grace_minutes: u32,
}

impl ShiftConfig {
    /// Returns true when the scheduled window wraps past midnight.
    ///
    /// Overnight shifts keep their literal arithmetic in metric
    /// computation; this flag only lets callers surface the condition.
    pub fn is_overnight(&self) -> bool {
        self.scheduled_end < self.scheduled_start
    }
}
