//! Punch event model and related types.
//!
//! This module defines the PunchEvent struct together with the PunchKind
//! and PunchSource enums that describe a single observed time-clock action.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// The kind of time-clock action a punch records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PunchKind {
    /// The employee arrived for the day.
    ClockIn,
    /// The employee left for the day.
    ClockOut,
    /// The employee started a break.
    BreakStart,
    /// The employee returned from a break.
    BreakEnd,
}

impl std::fmt::Display for PunchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PunchKind::ClockIn => write!(f, "clock_in"),
            PunchKind::ClockOut => write!(f, "clock_out"),
            PunchKind::BreakStart => write!(f, "break_start"),
            PunchKind::BreakEnd => write!(f, "break_end"),
        }
    }
}

/// Where a punch was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PunchSource {
    /// Recorded by the biometric terminal.
    Terminal,
    /// Entered after the fact by an authorized reviewer.
    ManualAdjustment,
}

/// A single observed or manually-adjusted time-clock action.
///
/// Punch events are immutable inputs to the engine. Duplicate punches of
/// the same kind within a day are possible (a common failure mode of
/// biometric hardware) and are tolerated by role resolution.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::{PunchEvent, PunchKind, PunchSource};
/// use chrono::DateTime;
///
/// let punch = PunchEvent {
///     employee_id: "12345".to_string(),
///     timestamp: DateTime::parse_from_rfc3339("2026-03-02T09:00:00-03:00").unwrap(),
///     kind: PunchKind::ClockIn,
///     source: PunchSource::Terminal,
///     justification: None,
/// };
/// assert_eq!(punch.kind, PunchKind::ClockIn);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PunchEvent {
    /// Identifier of the employee the punch belongs to.
    pub employee_id: String,
    /// When the punch happened. Time-zone-aware with second precision;
    /// the engine compares wall-clock values in the timestamp's own zone.
    pub timestamp: DateTime<FixedOffset>,
    /// The kind of time-clock action.
    pub kind: PunchKind,
    /// Where the punch was produced.
    pub source: PunchSource,
    /// Reviewer-supplied reason, required upstream for manual adjustments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
}
