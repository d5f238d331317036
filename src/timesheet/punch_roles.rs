//! Canonical punch role resolution for a single day.

use crate::models::{PunchEvent, PunchKind};

/// The canonical punches of one day, any of which may be absent.
///
/// Role resolution is asymmetric: start-type roles take the FIRST
/// occurrence of their kind, end-type roles take the LAST. Duplicate
/// terminal reads therefore resolve to the earliest entry and the latest
/// exit, yielding the longest plausible attendance window rather than a
/// spurious short one.
#[derive(Debug, Clone, Copy, Default)]
pub struct DayRoles<'a> {
    /// First `ClockIn` punch of the day.
    pub clock_in: Option<&'a PunchEvent>,
    /// Last `ClockOut` punch of the day.
    pub clock_out: Option<&'a PunchEvent>,
    /// First `BreakStart` punch of the day.
    pub break_start: Option<&'a PunchEvent>,
    /// Last `BreakEnd` punch of the day.
    pub break_end: Option<&'a PunchEvent>,
}

impl DayRoles<'_> {
    /// Returns true when both the entry and exit punches are present.
    ///
    /// Incomplete days contribute zeroed metrics instead of raising.
    pub fn is_complete(&self) -> bool {
        self.clock_in.is_some() && self.clock_out.is_some()
    }
}

/// Selects at most one punch for each of the four canonical roles.
///
/// Expects the day's punches in input (ascending timestamp) order.
/// A kind with zero occurrences leaves the corresponding role `None`;
/// downstream metrics degrade gracefully.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::{PunchEvent, PunchKind, PunchSource};
/// use timesheet_engine::timesheet::resolve_day_roles;
/// use chrono::DateTime;
///
/// let punch = |ts: &str, kind| PunchEvent {
///     employee_id: "12345".to_string(),
///     timestamp: DateTime::parse_from_rfc3339(ts).unwrap(),
///     kind,
///     source: PunchSource::Terminal,
///     justification: None,
/// };
///
/// // Two clock-ins from a double terminal read: the first one wins.
/// let punches = vec![
///     punch("2026-03-02T09:00:00-03:00", PunchKind::ClockIn),
///     punch("2026-03-02T09:05:00-03:00", PunchKind::ClockIn),
///     punch("2026-03-02T18:00:00-03:00", PunchKind::ClockOut),
/// ];
/// let day = punches.iter().collect::<Vec<_>>();
///
/// let roles = resolve_day_roles(&day);
/// assert_eq!(roles.clock_in.unwrap().timestamp, punches[0].timestamp);
/// assert!(roles.is_complete());
/// ```
pub fn resolve_day_roles<'a>(day_punches: &[&'a PunchEvent]) -> DayRoles<'a> {
    let mut roles = DayRoles::default();
    for punch in day_punches {
        match punch.kind {
            PunchKind::ClockIn => {
                if roles.clock_in.is_none() {
                    roles.clock_in = Some(punch);
                }
            }
            PunchKind::ClockOut => roles.clock_out = Some(punch),
            PunchKind::BreakStart => {
                if roles.break_start.is_none() {
                    roles.break_start = Some(punch);
                }
            }
            PunchKind::BreakEnd => roles.break_end = Some(punch),
        }
    }
    roles
}
