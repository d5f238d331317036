//! Per-day attendance metric computation.
//!
//! Given the canonical punch roles of one day and the employee's shift
//! configuration, this module derives the four attendance metrics:
//! worked hours, break hours, lateness minutes and overtime hours.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::ShiftConfig;

use super::punch_roles::DayRoles;

/// The four attendance metrics of one day, rounded for output.
///
/// Hour metrics carry 2 decimal places, lateness is whole minutes.
/// Rounding happens exactly once, here; totals aggregation sums these
/// already-rounded values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayMetrics {
    /// Hours worked, net of a matched break pair. Negative when punch
    /// timestamps are inconsistent; not clamped.
    pub worked_hours: Decimal,
    /// Break time taken, as a fraction of an hour.
    pub break_hours: Decimal,
    /// Whole minutes of lateness beyond the grace period.
    pub late_minutes: i64,
    /// Hours worked past the scheduled end. No grace period applies.
    pub overtime_hours: Decimal,
}

/// Minutes between two local timestamps, with fractional seconds.
fn minutes_between(from: NaiveDateTime, to: NaiveDateTime) -> Decimal {
    Decimal::from((to - from).num_seconds()) / Decimal::new(60, 0)
}

/// Computes the attendance metrics for one day.
///
/// # Behavior
///
/// - If either the entry or the exit punch is absent, every metric is
///   zero: an incomplete day contributes nothing to totals.
/// - A matched break pair is subtracted from the worked span. A single
///   unmatched break punch is ignored for duration purposes.
/// - Lateness counts entry minutes past `scheduled_start` that exceed
///   the grace period, against an expected-arrival instant built from
///   the day's date. Comparison is in the punch's own wall-clock zone.
/// - Overtime counts exit minutes past `scheduled_end`, with no grace.
/// - An overnight shift (`scheduled_end < scheduled_start`) yields an
///   expected departure earlier than the expected arrival on the same
///   date; the arithmetic is deliberately left literal.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::{PunchEvent, PunchKind, PunchSource, ShiftConfig};
/// use timesheet_engine::timesheet::{compute_day_metrics, resolve_day_roles};
/// use chrono::{DateTime, NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let punch = |ts: &str, kind| PunchEvent {
///     employee_id: "12345".to_string(),
///     timestamp: DateTime::parse_from_rfc3339(ts).unwrap(),
///     kind,
///     source: PunchSource::Terminal,
///     justification: None,
/// };
/// let punches = vec![
///     punch("2026-03-02T09:00:00-03:00", PunchKind::ClockIn),
///     punch("2026-03-02T18:00:00-03:00", PunchKind::ClockOut),
/// ];
/// let day: Vec<&PunchEvent> = punches.iter().collect();
/// let shift = ShiftConfig {
///     name: "Commercial".to_string(),
///     scheduled_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     scheduled_end: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
///     break_minutes: 60,
///     grace_minutes: 5,
/// };
///
/// let metrics = compute_day_metrics(
///     NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     &resolve_day_roles(&day),
///     &shift,
/// );
/// assert_eq!(metrics.worked_hours, Decimal::new(900, 2)); // 9.00
/// assert_eq!(metrics.late_minutes, 0);
/// ```
pub fn compute_day_metrics(date: NaiveDate, roles: &DayRoles<'_>, shift: &ShiftConfig) -> DayMetrics {
    let (Some(clock_in), Some(clock_out)) = (roles.clock_in, roles.clock_out) else {
        return DayMetrics::default();
    };

    let entry = clock_in.timestamp.naive_local();
    let exit = clock_out.timestamp.naive_local();

    let mut total_minutes = minutes_between(entry, exit);

    let mut break_minutes = Decimal::ZERO;
    if let (Some(break_start), Some(break_end)) = (roles.break_start, roles.break_end) {
        break_minutes = minutes_between(
            break_start.timestamp.naive_local(),
            break_end.timestamp.naive_local(),
        );
        total_minutes -= break_minutes;
    }

    let expected_arrival = date.and_time(shift.scheduled_start);
    let arrival_diff = minutes_between(expected_arrival, entry);
    let grace = Decimal::from(shift.grace_minutes);
    let late_minutes = if arrival_diff > grace {
        arrival_diff - grace
    } else {
        Decimal::ZERO
    };

    let expected_departure = date.and_time(shift.scheduled_end);
    let departure_diff = minutes_between(expected_departure, exit);
    let overtime_minutes = if departure_diff > Decimal::ZERO {
        departure_diff
    } else {
        Decimal::ZERO
    };

    DayMetrics {
        worked_hours: (total_minutes / Decimal::new(60, 0)).round_dp(2),
        break_hours: (break_minutes / Decimal::new(60, 0)).round_dp(2),
        late_minutes: late_minutes.round().to_i64().unwrap_or_default(),
        overtime_hours: (overtime_minutes / Decimal::new(60, 0)).round_dp(2),
    }
}
