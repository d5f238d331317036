//! Timesheet reconstruction logic.
//!
//! This module contains the engine that turns an ordered stream of punch
//! events into a per-day attendance breakdown: grouping punches by
//! calendar day, resolving the canonical punch roles for each day,
//! computing worked/break/lateness/overtime metrics against the shift
//! configuration, and aggregating period totals.

mod day_grouping;
mod day_metrics;
mod punch_roles;
mod report;

pub use day_grouping::group_by_day;
pub use day_metrics::{DayMetrics, compute_day_metrics};
pub use punch_roles::{DayRoles, resolve_day_roles};
pub use report::{build_period_report, weekday_label};
