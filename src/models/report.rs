//! Report output models.
//!
//! This module contains the value objects produced by the engine: the
//! per-day [`DayRecord`], the period-wide [`PeriodTotals`], and the
//! [`PeriodReport`] envelope handed to rendering collaborators.
//!
//! All output structures are freshly constructed per invocation and owned
//! solely by the caller.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::employee::EmployeeProfile;
use super::period::ReportPeriod;
use super::punch::{PunchKind, PunchSource};
use super::shift::ShiftConfig;

/// One punch as listed in a day's record.
///
/// Carries the wall-clock time in the punch's own zone; the offset is
/// already stripped because day records are local-date artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchEntry {
    /// The kind of time-clock action.
    pub kind: PunchKind,
    /// Local wall-clock time of the punch.
    pub time: NaiveTime,
    /// Where the punch was produced.
    pub source: PunchSource,
}

/// The computed attendance summary for one employee on one calendar date.
///
/// Hour metrics are rounded to 2 decimal places and lateness to whole
/// minutes, once, when the record is built. Worked hours may be negative
/// when punch timestamps are inconsistent; that anomaly is deliberately
/// left visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// The calendar date this record covers.
    pub date: NaiveDate,
    /// Full English weekday name for the date.
    pub weekday: String,
    /// Every punch that fell on this date, in input order.
    pub punches: Vec<PunchEntry>,
    /// Hours worked, net of a matched break pair.
    pub worked_hours: Decimal,
    /// Break time taken, as a fraction of an hour.
    pub break_hours: Decimal,
    /// Whole minutes of lateness beyond the grace period.
    pub late_minutes: i64,
    /// Hours worked past the scheduled end.
    pub overtime_hours: Decimal,
}

/// Field-wise sums of all day records in a report.
///
/// Totals are sums of the already-rounded daily values, not recomputed
/// from raw punches. Sum-of-rounded can differ slightly from
/// round-of-sum; callers relying on exact reconciliation must be aware.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// Sum of daily worked hours.
    pub worked_hours: Decimal,
    /// Sum of daily break hours.
    pub break_hours: Decimal,
    /// Sum of daily lateness minutes.
    pub late_minutes: i64,
    /// Sum of daily overtime hours.
    pub overtime_hours: Decimal,
}

impl PeriodTotals {
    /// Accumulates one day's rounded metrics into the totals.
    pub fn add_day(&mut self, day: &DayRecord) {
        self.worked_hours += day.worked_hours;
        self.break_hours += day.break_hours;
        self.late_minutes += day.late_minutes;
        self.overtime_hours += day.overtime_hours;
    }
}

/// The aggregation of day records over a requested date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodReport {
    /// The employee the report describes (pass-through).
    pub employee: EmployeeProfile,
    /// The shift configuration the metrics were computed against.
    pub shift: ShiftConfig,
    /// The requested date range.
    pub period: ReportPeriod,
    /// One record per calendar day with at least one punch, ascending.
    pub days: Vec<DayRecord>,
    /// Field-wise sums of all day records.
    pub totals: PeriodTotals,
}
