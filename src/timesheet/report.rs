//! Period report assembly and totals aggregation.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::{
    DayRecord, EmployeeProfile, PeriodReport, PeriodTotals, PunchEntry, PunchEvent, ReportPeriod,
    ShiftConfig,
};

use super::day_grouping::group_by_day;
use super::day_metrics::compute_day_metrics;
use super::punch_roles::resolve_day_roles;

/// Full English weekday name for a date.
///
/// # Example
///
/// ```
/// use timesheet_engine::timesheet::weekday_label;
/// use chrono::NaiveDate;
///
/// // 2026-03-02 is a Monday
/// let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// assert_eq!(weekday_label(date), "Monday");
/// ```
pub fn weekday_label(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Builds a full period report from an employee's punches.
///
/// This is the engine's single entry point: it groups the punches by
/// calendar day, resolves the canonical punch roles per day, computes
/// the day metrics against the shift configuration, and aggregates the
/// period totals as field-wise sums of the rounded daily values.
///
/// The computation is pure and synchronous: punches are a pre-fetched
/// input (already filtered to this employee and range, ascending by
/// timestamp), no I/O happens here, and the output is freshly allocated
/// per call. Running it twice on the same input yields identical output.
///
/// Days without punches produce no [`DayRecord`]; days missing an entry
/// or exit punch produce a record with zeroed metrics.
pub fn build_period_report(
    employee: EmployeeProfile,
    shift: ShiftConfig,
    period: ReportPeriod,
    punches: &[PunchEvent],
) -> PeriodReport {
    let mut days = Vec::new();
    let mut totals = PeriodTotals::default();

    for (date, day_punches) in group_by_day(punches) {
        let roles = resolve_day_roles(&day_punches);
        let metrics = compute_day_metrics(date, &roles, &shift);

        let day = DayRecord {
            date,
            weekday: weekday_label(date).to_string(),
            punches: day_punches
                .iter()
                .map(|p| PunchEntry {
                    kind: p.kind,
                    time: p.timestamp.naive_local().time(),
                    source: p.source,
                })
                .collect(),
            worked_hours: metrics.worked_hours,
            break_hours: metrics.break_hours,
            late_minutes: metrics.late_minutes,
            overtime_hours: metrics.overtime_hours,
        };

        totals.add_day(&day);
        days.push(day);
    }

    PeriodReport {
        employee,
        shift,
        period,
        days,
        totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmployeeStatus, PunchKind, PunchSource};
    use chrono::{DateTime, NaiveTime};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn make_punch(ts: &str, kind: PunchKind) -> PunchEvent {
        PunchEvent {
            employee_id: "12345".to_string(),
            timestamp: DateTime::parse_from_rfc3339(ts).unwrap(),
            kind,
            source: PunchSource::Terminal,
            justification: None,
        }
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn test_employee() -> EmployeeProfile {
        EmployeeProfile {
            full_name: "Joana Silva".to_string(),
            registration_number: "12345".to_string(),
            department: "Engineering".to_string(),
            role: "Developer".to_string(),
            status: EmployeeStatus::Active,
        }
    }

    fn commercial_shift() -> ShiftConfig {
        ShiftConfig {
            name: "Commercial".to_string(),
            scheduled_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            scheduled_end: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            break_minutes: 60,
            grace_minutes: 5,
        }
    }

    fn march_week() -> ReportPeriod {
        ReportPeriod {
            start_date: make_date("2026-03-02"),
            end_date: make_date("2026-03-06"),
        }
    }

    fn build(punches: &[PunchEvent]) -> PeriodReport {
        build_period_report(test_employee(), commercial_shift(), march_week(), punches)
    }

    #[test]
    fn test_weekday_labels() {
        assert_eq!(weekday_label(make_date("2026-03-02")), "Monday");
        assert_eq!(weekday_label(make_date("2026-03-07")), "Saturday");
        assert_eq!(weekday_label(make_date("2026-03-08")), "Sunday");
    }

    #[test]
    fn test_empty_punches_produce_empty_report() {
        let report = build(&[]);
        assert!(report.days.is_empty());
        assert_eq!(report.totals, PeriodTotals::default());
        assert_eq!(report.employee.full_name, "Joana Silva");
    }

    #[test]
    fn test_one_record_per_punched_day() {
        let punches = vec![
            make_punch("2026-03-02T09:00:00-03:00", PunchKind::ClockIn),
            make_punch("2026-03-02T18:00:00-03:00", PunchKind::ClockOut),
            // 2026-03-03 has no punches
            make_punch("2026-03-04T09:00:00-03:00", PunchKind::ClockIn),
            make_punch("2026-03-04T18:00:00-03:00", PunchKind::ClockOut),
        ];

        let report = build(&punches);
        assert_eq!(report.days.len(), 2);
        assert_eq!(report.days[0].date, make_date("2026-03-02"));
        assert_eq!(report.days[1].date, make_date("2026-03-04"));
    }

    #[test]
    fn test_day_records_carry_punch_listing() {
        let punches = vec![
            make_punch("2026-03-02T09:00:00-03:00", PunchKind::ClockIn),
            make_punch("2026-03-02T12:00:00-03:00", PunchKind::BreakStart),
            make_punch("2026-03-02T18:00:00-03:00", PunchKind::ClockOut),
        ];

        let report = build(&punches);
        let day = &report.days[0];
        assert_eq!(day.punches.len(), 3);
        assert_eq!(day.punches[0].kind, PunchKind::ClockIn);
        assert_eq!(
            day.punches[0].time,
            NaiveTime::from_hms_opt(9, 0, 0).unwrap()
        );
        // The unmatched break punch still appears in the listing even
        // though it contributes no break duration.
        assert_eq!(day.punches[1].kind, PunchKind::BreakStart);
        assert_eq!(day.break_hours, Decimal::ZERO);
    }

    #[test]
    fn test_totals_are_sums_of_rounded_day_values() {
        // Two days at 7.83 rounded hours each: the total must be
        // 15.66 (sum of rounded), not a re-rounding of the raw sum.
        let punches = vec![
            make_punch("2026-03-02T09:10:00-03:00", PunchKind::ClockIn),
            make_punch("2026-03-02T12:00:00-03:00", PunchKind::BreakStart),
            make_punch("2026-03-02T13:00:00-03:00", PunchKind::BreakEnd),
            make_punch("2026-03-02T18:00:00-03:00", PunchKind::ClockOut),
            make_punch("2026-03-03T09:10:00-03:00", PunchKind::ClockIn),
            make_punch("2026-03-03T12:00:00-03:00", PunchKind::BreakStart),
            make_punch("2026-03-03T13:00:00-03:00", PunchKind::BreakEnd),
            make_punch("2026-03-03T18:00:00-03:00", PunchKind::ClockOut),
        ];

        let report = build(&punches);
        assert_eq!(report.days[0].worked_hours, dec("7.83"));
        assert_eq!(report.totals.worked_hours, dec("15.66"));
        assert_eq!(report.totals.break_hours, dec("2.00"));
        assert_eq!(report.totals.late_minutes, 10);
        assert_eq!(report.totals.overtime_hours, Decimal::ZERO);
    }

    #[test]
    fn test_incomplete_day_contributes_nothing_to_totals() {
        let punches = vec![
            make_punch("2026-03-02T09:00:00-03:00", PunchKind::ClockIn),
            make_punch("2026-03-02T18:00:00-03:00", PunchKind::ClockOut),
            // Forgotten clock-out on the second day
            make_punch("2026-03-03T09:00:00-03:00", PunchKind::ClockIn),
        ];

        let report = build(&punches);
        assert_eq!(report.days.len(), 2);
        let incomplete = &report.days[1];
        assert_eq!(incomplete.worked_hours, Decimal::ZERO);
        assert_eq!(incomplete.break_hours, Decimal::ZERO);
        assert_eq!(incomplete.late_minutes, 0);
        assert_eq!(incomplete.overtime_hours, Decimal::ZERO);
        assert_eq!(report.totals.worked_hours, dec("9.00"));
    }

    #[test]
    fn test_engine_is_idempotent() {
        let punches = vec![
            make_punch("2026-03-02T09:10:00-03:00", PunchKind::ClockIn),
            make_punch("2026-03-02T18:30:00-03:00", PunchKind::ClockOut),
        ];

        let first = build(&punches);
        let second = build(&punches);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        prop_compose! {
            fn arb_punch()(
                day in 2u32..7,
                hour in 0u32..24,
                minute in 0u32..60,
                kind_idx in 0usize..4,
            ) -> PunchEvent {
                let kinds = [
                    PunchKind::ClockIn,
                    PunchKind::ClockOut,
                    PunchKind::BreakStart,
                    PunchKind::BreakEnd,
                ];
                make_punch(
                    &format!("2026-03-{day:02}T{hour:02}:{minute:02}:00-03:00"),
                    kinds[kind_idx],
                )
            }
        }

        fn sorted(mut punches: Vec<PunchEvent>) -> Vec<PunchEvent> {
            punches.sort_by_key(|p| p.timestamp);
            punches
        }

        proptest! {
            #[test]
            fn report_is_idempotent(punches in proptest::collection::vec(arb_punch(), 0..40)) {
                let punches = sorted(punches);
                let first = build(&punches);
                let second = build(&punches);
                prop_assert_eq!(first, second);
            }

            #[test]
            fn exactly_one_record_per_punched_day(
                punches in proptest::collection::vec(arb_punch(), 0..40),
            ) {
                let punches = sorted(punches);
                let report = build(&punches);

                let mut punched_dates: Vec<NaiveDate> = punches
                    .iter()
                    .map(|p| p.timestamp.naive_local().date())
                    .collect();
                punched_dates.sort();
                punched_dates.dedup();

                let record_dates: Vec<NaiveDate> =
                    report.days.iter().map(|d| d.date).collect();
                prop_assert_eq!(record_dates, punched_dates);
            }

            #[test]
            fn totals_equal_sum_of_days(
                punches in proptest::collection::vec(arb_punch(), 0..40),
            ) {
                let punches = sorted(punches);
                let report = build(&punches);

                let mut expected = PeriodTotals::default();
                for day in &report.days {
                    expected.add_day(day);
                }
                prop_assert_eq!(report.totals, expected);
            }

            #[test]
            fn incomplete_days_have_zero_metrics(
                punches in proptest::collection::vec(arb_punch(), 0..40),
            ) {
                let punches = sorted(punches);
                let report = build(&punches);

                for day in &report.days {
                    let has_in = day.punches.iter().any(|p| p.kind == PunchKind::ClockIn);
                    let has_out = day.punches.iter().any(|p| p.kind == PunchKind::ClockOut);
                    if !(has_in && has_out) {
                        prop_assert_eq!(day.worked_hours, Decimal::ZERO);
                        prop_assert_eq!(day.break_hours, Decimal::ZERO);
                        prop_assert_eq!(day.late_minutes, 0);
                        prop_assert_eq!(day.overtime_hours, Decimal::ZERO);
                    }
                }
            }
        }
    }
}
