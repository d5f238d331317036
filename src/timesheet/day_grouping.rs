//! Calendar-day grouping of punch events.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::PunchEvent;

/// Partitions punches by the calendar date of their timestamp.
///
/// The date is taken in the timestamp's own time zone (the offset is
/// stripped before extracting the date). Input order is preserved within
/// each day, and the returned map iterates in ascending date order, so
/// output built from it is deterministic.
///
/// Days with no punches are simply absent from the map; callers interpret
/// an absent day as "no activity", not as an error.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::{PunchEvent, PunchKind, PunchSource};
/// use timesheet_engine::timesheet::group_by_day;
/// use chrono::{DateTime, NaiveDate};
///
/// let punch = |ts: &str, kind| PunchEvent {
///     employee_id: "12345".to_string(),
///     timestamp: DateTime::parse_from_rfc3339(ts).unwrap(),
///     kind,
///     source: PunchSource::Terminal,
///     justification: None,
/// };
///
/// let punches = vec![
///     punch("2026-03-02T09:00:00-03:00", PunchKind::ClockIn),
///     punch("2026-03-02T18:00:00-03:00", PunchKind::ClockOut),
///     punch("2026-03-03T09:05:00-03:00", PunchKind::ClockIn),
/// ];
///
/// let days = group_by_day(&punches);
/// assert_eq!(days.len(), 2);
/// assert_eq!(
///     days[&NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()].len(),
///     2
/// );
/// ```
pub fn group_by_day(punches: &[PunchEvent]) -> BTreeMap<NaiveDate, Vec<&PunchEvent>> {
    let mut days: BTreeMap<NaiveDate, Vec<&PunchEvent>> = BTreeMap::new();
    for punch in punches {
        let date = punch.timestamp.naive_local().date();
        days.entry(date).or_default().push(punch);
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PunchKind, PunchSource};
    use chrono::DateTime;

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

    #[test]
    fn test_empty_input_produces_no_groups() {
        let days = group_by_day(&[]);
        assert!(days.is_empty());
    }

    #[test]
    fn test_single_day_grouping() {
        let punches = vec![
            make_punch("2026-03-02T09:00:00-03:00", PunchKind::ClockIn),
            make_punch("2026-03-02T18:00:00-03:00", PunchKind::ClockOut),
        ];

        let days = group_by_day(&punches);
        assert_eq!(days.len(), 1);
        assert_eq!(days[&make_date("2026-03-02")].len(), 2);
    }

    #[test]
    fn test_multi_day_grouping_iterates_ascending() {
        // Deliberately supply the later day first; iteration must still
        // come out ascending.
        let punches = vec![
            make_punch("2026-03-04T09:00:00-03:00", PunchKind::ClockIn),
            make_punch("2026-03-02T09:00:00-03:00", PunchKind::ClockIn),
            make_punch("2026-03-03T09:00:00-03:00", PunchKind::ClockIn),
        ];

        let days = group_by_day(&punches);
        let dates: Vec<NaiveDate> = days.keys().copied().collect();
        assert_eq!(
            dates,
            vec![
                make_date("2026-03-02"),
                make_date("2026-03-03"),
                make_date("2026-03-04"),
            ]
        );
    }

    #[test]
    fn test_input_order_preserved_within_day() {
        let punches = vec![
            make_punch("2026-03-02T09:00:00-03:00", PunchKind::ClockIn),
            make_punch("2026-03-02T12:00:00-03:00", PunchKind::BreakStart),
            make_punch("2026-03-02T13:00:00-03:00", PunchKind::BreakEnd),
            make_punch("2026-03-02T18:00:00-03:00", PunchKind::ClockOut),
        ];

        let days = group_by_day(&punches);
        let day = &days[&make_date("2026-03-02")];
        let kinds: Vec<PunchKind> = day.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PunchKind::ClockIn,
                PunchKind::BreakStart,
                PunchKind::BreakEnd,
                PunchKind::ClockOut,
            ]
        );
    }

    #[test]
    fn test_date_taken_in_timestamp_own_zone() {
        // 2026-03-02T23:30 at -03:00 is 2026-03-03T02:30 UTC; grouping
        // must use the local date, not the UTC one.
        let punches = vec![make_punch("2026-03-02T23:30:00-03:00", PunchKind::ClockOut)];

        let days = group_by_day(&punches);
        assert!(days.contains_key(&make_date("2026-03-02")));
        assert!(!days.contains_key(&make_date("2026-03-03")));
    }

    #[test]
    fn test_overnight_punches_split_across_dates() {
        // A night worker's exit lands on the next calendar date and is
        // grouped there, separate from the entry.
        let punches = vec![
            make_punch("2026-03-02T22:00:00-03:00", PunchKind::ClockIn),
            make_punch("2026-03-03T06:00:00-03:00", PunchKind::ClockOut),
        ];

        let days = group_by_day(&punches);
        assert_eq!(days.len(), 2);
        assert_eq!(days[&make_date("2026-03-02")].len(), 1);
        assert_eq!(days[&make_date("2026-03-03")].len(), 1);
    }
}
