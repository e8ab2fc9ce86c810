//! In-memory derivations over the fetched collections: the roster name-join,
//! log filtering, and the dashboard aggregates.
//!
//! Everything here is pure; callers pass "today" in so the functions stay
//! clock-independent.

use crate::models::{AttendanceRecord, AttendanceRecordWithName, Student};
use chrono::{Days, NaiveDate, NaiveDateTime};
use std::collections::{HashMap, HashSet};

/// Display name used when a detection references a roll number that is not
/// on the roster.
pub const UNKNOWN_STUDENT: &str = "Unknown Student";

const DETECTED_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Annotates each attendance record with the owning student's name and sorts
/// the result newest-first by detection time.
pub fn join_with_names(
    attendance: Vec<AttendanceRecord>,
    students: &[Student],
) -> Vec<AttendanceRecordWithName> {
    let names: HashMap<&str, &str> = students
        .iter()
        .map(|s| (s.roll_no.as_str(), s.name.as_str()))
        .collect();

    let mut joined: Vec<AttendanceRecordWithName> = attendance
        .into_iter()
        .map(|record| AttendanceRecordWithName {
            name: names
                .get(record.roll_no.as_str())
                .map(|name| name.to_string())
                .unwrap_or_else(|| UNKNOWN_STUDENT.to_string()),
            roll_no: record.roll_no,
            date: record.date,
            detected_time: record.detected_time,
            camera_id: record.camera_id,
        })
        .collect();

    // Records with a malformed timestamp sort last.
    joined.sort_by_key(|record| {
        std::cmp::Reverse(
            NaiveDateTime::parse_from_str(&record.detected_time, DETECTED_TIME_FORMAT)
                .unwrap_or(NaiveDateTime::MIN),
        )
    });

    joined
}

/// Narrows the joined log by case-insensitive substring match on name and on
/// roll number. Both must match; empty filter text matches everything.
pub fn filter_records<'a>(
    records: &'a [AttendanceRecordWithName],
    name_filter: &str,
    roll_filter: &str,
) -> Vec<&'a AttendanceRecordWithName> {
    let name_filter = name_filter.to_lowercase();
    let roll_filter = roll_filter.to_lowercase();

    records
        .iter()
        .filter(|record| {
            record.name.to_lowercase().contains(&name_filter)
                && record.roll_no.to_lowercase().contains(&roll_filter)
        })
        .collect()
}

/// One bar of the seven-day chart.
#[derive(Debug, PartialEq, Eq)]
pub struct DailyPresence {
    /// Short weekday name, e.g. "Mon".
    pub label: String,
    pub present: usize,
}

fn distinct_present_on(attendance: &[AttendanceRecord], date: &str) -> usize {
    attendance
        .iter()
        .filter(|record| record.date == date)
        .map(|record| record.roll_no.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Counts distinct students detected on each of the 7 calendar dates ending
/// at `today`, oldest date first. Duplicate same-day detections of one
/// student count once.
pub fn weekly_presence(attendance: &[AttendanceRecord], today: NaiveDate) -> Vec<DailyPresence> {
    (0..7)
        .rev()
        .map(|days_back| {
            let date = today
                .checked_sub_days(Days::new(days_back))
                .expect("Somehow reached the beginning of time");
            DailyPresence {
                label: date.format("%a").to_string(),
                present: distinct_present_on(attendance, &date.format(DATE_FORMAT).to_string()),
            }
        })
        .collect()
}

/// The four stat-card numbers on the dashboard.
#[derive(Debug, PartialEq)]
pub struct DashboardStats {
    pub total_students: usize,
    pub present_today: usize,
    pub absent_today: usize,
    /// Percentage rounded to one decimal; 0 when the roster is empty.
    pub attendance_rate: f64,
}

pub fn dashboard_stats(
    students: &[Student],
    attendance: &[AttendanceRecord],
    today: NaiveDate,
) -> DashboardStats {
    let total_students = students.len();
    let present_today =
        distinct_present_on(attendance, &today.format(DATE_FORMAT).to_string());

    let attendance_rate = if total_students == 0 {
        0.0
    } else {
        let rate = present_today as f64 / total_students as f64 * 100.0;
        (rate * 10.0).round() / 10.0
    };

    DashboardStats {
        total_students,
        present_today,
        absent_today: total_students.saturating_sub(present_today),
        attendance_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(roll_no: &str, name: &str) -> Student {
        Student {
            roll_no: roll_no.to_string(),
            name: name.to_string(),
        }
    }

    fn record(id: i64, roll_no: &str, date: &str, detected_time: &str) -> AttendanceRecord {
        AttendanceRecord {
            attendance_id: id,
            roll_no: roll_no.to_string(),
            date: date.to_string(),
            detected_time: detected_time.to_string(),
            camera_id: 1,
        }
    }

    #[test]
    fn join_resolves_names_and_flags_unknowns() {
        let students = vec![student("A1", "Alice"), student("B2", "Bob")];
        let attendance = vec![
            record(1, "A1", "2025-03-10", "2025-03-10 09:00:00"),
            record(2, "Z9", "2025-03-10", "2025-03-10 09:05:00"),
        ];

        let joined = join_with_names(attendance, &students);
        let by_roll: HashMap<&str, &str> = joined
            .iter()
            .map(|r| (r.roll_no.as_str(), r.name.as_str()))
            .collect();

        assert_eq!(by_roll["A1"], "Alice");
        assert_eq!(by_roll["Z9"], UNKNOWN_STUDENT);
    }

    #[test]
    fn join_sorts_newest_detection_first() {
        let attendance = vec![
            record(1, "A1", "2025-03-09", "2025-03-09 09:00:00"),
            record(2, "A1", "2025-03-10", "2025-03-10 17:30:00"),
            record(3, "A1", "2025-03-10", "2025-03-10 08:15:00"),
        ];

        let joined = join_with_names(attendance, &[]);
        let times: Vec<&str> = joined.iter().map(|r| r.detected_time.as_str()).collect();

        assert_eq!(
            times,
            vec![
                "2025-03-10 17:30:00",
                "2025-03-10 08:15:00",
                "2025-03-09 09:00:00"
            ]
        );
    }

    #[test]
    fn filters_are_case_insensitive_and_conjoined() {
        let students = vec![student("A1", "Alice"), student("B2", "Bob")];
        let attendance = vec![
            record(1, "A1", "2025-03-10", "2025-03-10 09:00:00"),
            record(2, "B2", "2025-03-10", "2025-03-10 09:05:00"),
        ];
        let joined = join_with_names(attendance, &students);

        let matched = filter_records(&joined, "ali", "");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].roll_no, "A1");

        let matched = filter_records(&joined, "ALICE", "a1");
        assert_eq!(matched.len(), 1);

        // Both predicates must hold.
        let matched = filter_records(&joined, "alice", "b2");
        assert!(matched.is_empty());
    }

    #[test]
    fn empty_filters_are_identity() {
        let joined = join_with_names(
            vec![
                record(1, "A1", "2025-03-10", "2025-03-10 09:00:00"),
                record(2, "B2", "2025-03-10", "2025-03-10 09:05:00"),
            ],
            &[],
        );

        assert_eq!(filter_records(&joined, "", "").len(), joined.len());
    }

    #[test]
    fn weekly_presence_spans_seven_days_oldest_first() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let attendance = vec![
            // Two students on the oldest day in the window.
            record(1, "A1", "2025-03-04", "2025-03-04 09:00:00"),
            record(2, "B2", "2025-03-04", "2025-03-04 09:01:00"),
            // One student detected twice today counts once.
            record(3, "A1", "2025-03-10", "2025-03-10 08:00:00"),
            record(4, "A1", "2025-03-10", "2025-03-10 12:00:00"),
            // Outside the window.
            record(5, "A1", "2025-03-03", "2025-03-03 09:00:00"),
        ];

        let chart = weekly_presence(&attendance, today);

        assert_eq!(chart.len(), 7);
        assert_eq!(chart[0].label, "Tue"); // 2025-03-04
        assert_eq!(chart[0].present, 2);
        assert_eq!(chart[6].label, "Mon"); // today
        assert_eq!(chart[6].present, 1);
        assert!(chart[1..6].iter().all(|day| day.present == 0));
    }

    #[test]
    fn dashboard_stats_match_roster_and_today() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let students = vec![student("A1", "Alice"), student("B2", "Bob")];
        let attendance = vec![record(1, "A1", "2025-03-10", "2025-03-10 09:00:00")];

        let stats = dashboard_stats(&students, &attendance, today);

        assert_eq!(stats.total_students, 2);
        assert_eq!(stats.present_today, 1);
        assert_eq!(stats.absent_today, 1);
        assert_eq!(stats.attendance_rate, 50.0);
    }

    #[test]
    fn attendance_rate_rounds_to_one_decimal() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let students = vec![
            student("A1", "Alice"),
            student("B2", "Bob"),
            student("C3", "Carol"),
        ];
        let attendance = vec![record(1, "A1", "2025-03-10", "2025-03-10 09:00:00")];

        let stats = dashboard_stats(&students, &attendance, today);
        assert_eq!(stats.attendance_rate, 33.3);
    }

    #[test]
    fn empty_roster_has_zero_rate() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let stats = dashboard_stats(&[], &[], today);
        assert_eq!(stats.attendance_rate, 0.0);
        assert_eq!(stats.absent_today, 0);
    }
}
