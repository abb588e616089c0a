//! Schedule Utilities
//!
//! Pure helpers for the exam scheduling view: date option lists,
//! exam date formatting and per-subject assignment validation.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{SlotAssignment, Subject};

/// Month options as (value, display name) pairs
pub const MONTHS: &[(&str, &str)] = &[
    ("01", "January"),
    ("02", "February"),
    ("03", "March"),
    ("04", "April"),
    ("05", "May"),
    ("06", "June"),
    ("07", "July"),
    ("08", "August"),
    ("09", "September"),
    ("10", "October"),
    ("11", "November"),
    ("12", "December"),
];

/// Session slot options as (value, display label) pairs
pub const SESSION_SLOTS: &[(&str, &str)] = &[
    ("Morning", "Morning (9:00 AM - 12:00 PM)"),
    ("Afternoon", "Afternoon (1:00 PM - 4:00 PM)"),
    ("Evening", "Evening (5:00 PM - 8:00 PM)"),
];

/// Semester options shown by the selectors
pub const SEMESTERS: &[(&str, &str)] = &[
    ("1", "1st"),
    ("2", "2nd"),
    ("3", "3rd"),
    ("4", "4th"),
];

/// Branch options
pub const BRANCHES: &[&str] = &["Cyber Security", "CSE", "ECE"];

/// Internal exam cycle labels
pub const INTERNAL_EXAMS: &[&str] = &["1st Internal", "2nd Internal"];

/// Year picker options: the given year and the next two
pub fn year_options(current_year: i32) -> Vec<i32> {
    (current_year..current_year + 3).collect()
}

/// Number of days in the given month, leap-aware.
/// `month` is the two-digit select value ("01".."12").
pub fn days_in_month(year: i32, month: &str) -> Option<u32> {
    let month: u32 = month.parse().ok()?;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(next.pred_opt()?.day())
}

/// Day-of-month options for the date pickers, empty until a month is chosen
pub fn date_options(year: i32, month: &str) -> Vec<u32> {
    match days_in_month(year, month) {
        Some(days) => (1..=days).collect(),
        None => Vec::new(),
    }
}

/// Format the exam date sent to the backend: `YYYY-MM-DD`, day zero-padded
pub fn format_exam_date(year: i32, month: &str, day: u32) -> String {
    format!("{}-{}-{:02}", year, month, day)
}

/// Validation result for a schedule submission
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleValidation {
    Ok,
    /// No subject is selected
    NothingSelected,
    /// Subject codes missing a date or a session
    Incomplete(Vec<String>),
}

/// Check that every selected subject has both a date and a session assigned
pub fn validate_schedule(
    selected: &[String],
    assignments: &HashMap<String, SlotAssignment>,
) -> ScheduleValidation {
    if selected.is_empty() {
        return ScheduleValidation::NothingSelected;
    }
    let incomplete: Vec<String> = selected
        .iter()
        .filter(|code| {
            assignments
                .get(*code)
                .map(|a| !a.is_complete())
                .unwrap_or(true)
        })
        .cloned()
        .collect();
    if incomplete.is_empty() {
        ScheduleValidation::Ok
    } else {
        ScheduleValidation::Incomplete(incomplete)
    }
}

/// Submit button predicate: something selected and every selection complete
pub fn can_submit(selected: &[String], assignments: &HashMap<String, SlotAssignment>) -> bool {
    validate_schedule(selected, assignments) == ScheduleValidation::Ok
}

/// Toggle a subject in the selected set, keeping the assignment map in step.
/// Checking inserts an empty assignment; unchecking removes exactly its entry.
pub fn toggle_subject(
    code: &str,
    checked: bool,
    catalog: &[Subject],
    selected: &mut Vec<String>,
    assignments: &mut HashMap<String, SlotAssignment>,
) {
    if checked {
        if catalog.iter().any(|s| s.subject_code == code) && !selected.iter().any(|c| c == code) {
            selected.push(code.to_string());
            assignments.insert(code.to_string(), SlotAssignment::default());
        }
    } else {
        selected.retain(|c| c != code);
        assignments.remove(code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(code: &str) -> Subject {
        Subject {
            id: String::new(),
            subject_code: code.to_string(),
            subject_name: format!("Subject {}", code),
            sem: 3,
        }
    }

    fn assignment(day: u32, session: &str) -> SlotAssignment {
        SlotAssignment {
            day: Some(day),
            session: Some(session.to_string()),
        }
    }

    #[test]
    fn september_2025_has_30_days() {
        assert_eq!(days_in_month(2025, "09"), Some(30));
        assert_eq!(date_options(2025, "09"), (1..=30).collect::<Vec<_>>());
    }

    #[test]
    fn february_is_leap_aware() {
        assert_eq!(days_in_month(2024, "02"), Some(29));
        assert_eq!(days_in_month(2025, "02"), Some(28));
    }

    #[test]
    fn no_dates_until_month_chosen() {
        assert_eq!(days_in_month(2025, ""), None);
        assert!(date_options(2025, "").is_empty());
    }

    #[test]
    fn exam_date_is_zero_padded() {
        assert_eq!(format_exam_date(2025, "09", 5), "2025-09-05");
        assert_eq!(format_exam_date(2025, "12", 25), "2025-12-25");
    }

    #[test]
    fn year_options_span_three_years() {
        assert_eq!(year_options(2025), vec![2025, 2026, 2027]);
    }

    #[test]
    fn empty_selection_blocks_submit() {
        let assignments = HashMap::new();
        assert_eq!(
            validate_schedule(&[], &assignments),
            ScheduleValidation::NothingSelected
        );
        assert!(!can_submit(&[], &assignments));
    }

    #[test]
    fn unassigned_subject_blocks_submit() {
        let selected = vec!["CS301".to_string(), "CS302".to_string()];
        let mut assignments = HashMap::new();
        assignments.insert("CS301".to_string(), assignment(5, "Morning"));
        assignments.insert("CS302".to_string(), SlotAssignment::default());

        match validate_schedule(&selected, &assignments) {
            ScheduleValidation::Incomplete(codes) => assert_eq!(codes, vec!["CS302".to_string()]),
            other => panic!("expected Incomplete, got {:?}", other),
        }
        assert!(!can_submit(&selected, &assignments));
    }

    #[test]
    fn complete_selection_enables_submit() {
        let selected = vec!["CS301".to_string(), "CS302".to_string()];
        let mut assignments = HashMap::new();
        assignments.insert("CS301".to_string(), assignment(5, "Morning"));
        assignments.insert("CS302".to_string(), assignment(8, "Afternoon"));
        assert!(can_submit(&selected, &assignments));
    }

    #[test]
    fn toggle_on_inserts_empty_assignment() {
        let catalog = vec![subject("CS301"), subject("CS302")];
        let mut selected = Vec::new();
        let mut assignments = HashMap::new();

        toggle_subject("CS301", true, &catalog, &mut selected, &mut assignments);

        assert_eq!(selected, vec!["CS301".to_string()]);
        assert_eq!(assignments.get("CS301"), Some(&SlotAssignment::default()));
    }

    #[test]
    fn toggle_off_removes_exactly_one_entry() {
        let catalog = vec![subject("CS301"), subject("CS302")];
        let mut selected = Vec::new();
        let mut assignments = HashMap::new();
        toggle_subject("CS301", true, &catalog, &mut selected, &mut assignments);
        toggle_subject("CS302", true, &catalog, &mut selected, &mut assignments);
        assignments.insert("CS301".to_string(), assignment(5, "Morning"));

        toggle_subject("CS302", false, &catalog, &mut selected, &mut assignments);

        assert_eq!(selected, vec!["CS301".to_string()]);
        assert_eq!(assignments.len(), 1);
        assert_eq!(assignments.get("CS301"), Some(&assignment(5, "Morning")));
    }

    #[test]
    fn toggle_ignores_unknown_subject() {
        let catalog = vec![subject("CS301")];
        let mut selected = Vec::new();
        let mut assignments = HashMap::new();

        toggle_subject("CS999", true, &catalog, &mut selected, &mut assignments);

        assert!(selected.is_empty());
        assert!(assignments.is_empty());
    }
}
