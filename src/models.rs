//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Subject catalog entry (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub subject_code: String,
    pub subject_name: String,
    pub sem: u8,
}

/// Student record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "_id")]
    pub id: String,
    pub student_name: String,
    pub reg_no: String,
    pub course: String,
    pub sem: u8,
}

/// Stored exam session as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamSession {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub subject_code: String,
    pub exam_date: String,
    pub exam_time: String,
    pub sem: u8,
}

/// One exam session submission, form-encoded with camelCase wire keys
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamSessionPayload {
    pub subject_code: String,
    /// `YYYY-MM-DD`, day zero-padded
    pub exam_date: String,
    /// Session slot name ("Morning" / "Afternoon" / "Evening")
    pub exam_time: String,
    pub semester: u8,
}

/// Per-subject date/session assignment on the scheduling view.
///
/// One entry exists per selected subject code; both fields start empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotAssignment {
    /// Day of month
    pub day: Option<u32>,
    pub session: Option<String>,
}

impl SlotAssignment {
    pub fn is_complete(&self) -> bool {
        self.day.is_some() && self.session.is_some()
    }
}

/// Data rendered on the admit card preview and PDF
#[derive(Debug, Clone, PartialEq)]
pub struct AdmitCardData {
    pub name: String,
    pub reg_no: String,
    pub program: String,
    pub subject: String,
    pub subject_name: String,
    pub exam_date: String,
    pub semester: u8,
}

/// Health check response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_deserializes_backend_shape() {
        let json = r#"{"_id":"68b1","subject_code":"CS301","subject_name":"Operating Systems","sem":3}"#;
        let subject: Subject = serde_json::from_str(json).unwrap();
        assert_eq!(subject.id, "68b1");
        assert_eq!(subject.subject_code, "CS301");
        assert_eq!(subject.subject_name, "Operating Systems");
        assert_eq!(subject.sem, 3);
    }

    #[test]
    fn subject_id_is_optional() {
        let json = r#"{"subject_code":"CS302","subject_name":"DBMS","sem":3}"#;
        let subject: Subject = serde_json::from_str(json).unwrap();
        assert_eq!(subject.id, "");
    }

    #[test]
    fn student_deserializes_backend_shape() {
        let json = r#"{"_id":"68c2","student_name":"Ayush Gupta","reg_no":"RA241103003034","course":"B.Tech - CSE","sem":3}"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.reg_no, "RA241103003034");
        assert_eq!(student.sem, 3);
    }

    #[test]
    fn payload_uses_camel_case_wire_keys() {
        let payload = ExamSessionPayload {
            subject_code: "CS301".to_string(),
            exam_date: "2025-09-05".to_string(),
            exam_time: "Morning".to_string(),
            semester: 3,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["subjectCode"], "CS301");
        assert_eq!(value["examDate"], "2025-09-05");
        assert_eq!(value["examTime"], "Morning");
        assert_eq!(value["semester"], 3);
    }

    #[test]
    fn empty_assignment_is_incomplete() {
        let assignment = SlotAssignment::default();
        assert!(!assignment.is_complete());

        let half = SlotAssignment { day: Some(5), session: None };
        assert!(!half.is_complete());

        let full = SlotAssignment { day: Some(5), session: Some("Morning".to_string()) };
        assert!(full.is_complete());
    }
}
