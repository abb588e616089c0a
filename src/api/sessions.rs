//! Exam Session Bindings

use serde::Deserialize;

use super::{api_base, check_status, get_json, ApiError};
use crate::models::{ExamSession, ExamSessionPayload};

/// Backend acknowledgement for a created session
#[derive(Debug, Clone, Deserialize)]
pub struct SessionCreated {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Deserialize)]
struct SessionsResponse {
    #[serde(default)]
    sessions: Vec<ExamSession>,
}

/// `POST /exam-sessions/` — create one scheduling record,
/// form-encoded as the backend expects
pub async fn add_exam_session(payload: &ExamSessionPayload) -> Result<SessionCreated, ApiError> {
    let response = reqwest::Client::new()
        .post(format!("{}/exam-sessions/", api_base()))
        .form(payload)
        .send()
        .await?;
    check_status(&response)?;
    Ok(response.json().await?)
}

/// `GET /exam-sessions/` — all scheduled sessions
pub async fn list_exam_sessions() -> Result<Vec<ExamSession>, ApiError> {
    let response: SessionsResponse = get_json("/exam-sessions/").await?;
    Ok(response.sessions)
}

/// `DELETE /exam-sessions/?sem={n}` — drop every session for one semester
pub async fn clear_exam_sessions(semester: u8) -> Result<(), ApiError> {
    let response = reqwest::Client::new()
        .delete(format!("{}/exam-sessions/?sem={}", api_base(), semester))
        .send()
        .await?;
    check_status(&response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_body_carries_wire_fields_verbatim() {
        let payload = ExamSessionPayload {
            subject_code: "CS301".to_string(),
            exam_date: "2025-09-05".to_string(),
            exam_time: "Morning".to_string(),
            semester: 3,
        };
        let body = serde_urlencoded::to_string(&payload).unwrap();
        assert_eq!(
            body,
            "subjectCode=CS301&examDate=2025-09-05&examTime=Morning&semester=3"
        );
    }

    #[test]
    fn sessions_response_unwraps_list() {
        let json = r#"{"sessions":[{"_id":"s1","subject_code":"CS301","exam_date":"2025-09-05","exam_time":"Morning","sem":3}]}"#;
        let response: SessionsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.sessions.len(), 1);
        assert_eq!(response.sessions[0].exam_time, "Morning");
    }
}
