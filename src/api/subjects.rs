//! Subject Catalog Bindings

use serde::Deserialize;

use super::{get_json, ApiError};
use crate::models::Subject;

#[derive(Deserialize)]
struct SubjectsResponse {
    #[serde(default)]
    subjects: Vec<Subject>,
}

/// `GET /subjects/?sem={n}` — subject catalog for one semester
pub async fn get_subjects(semester: u8) -> Result<Vec<Subject>, ApiError> {
    let response: SubjectsResponse = get_json(&format!("/subjects/?sem={}", semester)).await?;
    Ok(response.subjects)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_wrapper_unwraps_subject_list() {
        let json = r#"{"subjects":[{"_id":"1","subject_code":"CS301","subject_name":"OS","sem":3}]}"#;
        let response: SubjectsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.subjects.len(), 1);
        assert_eq!(response.subjects[0].subject_code, "CS301");
    }

    #[test]
    fn missing_subjects_field_means_empty_catalog() {
        // The backend omits the list on errors; treat that as zero subjects.
        let response: SubjectsResponse = serde_json::from_str(r#"{"error":"down"}"#).unwrap();
        assert!(response.subjects.is_empty());
    }
}
