//! Student & Admit Card Bindings

use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;

use super::{api_base, check_status, get_json, ApiError};
use crate::download;
use crate::models::Student;

/// Pause inserted after each bulk download before the next request starts
pub const BULK_DOWNLOAD_PAUSE_MS: u32 = 500;

#[derive(Deserialize)]
struct StudentsResponse {
    #[serde(default)]
    students: Vec<Student>,
}

/// `GET /students/?semester={n}` — students enrolled in one semester
pub async fn get_students_by_semester(semester: u8) -> Result<Vec<Student>, ApiError> {
    let response: StudentsResponse =
        get_json(&format!("/students/?semester={}", semester)).await?;
    Ok(response.students)
}

/// `GET /generate-admit-card/{id}` — fetch one admit card PDF and
/// trigger a browser file save named after the registration number
pub async fn generate_admit_card(student: &Student) -> Result<(), ApiError> {
    let response =
        reqwest::get(format!("{}/generate-admit-card/{}", api_base(), student.id)).await?;
    check_status(&response)?;
    let bytes = response.bytes().await?;
    if let Err(e) = download::save_pdf(&format!("AdmitCard-{}.pdf", student.reg_no), &bytes) {
        web_sys::console::error_1(&format!("[api] save failed for {}: {}", student.reg_no, e).into());
    }
    Ok(())
}

/// Download one admit card per student, strictly sequentially, with a
/// fixed pause after each download. Stops at the first failed request.
/// Returns how many cards were downloaded.
pub async fn generate_bulk_admit_cards(students: &[Student]) -> Result<usize, ApiError> {
    let mut downloaded = 0;
    for student in students {
        generate_admit_card(student).await?;
        downloaded += 1;
        TimeoutFuture::new(BULK_DOWNLOAD_PAUSE_MS).await;
    }
    Ok(downloaded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bulk_pause_is_non_zero() {
        assert!(BULK_DOWNLOAD_PAUSE_MS > 0);
    }

    #[test]
    fn students_response_unwraps_list() {
        let json = r#"{"students":[{"_id":"68c2","student_name":"Ayush Gupta","reg_no":"RA241103003034","course":"B.Tech - CSE","sem":3}]}"#;
        let response: StudentsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.students.len(), 1);
        assert_eq!(response.students[0].student_name, "Ayush Gupta");
    }
}
