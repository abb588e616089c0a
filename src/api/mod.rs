//! Backend API Client
//!
//! Frontend bindings to the exam portal backend, organized by domain.
//! Every function performs exactly one HTTP request against the
//! configured base URL and surfaces non-2xx responses as errors.

mod sessions;
mod students;
mod subjects;

pub use sessions::*;
pub use students::*;
pub use subjects::*;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::HealthStatus;

/// Failures surfaced by the API client
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
}

/// Backend base URL. Fixed at build time through `EXAM_API_BASE`,
/// defaulting to the local development backend.
pub fn api_base() -> &'static str {
    option_env!("EXAM_API_BASE").unwrap_or("http://localhost:8000")
}

pub(crate) fn check_status(response: &reqwest::Response) -> Result<(), ApiError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(ApiError::Status(response.status().as_u16()))
    }
}

pub(crate) async fn get_json<T: DeserializeOwned>(path_and_query: &str) -> Result<T, ApiError> {
    let response = reqwest::get(format!("{}{}", api_base(), path_and_query)).await?;
    check_status(&response)?;
    Ok(response.json().await?)
}

/// `GET /health/`
pub async fn health_check() -> Result<HealthStatus, ApiError> {
    get_json("/health/").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_base_defaults_to_local_backend() {
        assert!(api_base().starts_with("http"));
    }
}
