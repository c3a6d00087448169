use gloo::net::http::{Request, Response};
use shared::{ApiErrorBody, CreateStudentRequest, Student};
use thiserror::Error;

use crate::config::AppConfig;

/// Failure of a call to the roster API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] gloo::net::Error),
    #[error("Failed to serialize request: {0}")]
    Request(String),
    #[error("Server error {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ApiError {
    /// Build a `Status` error from a non-success response body. The body's
    /// `message` is used when it is JSON carrying one; otherwise the message is empty.
    pub fn from_status_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|error_body| error_body.message)
            .unwrap_or_default();

        ApiError::Status { status, message }
    }

    /// Message the server attached to a rejected request, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

/// API client for the student roster
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client from the build configuration
    pub fn new() -> Self {
        Self::from_config(&AppConfig::from_env())
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_base_url(config.api_base_url.clone())
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    fn students_url(&self) -> String {
        format!("{}/api/students", self.base_url)
    }

    fn student_url(&self, id: &str) -> String {
        let encoded: String = js_sys::encode_uri_component(id).into();
        format!("{}/{}", self.students_url(), encoded)
    }

    /// Fetch every student
    pub async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        let response = Request::get(&self.students_url()).send().await?;
        if !response.ok() {
            return Err(Self::status_error(response).await);
        }

        response
            .json::<Vec<Student>>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Create a student; the server echoes the stored record with its id
    pub async fn create_student(&self, request: &CreateStudentRequest) -> Result<Student, ApiError> {
        let response = Request::post(&self.students_url())
            .json(request)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await?;
        if !response.ok() {
            return Err(Self::status_error(response).await);
        }

        response
            .json::<Student>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Delete a student by id
    pub async fn delete_student(&self, id: &str) -> Result<(), ApiError> {
        let response = Request::delete(&self.student_url(id)).send().await?;
        if response.ok() {
            Ok(())
        } else {
            Err(Self::status_error(response).await)
        }
    }

    async fn status_error(response: Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        ApiError::from_status_body(status, &body)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
