//! HTTP client for the attendance service.
//!
//! Every call goes to a fixed base URL and speaks JSON. When a session token
//! is set it is sent verbatim in the `Authorization` header (the server does
//! not use a `Bearer` prefix).

use crate::models::{AttendanceRecord, Camera, LoginResponse, MessageResponse, Student};
use anyhow::Result;
use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::fmt;

/// Fallback message when an error response has no parseable body.
const UNKNOWN_ERROR: &str = "An unknown network error occurred";

#[derive(Debug)]
pub enum ApiError {
    /// The server rejected the request with a human-readable message.
    Rejected(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Rejected(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: String,
}

/// Extracts the message to surface for a non-2xx response body.
///
/// Precedence: the body's `error` field if present and non-empty, a generic
/// fallback if the body is not JSON at all, and the bare status code if the
/// body parses but carries no message.
fn error_message(status: u16, body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorBody>(body) {
        Err(_) => UNKNOWN_ERROR.to_string(),
        Ok(parsed) if parsed.error.is_empty() => format!("HTTP error! status: {}", status),
        Ok(parsed) => parsed.error,
    }
}

fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.bytes()?;
        return Err(ApiError::Rejected(error_message(status.as_u16(), &body)).into());
    }
    Ok(response.json()?)
}

/// The client for the attendance service API.
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            token,
        }
    }

    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, path: &str) -> reqwest::blocking::RequestBuilder {
        let mut request = self.http.get(self.url(path));
        if let Some(token) = &self.token {
            request = request.header("Authorization", token);
        }
        request
    }

    fn post(&self, path: &str) -> reqwest::blocking::RequestBuilder {
        let mut request = self.http.post(self.url(path));
        if let Some(token) = &self.token {
            request = request.header("Authorization", token);
        }
        request
    }

    /// Exchanges credentials for a session token. Sent without the auth
    /// header regardless of session state.
    pub fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let response = self
            .http
            .post(self.url("/auth/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()?;
        handle_response(response)
    }

    pub fn list_students(&self) -> Result<Vec<Student>> {
        handle_response(self.get("/students").send()?)
    }

    pub fn add_student(&self, roll_no: &str, name: &str) -> Result<MessageResponse> {
        let response = self
            .post("/students")
            .json(&json!({ "roll_no": roll_no, "name": name }))
            .send()?;
        handle_response(response)
    }

    pub fn list_cameras(&self) -> Result<Vec<Camera>> {
        handle_response(self.get("/cameras").send()?)
    }

    pub fn add_camera(&self, ip_address: &str) -> Result<MessageResponse> {
        let response = self
            .post("/cameras")
            .json(&json!({ "ip_address": ip_address }))
            .send()?;
        handle_response(response)
    }

    pub fn list_attendance(&self) -> Result<Vec<AttendanceRecord>> {
        handle_response(self.get("/attendance").send()?)
    }

    /// Records a manual detection for a student, as if a camera had seen
    /// them right now. The server stamps the time.
    pub fn mark_attendance(&self, roll_no: &str, camera_id: i64) -> Result<MessageResponse> {
        let response = self
            .post("/attendance")
            .json(&json!({ "roll_no": roll_no, "camera_id": camera_id }))
            .send()?;
        handle_response(response)
    }

    pub fn health(&self) -> Result<MessageResponse> {
        handle_response(self.http.get(self.url("/")).send()?)
    }
}
