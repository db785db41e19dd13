pub mod goal;

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session;
use crate::settings;

/// Error body returned by the goal service on non-2xx responses
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Failure of a goal service request. Callers surface all variants the same way;
/// the distinction only feeds the log.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ApiError {
    fn from_status(status: u16, body: Option<ErrorResponse>) -> Self {
        let message = body
            .map(|err| err.error)
            .unwrap_or_else(|| "no error details".to_string());
        ApiError::Http { status, message }
    }
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de>,
{
    let url = settings::get_settings().api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let mut request = Request::get(&url);
    if let Some(token) = session::current_token() {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }

    let response = request.send().await.map_err(|e| {
        let error = ApiError::Request(e.to_string());
        log::error!("GET {} - {}", endpoint, error);
        error
    })?;

    if !response.ok() {
        log::warn!("GET {} - Non-OK response: {}", endpoint, response.status());
        let body: Option<ErrorResponse> = response.json().await.ok();
        let error = ApiError::from_status(response.status(), body);
        log::error!("GET {} - {}", endpoint, error);
        return Err(error);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let data: T = response.json().await.map_err(|e| {
        let error = ApiError::Parse(e.to_string());
        log::error!("GET {} - {}", endpoint, error);
        error
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(data)
}
