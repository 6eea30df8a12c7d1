use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    Validation,
    RateLimited,
    Internal,
    Unexpected,
}

impl ErrorCode {
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => ErrorCode::NotFound,
            400 | 422 => ErrorCode::Validation,
            429 => ErrorCode::RateLimited,
            500..=599 => ErrorCode::Internal,
            _ => ErrorCode::Unexpected,
        }
    }
}

/// Error body emitted by the launch API (`{"detail": ...}`).
///
/// `detail` is a plain string for most errors and a list of field errors for
/// request validation failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub detail: serde_json::Value,
}

impl ApiError {
    pub fn message(&self) -> String {
        match &self.detail {
            serde_json::Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("{endpoint} returned {status} ({code:?}): {message}")]
pub struct ApiException {
    pub code: ErrorCode,
    pub status: u16,
    pub endpoint: String,
    pub message: String,
}

impl ApiException {
    pub fn new(status: u16, endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::from_status(status),
            status,
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Builds the exception from a raw response body, preferring the API's `detail` field.
    pub fn from_body(status: u16, endpoint: impl Into<String>, body: &str) -> Self {
        let message = serde_json::from_str::<ApiError>(body)
            .map(|err| err.message())
            .unwrap_or_else(|_| body.trim().to_string());
        Self::new(status, endpoint, message)
    }
}
