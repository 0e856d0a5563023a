//! Error types for the Hypothesis SDK.

use hypothesis_domain::ValidationError;
use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for SDK operations.
pub type Result<T> = std::result::Result<T, SdkError>;

/// SDK operation errors
#[derive(Debug, Error)]
pub enum SdkError {
    /// The client could not be constructed (empty agent key, bad endpoint)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Request input failed a precondition; no request was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Connection could not be established, was interrupted or timed out
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("HTTP {status}{}", describe_body(.body))]
    HttpStatus {
        /// Numeric status code
        status: u16,
        /// Structured error body, when the service sent one
        body: Option<serde_json::Value>,
    },

    /// The service answered 404 for the requested resource
    #[error("Not found{}", describe_body(.body))]
    NotFound {
        /// Structured error body, when the service sent one
        body: Option<serde_json::Value>,
    },

    /// The response body was not the expected JSON shape
    #[error("Decoding error: {0}")]
    Decoding(String),
}

impl SdkError {
    /// Map a non-success response to the matching error variant
    pub(crate) fn from_status(status: StatusCode, body: Option<serde_json::Value>) -> Self {
        if status == StatusCode::NOT_FOUND {
            SdkError::NotFound { body }
        } else {
            SdkError::HttpStatus {
                status: status.as_u16(),
                body,
            }
        }
    }

    /// HTTP status reported by the service, if the failure came from a response
    ///
    /// `NotFound` reports 404.
    pub fn status(&self) -> Option<u16> {
        match self {
            SdkError::HttpStatus { status, .. } => Some(*status),
            SdkError::NotFound { .. } => Some(404),
            _ => None,
        }
    }

    /// Structured error body sent by the service, if any
    pub fn body(&self) -> Option<&serde_json::Value> {
        match self {
            SdkError::HttpStatus { body, .. } | SdkError::NotFound { body } => body.as_ref(),
            _ => None,
        }
    }

    /// The service's `error` message, when the body carries one
    pub fn service_message(&self) -> Option<&str> {
        self.body()
            .and_then(|body| body.get("error"))
            .and_then(|message| message.as_str())
    }

    /// Fields that failed validation (empty for other error kinds)
    pub fn validation_fields(&self) -> Vec<&str> {
        match self {
            SdkError::Validation(err) => err.fields(),
            _ => Vec::new(),
        }
    }

    /// Whether retrying the same call could succeed
    ///
    /// True for transport failures, 5xx statuses and 429; false for
    /// everything the caller has to fix first.
    pub fn is_retryable(&self) -> bool {
        match self {
            SdkError::Transport(_) => true,
            SdkError::HttpStatus { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    /// Whether the failure was a transport timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, SdkError::Transport(e) if e.is_timeout())
    }
}

fn describe_body(body: &Option<serde_json::Value>) -> String {
    match body {
        Some(value) => match value.get("error").and_then(|m| m.as_str()) {
            Some(message) => format!(": {}", message),
            None => format!(": {}", value),
        },
        None => String::new(),
    }
}
