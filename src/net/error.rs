//! Error type shared by the transport and the API client.
//!
//! ERROR HANDLING
//! ==============
//! Every request is attempted once. Failures surface immediately to the
//! caller, which decides whether they are user-visible (login/register,
//! task CRUD) or silently mean "no session" (identity check).

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::time::Duration;

/// Fallback shown when the server gives no usable error message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong!";

/// Failure of a single API request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// No response within the configured timeout.
    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// A 2xx body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    /// The request body could not be built.
    #[error("failed to encode request: {0}")]
    Encode(String),
    /// No transport exists in this build (non-browser targets).
    #[error("api not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Message suitable for showing to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_owned(),
        }
    }

    /// HTTP status when the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
