//! HTTP client adapter seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API client and session store talk to the network only through
//! [`Transport`]. The browser build plugs in the fetch-based transport
//! (fixed base address, fixed timeout, cookies on every request); other
//! builds get [`Unavailable`], and tests supply scripted fakes.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use serde::Serialize;

use super::error::ApiError;

/// HTTP verbs used by the task service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A request relative to the configured base address.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path below the base address, e.g. `/task/42`.
    pub path: String,
    /// Query pairs; the transport encodes them.
    pub query: Vec<(String, String)>,
    /// JSON body, if any.
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: None }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    #[must_use]
    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_owned(), value.to_owned()));
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if `body` cannot be represented as JSON.
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }
}

/// Status and raw body of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Uniform request transport. Implementations send each request exactly
/// once and never retry.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Send `request` and wait for the complete response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] or [`ApiError::Timeout`] when no
    /// response arrives. Non-2xx statuses are returned as responses.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Transport for builds without a browser: every call fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unavailable;

impl Transport for Unavailable {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        log::debug!("dropping {} {}: no transport in this build", request.method.as_str(), request.path);
        Err(ApiError::Unavailable)
    }
}
