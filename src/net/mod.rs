//! Networking modules for the task service REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the HTTP adapter seam, `fetch` its browser implementation,
//! `api` the typed endpoint calls, and `types` the wire schema.

pub mod api;
pub mod error;
#[cfg(test)]
pub(crate) mod fake;
#[cfg(feature = "csr")]
pub mod fetch;
pub mod transport;
pub mod types;

/// Transport used by the running application.
#[cfg(feature = "csr")]
pub type AppTransport = fetch::FetchTransport;
/// Transport used by the running application.
#[cfg(not(feature = "csr"))]
pub type AppTransport = transport::Unavailable;

/// Build the application transport from compile-time config.
#[cfg(feature = "csr")]
pub fn app_transport() -> AppTransport {
    fetch::FetchTransport::new(crate::config::ClientConfig::from_build_env())
}

/// Build the application transport from compile-time config.
#[cfg(not(feature = "csr"))]
pub fn app_transport() -> AppTransport {
    transport::Unavailable
}
