//! Browser transport over `fetch` via `gloo-net`.
//!
//! Every request is sent against the configured base address with
//! `credentials: include` so the server-set session cookie travels along.
//! A request still pending when the timeout fires is aborted.

use futures::future::{Either, select};
use gloo_net::http::Request;
use web_sys::{AbortController, RequestCredentials};

use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, Method, Transport};
use crate::config::ClientConfig;

/// Cookie-carrying fetch transport with a fixed timeout.
#[derive(Clone, Debug)]
pub struct FetchTransport {
    config: ClientConfig,
}

impl FetchTransport {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn timeout_ms(&self) -> u32 {
        u32::try_from(self.config.timeout.as_millis()).unwrap_or(u32::MAX)
    }
}

impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self.config.url(&request.path);
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };

        let controller = AbortController::new()
            .map_err(|e| ApiError::Network(format!("abort controller unavailable: {e:?}")))?;
        let signal = controller.signal();

        let builder = builder
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(&signal))
            .query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        let prepared = match &request.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Encode(e.to_string()))?;

        let fetch = async move {
            let resp = prepared.send().await?;
            let status = resp.status();
            let body = resp.text().await?;
            Ok::<_, gloo_net::Error>(ApiResponse { status, body })
        };
        let timeout = gloo_timers::future::TimeoutFuture::new(self.timeout_ms());
        futures::pin_mut!(fetch);
        futures::pin_mut!(timeout);

        match select(fetch, timeout).await {
            Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string())),
            Either::Right(((), _)) => {
                controller.abort();
                log::warn!("{} {} timed out", request.method.as_str(), request.path);
                Err(ApiError::Timeout(self.config.timeout))
            }
        }
    }
}
