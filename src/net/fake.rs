//! Scripted transport for unit tests.
//!
//! Replies are consumed in request order. A deferred reply parks the
//! request on a oneshot channel so tests can control completion order.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use futures::channel::oneshot;

use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, Transport};

type Reply = Result<ApiResponse, ApiError>;

enum Scripted {
    Ready(Reply),
    Deferred(oneshot::Receiver<Reply>),
}

#[derive(Default)]
pub(crate) struct ScriptedTransport {
    replies: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(&self, status: u16, body: serde_json::Value) -> &Self {
        self.push(Scripted::Ready(Ok(ApiResponse::new(status, body.to_string()))))
    }

    pub(crate) fn reply_empty(&self, status: u16) -> &Self {
        self.push(Scripted::Ready(Ok(ApiResponse::new(status, ""))))
    }

    pub(crate) fn fail(&self, err: ApiError) -> &Self {
        self.push(Scripted::Ready(Err(err)))
    }

    /// Queue a reply completed later through the returned sender.
    pub(crate) fn defer(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.push(Scripted::Deferred(rx));
        tx
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub(crate) fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| format!("{} {}", r.method.as_str(), r.path)).collect()
    }

    fn push(&self, scripted: Scripted) -> &Self {
        self.replies.lock().unwrap_or_else(PoisonError::into_inner).push_back(scripted);
        self
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).push(request);
        let next = self.replies.lock().unwrap_or_else(PoisonError::into_inner).pop_front();
        match next {
            Some(Scripted::Ready(reply)) => reply,
            Some(Scripted::Deferred(rx)) => rx.await.unwrap_or_else(|_| Err(ApiError::Network("reply dropped".to_owned()))),
            None => Err(ApiError::Network("no scripted reply".to_owned())),
        }
    }
}

pub(crate) fn ok_json(body: serde_json::Value) -> Reply {
    Ok(ApiResponse::new(200, body.to_string()))
}
