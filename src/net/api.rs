//! Typed REST calls for the task service.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx answers become [`ApiError::Status`] carrying the server's
//! `message` field when one is present, so forms can show it verbatim.
//! Bodies of login/signup/logout/delete are never inspected on success.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, Transport};
use super::types::{
    Credentials, Envelope, ErrorBody, Identity, MeResponse, NewTask, Profile, ProfileUpdate, Registration, Task,
    TaskPatch,
};

pub const ME_PATH: &str = "/auth/me";
pub const LOGIN_PATH: &str = "/auth/login";
pub const SIGNUP_PATH: &str = "/auth/signup";
pub const LOGOUT_PATH: &str = "/auth/logout";
pub const PROFILE_PATH: &str = "/profile";
pub const TASKS_PATH: &str = "/task";
pub const TASK_SEARCH_PATH: &str = "/task/search";

fn task_endpoint(id: &str) -> String {
    format!("{TASKS_PATH}/{id}")
}

fn status_error(resp: &ApiResponse) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(&resp.body).ok().and_then(|body| body.message);
    ApiError::Status { status: resp.status, message }
}

/// REST client bound to one transport.
#[derive(Clone, Debug, Default)]
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn call(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let resp = self.transport.send(request).await?;
        if resp.is_success() { Ok(resp) } else { Err(status_error(&resp)) }
    }

    async fn call_json<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let resp = self.call(request).await?;
        Ok(serde_json::from_str(&resp.body)?)
    }

    // =========================================================
    // Auth
    // =========================================================

    /// Identity behind the current session cookie.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-2xx (typically 401), or a malformed body.
    pub async fn me(&self) -> Result<Identity, ApiError> {
        let me: MeResponse = self.call_json(ApiRequest::get(ME_PATH)).await?;
        Ok(me.into_identity())
    }

    /// Submit login credentials. The server sets the session cookie.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or when the server rejects the credentials.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.call(ApiRequest::post(LOGIN_PATH).json(credentials)?).await?;
        Ok(())
    }

    /// Create an account. The server sets the session cookie.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or when the server rejects the registration
    /// (e.g. duplicate email).
    pub async fn signup(&self, registration: &Registration) -> Result<(), ApiError> {
        self.call(ApiRequest::post(SIGNUP_PATH).json(registration)?).await?;
        Ok(())
    }

    /// Ask the server to clear the session cookie.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or non-2xx.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.call(ApiRequest::post(LOGOUT_PATH)).await?;
        Ok(())
    }

    // =========================================================
    // Profile
    // =========================================================

    /// # Errors
    ///
    /// Fails on transport errors, non-2xx, or a malformed body.
    pub async fn profile(&self) -> Result<Profile, ApiError> {
        self.call_json(ApiRequest::get(PROFILE_PATH)).await
    }

    /// # Errors
    ///
    /// Fails on transport errors, non-2xx, or a malformed body.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile, ApiError> {
        self.call_json(ApiRequest::put(PROFILE_PATH).json(update)?).await
    }

    /// # Errors
    ///
    /// Fails on transport errors or non-2xx.
    pub async fn delete_profile(&self) -> Result<(), ApiError> {
        self.call(ApiRequest::delete(PROFILE_PATH)).await?;
        Ok(())
    }

    // =========================================================
    // Tasks
    // =========================================================

    /// All tasks of the current user, in server order.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-2xx, or a malformed body.
    pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let list: Envelope<Vec<Task>> = self.call_json(ApiRequest::get(TASKS_PATH)).await?;
        Ok(list.into_inner())
    }

    /// # Errors
    ///
    /// Fails on transport errors, non-2xx, or a malformed body.
    pub async fn get_task(&self, id: &str) -> Result<Task, ApiError> {
        let task: Envelope<Task> = self.call_json(ApiRequest::get(task_endpoint(id))).await?;
        Ok(task.into_inner())
    }

    /// # Errors
    ///
    /// Fails on transport errors, non-2xx, or a malformed body.
    pub async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError> {
        let created: Envelope<Task> = self.call_json(ApiRequest::post(TASKS_PATH).json(task)?).await?;
        Ok(created.into_inner())
    }

    /// # Errors
    ///
    /// Fails on transport errors, non-2xx, or a malformed body.
    pub async fn update_task(&self, id: &str, patch: &TaskPatch) -> Result<Task, ApiError> {
        let updated: Envelope<Task> = self.call_json(ApiRequest::put(task_endpoint(id)).json(patch)?).await?;
        Ok(updated.into_inner())
    }

    /// # Errors
    ///
    /// Fails on transport errors or non-2xx.
    pub async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        self.call(ApiRequest::delete(task_endpoint(id))).await?;
        Ok(())
    }

    /// Tasks whose title matches `title`, in server order.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-2xx, or a malformed body.
    pub async fn search_tasks(&self, title: &str) -> Result<Vec<Task>, ApiError> {
        let request = ApiRequest::get(TASK_SEARCH_PATH).query("title", title);
        let list: Envelope<Vec<Task>> = self.call_json(request).await?;
        Ok(list.into_inner())
    }
}
