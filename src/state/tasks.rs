//! Task-list state for the home page.
//!
//! DESIGN
//! ======
//! The list is a transient copy of server data used only for rendering;
//! after every create/update/delete the page refetches rather than patching
//! it locally. Failures land in `error` so the page can show them.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::{NewTask, Task, TaskPatch};
use crate::util::validation::check_title;

/// What submitting the task form should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskSubmission {
    Create(NewTask),
    Update { id: String, patch: TaskPatch },
}

/// Shared task list and form state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TasksState {
    pub items: Vec<Task>,
    pub loading: bool,
    pub error: Option<String>,
    /// Form contents; defaults to an empty pending/medium task.
    pub form: NewTask,
    /// Id of the task being edited, if the form is in edit mode.
    pub editing: Option<String>,
    /// Active title search, empty for the full list.
    pub query: String,
}

impl TasksState {
    /// Load `task` into the form and switch to edit mode.
    pub fn start_edit(&mut self, task: &Task) {
        self.form = NewTask::from(task);
        self.editing = Some(task.id.clone());
    }

    /// Back to an empty create form.
    pub fn reset_form(&mut self) {
        self.form = NewTask::default();
        self.editing = None;
    }

    /// Validate the form and turn it into a request.
    ///
    /// # Errors
    ///
    /// Returns the field message when the title is blank.
    pub fn submission(&self) -> Result<TaskSubmission, &'static str> {
        check_title(&self.form.title)?;
        let mut task = self.form.clone();
        task.title = task.title.trim().to_owned();
        Ok(match &self.editing {
            Some(id) => TaskSubmission::Update { id: id.clone(), patch: TaskPatch::from(task) },
            None => TaskSubmission::Create(task),
        })
    }

    /// Replace the list with a fresh server copy.
    pub fn set_items(&mut self, items: Vec<Task>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Record a failed operation for display.
    pub fn set_failure(&mut self, action: &str, err: &ApiError) {
        log::error!("{action} failed: {err}");
        self.loading = false;
        self.error = Some(format!("Could not {action}: {}", err.user_message()));
    }
}

/// Full list, or a title search when `query` has non-blank text.
///
/// # Errors
///
/// Propagates the request failure unchanged.
pub async fn fetch_tasks<T: Transport>(api: &ApiClient<T>, query: &str) -> Result<Vec<Task>, ApiError> {
    let query = query.trim();
    if query.is_empty() { api.list_tasks().await } else { api.search_tasks(query).await }
}

/// Send a validated form submission.
///
/// Only the status matters: the page refetches the list afterwards, so a
/// 2xx body of any shape counts as saved.
///
/// # Errors
///
/// Propagates transport and non-2xx failures.
pub async fn submit_task<T: Transport>(api: &ApiClient<T>, submission: &TaskSubmission) -> Result<(), ApiError> {
    let sent = match submission {
        TaskSubmission::Create(task) => api.create_task(task).await,
        TaskSubmission::Update { id, patch } => api.update_task(id, patch).await,
    };
    match sent {
        Ok(_) => Ok(()),
        Err(ApiError::Decode(err)) => {
            log::debug!("task saved; ignoring unexpected response body: {err}");
            Ok(())
        }
        Err(err) => Err(err),
    }
}
