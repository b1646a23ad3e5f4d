use super::*;
use crate::net::fake::ScriptedTransport;
use crate::net::types::{TaskPriority, TaskStatus};
use futures::executor::block_on;
use serde_json::json;

fn task(id: &str, title: &str) -> Task {
    Task {
        id: id.to_owned(),
        title: title.to_owned(),
        description: "desc".to_owned(),
        status: TaskStatus::Completed,
        priority: TaskPriority::High,
    }
}

#[test]
fn default_form_is_pending_medium_create() {
    let state = TasksState::default();
    assert_eq!(state.form.status, TaskStatus::Pending);
    assert_eq!(state.form.priority, TaskPriority::Medium);
    assert!(state.editing.is_none());
}

#[test]
fn submission_requires_title() {
    let state = TasksState::default();
    assert_eq!(state.submission(), Err("Title is required"));
}

#[test]
fn submission_creates_when_not_editing() {
    let mut state = TasksState::default();
    state.form.title = "  X  ".to_owned();
    let Ok(TaskSubmission::Create(new_task)) = state.submission() else {
        panic!("expected create submission");
    };
    assert_eq!(new_task.title, "X");
    assert_eq!(new_task.status, TaskStatus::Pending);
}

#[test]
fn start_edit_loads_task_and_submits_update() {
    let mut state = TasksState::default();
    state.start_edit(&task("t1", "Old"));
    assert_eq!(state.form.title, "Old");
    assert_eq!(state.form.priority, TaskPriority::High);

    state.form.title = "New".to_owned();
    assert_eq!(
        state.submission(),
        Ok(TaskSubmission::Update {
            id: "t1".to_owned(),
            patch: TaskPatch {
                title: Some("New".to_owned()),
                description: Some("desc".to_owned()),
                status: Some(TaskStatus::Completed),
                priority: Some(TaskPriority::High),
            },
        })
    );
}

#[test]
fn reset_form_leaves_edit_mode() {
    let mut state = TasksState::default();
    state.start_edit(&task("t1", "Old"));
    state.reset_form();
    assert!(state.editing.is_none());
    assert_eq!(state.form, NewTask::default());
}

#[test]
fn set_items_clears_error_and_loading() {
    let mut state = TasksState { loading: true, error: Some("x".to_owned()), ..TasksState::default() };
    state.set_items(vec![task("t1", "A")]);
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.items.len(), 1);
}

#[test]
fn set_failure_surfaces_server_message() {
    let mut state = TasksState { loading: true, ..TasksState::default() };
    let err = ApiError::Status { status: 404, message: Some("Task not found".to_owned()) };
    state.set_failure("delete task", &err);
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Could not delete task: Task not found"));
}

// =============================================================
// Requests
// =============================================================

#[test]
fn fetch_tasks_lists_everything_for_blank_query() {
    let api = ApiClient::new(ScriptedTransport::new());
    api.transport().reply(200, json!({ "data": [{ "_id": "t1", "title": "A" }] }));
    let items = block_on(fetch_tasks(&api, "   ")).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(api.transport().paths(), vec!["GET /task"]);
}

#[test]
fn fetch_tasks_searches_trimmed_title() {
    let api = ApiClient::new(ScriptedTransport::new());
    api.transport().reply(200, json!([]));
    let items = block_on(fetch_tasks(&api, " milk ")).unwrap();
    assert!(items.is_empty());
    let sent = api.transport().requests();
    assert_eq!(sent[0].path, "/task/search");
    assert_eq!(sent[0].query, vec![("title".to_owned(), "milk".to_owned())]);
}

#[test]
fn submit_task_routes_update_to_task_endpoint() {
    let api = ApiClient::new(ScriptedTransport::new());
    api.transport().reply(200, json!({ "_id": "t1", "title": "New", "status": "completed" }));
    let mut state = TasksState::default();
    state.start_edit(&task("t1", "Old"));
    state.form.title = "New".to_owned();
    let submission = state.submission().unwrap();
    block_on(submit_task(&api, &submission)).unwrap();
    assert_eq!(api.transport().paths(), vec!["PUT /task/t1"]);
    assert_eq!(api.transport().requests()[0].body.as_ref().and_then(|b| b.get("title")).cloned(), Some(json!("New")));
}

#[test]
fn submit_task_accepts_any_success_body() {
    let api = ApiClient::new(ScriptedTransport::new());
    api.transport().reply(201, json!({ "message": "Task created" })).reply_empty(200);
    let mut state = TasksState::default();
    state.form.title = "X".to_owned();

    let created = state.submission().unwrap();
    assert!(block_on(submit_task(&api, &created)).is_ok());

    state.start_edit(&task("t1", "Old"));
    let updated = state.submission().unwrap();
    assert!(block_on(submit_task(&api, &updated)).is_ok());
    assert_eq!(api.transport().paths(), vec!["POST /task", "PUT /task/t1"]);
}

#[test]
fn submit_task_failure_is_returned() {
    let api = ApiClient::new(ScriptedTransport::new());
    api.transport().reply(500, json!({}));
    let mut state = TasksState::default();
    state.form.title = "X".to_owned();
    let submission = state.submission().unwrap();
    let err = block_on(submit_task(&api, &submission)).unwrap_err();
    assert_eq!(err.user_message(), "Something went wrong!");
    assert_eq!(api.transport().paths(), vec!["POST /task"]);
}
