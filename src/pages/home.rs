//! Home page: the signed-in user's task list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered inside `RequireAuth`, so a session is present. Every mutation
//! is followed by a full reload through [`fetch_tasks`]; failures land in
//! [`TasksState::error`] and are shown above the list.

use leptos::prelude::*;

use crate::app::SharedApi;
use crate::components::task_card::TaskCard;
use crate::net::types::{Task, TaskPriority, TaskStatus};
use crate::state::tasks::{TasksState, fetch_tasks, submit_task};

/// Fetch the list for the current query into `tasks`.
fn reload(api: SharedApi, tasks: RwSignal<TasksState>) {
    let query = tasks.with_untracked(|s| s.query.clone());
    tasks.update(|s| s.loading = true);
    leptos::task::spawn_local(async move {
        match fetch_tasks(&api, &query).await {
            Ok(items) => tasks.update(|s| s.set_items(items)),
            Err(err) => tasks.update(|s| s.set_failure("load tasks", &err)),
        }
    });
}

#[component]
pub fn HomePage() -> impl IntoView {
    let api = expect_context::<SharedApi>();
    let tasks = RwSignal::new(TasksState::default());
    let form_error = RwSignal::new(None::<&'static str>);

    reload(api.clone(), tasks);

    let on_submit = {
        let api = api.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let submission = match tasks.with_untracked(TasksState::submission) {
                Ok(submission) => submission,
                Err(message) => {
                    form_error.set(Some(message));
                    return;
                }
            };
            form_error.set(None);
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match submit_task(&api, &submission).await {
                    Ok(()) => {
                        tasks.update(TasksState::reset_form);
                        reload(api, tasks);
                    }
                    Err(err) => tasks.update(|s| s.set_failure("save task", &err)),
                }
            });
        }
    };

    let on_search = {
        let api = api.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            reload(api.clone(), tasks);
        }
    };

    let on_edit = Callback::new(move |task: Task| {
        form_error.set(None);
        tasks.update(|s| s.start_edit(&task));
    });

    let on_delete = Callback::new({
        let api = api.clone();
        move |id: String| {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.delete_task(&id).await {
                    Ok(()) => {
                        tasks.update(|s| {
                            if s.editing.as_deref() == Some(id.as_str()) {
                                s.reset_form();
                            }
                        });
                        reload(api, tasks);
                    }
                    Err(err) => tasks.update(|s| s.set_failure("delete task", &err)),
                }
            });
        }
    });

    let on_cancel_edit = move |_: leptos::ev::MouseEvent| {
        form_error.set(None);
        tasks.update(TasksState::reset_form);
    };

    view! {
        <div class="home-page">
            <h2>"My Tasks"</h2>

            <form class="task-search" on:submit=on_search>
                <input
                    class="form-control"
                    type="search"
                    placeholder="Search by title"
                    prop:value=move || tasks.with(|s| s.query.clone())
                    on:input=move |ev| tasks.update(|s| s.query = event_target_value(&ev))
                />
                <button class="btn" type="submit">"Search"</button>
            </form>

            <form class="task-form" on:submit=on_submit>
                <input
                    class="form-control"
                    type="text"
                    placeholder="Title"
                    prop:value=move || tasks.with(|s| s.form.title.clone())
                    on:input=move |ev| tasks.update(|s| s.form.title = event_target_value(&ev))
                />
                {move || form_error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                <textarea
                    class="form-control"
                    placeholder="Description"
                    prop:value=move || tasks.with(|s| s.form.description.clone())
                    on:input=move |ev| tasks.update(|s| s.form.description = event_target_value(&ev))
                ></textarea>
                <select
                    class="form-control"
                    prop:value=move || tasks.with(|s| s.form.status.as_str())
                    on:change=move |ev| {
                        if let Some(status) = TaskStatus::parse(&event_target_value(&ev)) {
                            tasks.update(|s| s.form.status = status);
                        }
                    }
                >
                    {TaskStatus::ALL
                        .into_iter()
                        .map(|status| view! { <option value=status.as_str()>{status.as_str()}</option> })
                        .collect_view()}
                </select>
                <select
                    class="form-control"
                    prop:value=move || tasks.with(|s| s.form.priority.as_str())
                    on:change=move |ev| {
                        if let Some(priority) = TaskPriority::parse(&event_target_value(&ev)) {
                            tasks.update(|s| s.form.priority = priority);
                        }
                    }
                >
                    {TaskPriority::ALL
                        .into_iter()
                        .map(|priority| view! { <option value=priority.as_str()>{priority.as_str()}</option> })
                        .collect_view()}
                </select>
                <button class="btn btn--primary" type="submit">
                    {move || if tasks.with(|s| s.editing.is_some()) { "Update Task" } else { "Add Task" }}
                </button>
                <Show when=move || tasks.with(|s| s.editing.is_some())>
                    <button class="btn" type="button" on:click=on_cancel_edit>"Cancel"</button>
                </Show>
            </form>

            {move || tasks.with(|s| s.error.clone()).map(|message| view! { <p class="form-error">{message}</p> })}

            <Show
                when=move || !tasks.with(|s| s.loading && s.items.is_empty())
                fallback=|| view! { <p class="task-list__empty">"Loading tasks..."</p> }
            >
                <ul class="task-list">
                    <For
                        each=move || tasks.with(|s| s.items.clone())
                        key=Task::clone
                        children=move |task| view! { <TaskCard task=task on_edit=on_edit on_delete=on_delete/> }
                    />
                </ul>
                <Show when=move || tasks.with(|s| !s.loading && s.items.is_empty())>
                    <p class="task-list__empty">"No tasks found."</p>
                </Show>
            </Show>
        </div>
    }
}
