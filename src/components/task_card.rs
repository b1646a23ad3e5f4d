//! Single task row with edit and delete actions.

use leptos::prelude::*;

use crate::net::types::Task;

#[component]
pub fn TaskCard(task: Task, on_edit: Callback<Task>, on_delete: Callback<String>) -> impl IntoView {
    let status = task.status.as_str();
    let priority = task.priority.as_str();
    let edit_task = task.clone();
    let delete_id = task.id.clone();

    view! {
        <li class="task-card">
            <div class="task-card__body">
                <h4 class="task-card__title">{task.title}</h4>
                <p class="task-card__description">{task.description}</p>
                <span class="task-card__meta">
                    {format!("Status: {status} | Priority: {priority}")}
                </span>
            </div>
            <div class="task-card__actions">
                <button class="btn" on:click=move |_| on_edit.run(edit_task.clone())>
                    "Edit"
                </button>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(delete_id.clone())>
                    "Delete"
                </button>
            </div>
        </li>
    }
}
