//! Pages for unknown routes and rejected roles.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::AppRoute;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="fallback-page">
            <h2>"Page not found."</h2>
            <A href=AppRoute::Landing.path()>"Back to start"</A>
        </div>
    }
}

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="fallback-page">
            <h2>"Unauthorized"</h2>
            <p>"You do not have access to this page."</p>
            <A href=AppRoute::Home.path()>"Back to tasks"</A>
        </div>
    }
}
