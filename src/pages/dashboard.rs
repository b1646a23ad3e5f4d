//! Admin dashboard: landing page for the admin role.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Identity;
use crate::routes::AppRoute;
use crate::state::session::Session;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let field = move |read: fn(&Identity) -> String| {
        move || session.with(|s| s.identity.as_ref().map(read).unwrap_or_default())
    };

    view! {
        <div class="dashboard-page">
            <h2>"Admin Dashboard"</h2>
            <dl class="dashboard-identity">
                <dt>"Name"</dt>
                <dd>{field(|identity| identity.username.clone())}</dd>
                <dt>"Email"</dt>
                <dd>{field(|identity| identity.email.clone())}</dd>
                <dt>"Role"</dt>
                <dd>{field(|identity| identity.role.to_string())}</dd>
            </dl>
            <A href=AppRoute::Home.path()>"Go to tasks"</A>
        </div>
    }
}
