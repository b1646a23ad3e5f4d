//! Top navigation bar.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::{SharedSession, use_navigator};
use crate::state::session::Session;
use crate::util::nav::{NavItem, account_links, primary_links};

/// Navbar with session-dependent links and a logout button.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let store = expect_context::<SharedSession>();
    let navigator = use_navigator();

    let on_logout = Callback::new(move |()| {
        let store = Arc::clone(&store);
        leptos::task::spawn_local(async move {
            let redirect = store.clear_session().await;
            navigator.go(redirect.href());
        });
    });

    let render_item = move |item: NavItem| match item {
        NavItem::Link { label, route } => view! {
            <li class="nav-item">
                <A href=route.path()>{label}</A>
            </li>
        }
        .into_any(),
        NavItem::Logout => view! {
            <li class="nav-item">
                <button class="btn btn--danger" on:click=move |_| on_logout.run(())>
                    "Logout"
                </button>
            </li>
        }
        .into_any(),
    };

    view! {
        <nav class="navbar">
            <A href="/">"To-Do App"</A>
            <ul class="navbar__links">
                {move || session.with(primary_links).into_iter().map(render_item).collect_view()}
            </ul>
            <ul class="navbar__links navbar__links--account">
                {move || session.with(account_links).into_iter().map(render_item).collect_view()}
            </ul>
        </nav>
    }
}
