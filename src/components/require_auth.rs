//! Route guard component.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a protected page. Re-evaluates [`decide`] whenever the session
//! signal changes and executes redirects through the router, replacing the
//! history entry so "back" does not bounce through the guard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::routes::AppRoute;
use crate::state::session::Session;
use crate::util::guard::{Decision, decide, decide_route};

/// Render `children` only for a resolved session whose role is admitted.
///
/// `roles` overrides the roles declared for `route` in the route table.
#[component]
pub fn RequireAuth(
    route: AppRoute,
    #[prop(optional)] roles: Option<&'static [Role]>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        session.with(|current| match roles {
            Some(allowed) => decide(current, allowed, route),
            None => decide_route(current, route),
        })
    });

    Effect::new(move || {
        if let Decision::Redirect(redirect) = decision.get() {
            navigate(&redirect.href(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match decision.get() {
        Decision::Pending => view! { <p class="guard-loading">"Loading ..."</p> }.into_any(),
        Decision::Render => children().into_any(),
        Decision::Redirect(_) => ().into_any(),
    }
}
