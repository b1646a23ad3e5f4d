//! Login page: email + password, then role-based landing.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::app::{SharedSession, use_navigator};
use crate::net::types::{Credentials, Identity};
use crate::routes::{AppRoute, FROM_QUERY_KEY};
use crate::state::session::Session;
use crate::util::guard::{Decision, decide_route};
use crate::util::validation::{FieldErrors, check_email, check_password, collect};

pub(crate) fn validate_login_form(email: &str, password: &str) -> Result<Credentials, FieldErrors> {
    let mut errors = FieldErrors::new();
    collect(&mut errors, "email", check_email(email));
    collect(&mut errors, "password", check_password(password));
    if errors.is_empty() {
        Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
    } else {
        Err(errors)
    }
}

/// Where to go after login/register.
///
/// Returns to `from` when the guard would admit the new identity there,
/// otherwise admins land on the dashboard and everyone else on home.
pub fn post_auth_route(identity: Option<&Identity>, from: Option<AppRoute>) -> AppRoute {
    let Some(identity) = identity else {
        return AppRoute::Home;
    };
    let session = Session { identity: Some(identity.clone()), resolved: true };
    from.filter(|route| route.required_roles().is_some())
        .filter(|route| decide_route(&session, *route) == Decision::Render)
        .unwrap_or_else(|| AppRoute::landing_for(identity.role))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SharedSession>();
    let navigator = use_navigator();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(FieldErrors::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(None);
        let credentials = match validate_login_form(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        field_errors.set(FieldErrors::new());
        let from = query.with_untracked(|q| q.get(FROM_QUERY_KEY)).map(|path| AppRoute::parse(&path));

        busy.set(true);
        let store = Arc::clone(&store);
        leptos::task::spawn_local(async move {
            match store.authenticate(&credentials).await {
                Ok(identity) => {
                    let target = post_auth_route(identity.as_ref(), from);
                    navigator.go(target.path());
                }
                Err(err) => {
                    error.set(Some(err.user_message()));
                    busy.set(false);
                }
            }
        });
    };

    let field_error = move |field: &'static str| {
        move || {
            field_errors.with(|errors| {
                errors.get(field).map(|message| view! { <p class="form-error">{*message}</p> })
            })
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Login"</h2>
                <form on:submit=on_submit>
                    <label class="form-label">
                        "Email"
                        <input
                            class="form-control"
                            type="email"
                            placeholder="Enter Your Email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    {field_error("email")}
                    <label class="form-label">
                        "Password"
                        <input
                            class="form-control"
                            type="password"
                            placeholder="Enter Your Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    {field_error("password")}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                    {move || error.get().map(|message| view! { <p class="form-error form-error--center">{message}</p> })}
                    <div class="auth-card__switch">
                        <span>"Don't have an account?"</span>
                        <A href=AppRoute::Register.path()>"Register"</A>
                    </div>
                </form>
            </div>
        </div>
    }
}
