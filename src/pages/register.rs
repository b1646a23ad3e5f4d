//! Registration page, also served at `/`.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::{SharedSession, use_navigator};
use crate::net::types::Registration;
use crate::pages::login::post_auth_route;
use crate::routes::AppRoute;
use crate::util::validation::{
    FieldErrors, check_email, check_password, check_repeat_password, check_username, collect,
};

pub(crate) fn validate_register_form(
    username: &str,
    email: &str,
    password: &str,
    repeat_password: &str,
) -> Result<Registration, FieldErrors> {
    let mut errors = FieldErrors::new();
    collect(&mut errors, "username", check_username(username));
    collect(&mut errors, "email", check_email(email));
    collect(&mut errors, "password", check_password(password));
    collect(&mut errors, "repeat_password", check_repeat_password(password, repeat_password));
    if errors.is_empty() {
        Ok(Registration {
            username: username.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        })
    } else {
        Err(errors)
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let store = expect_context::<SharedSession>();
    let navigator = use_navigator();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let repeat_password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(FieldErrors::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(None);
        let registration = match validate_register_form(
            &username.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &repeat_password.get_untracked(),
        ) {
            Ok(registration) => registration,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        field_errors.set(FieldErrors::new());

        busy.set(true);
        let store = Arc::clone(&store);
        leptos::task::spawn_local(async move {
            match store.register(&registration).await {
                Ok(identity) => {
                    let target = post_auth_route(identity.as_ref(), None);
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
                <h2>"Register"</h2>
                <form on:submit=on_submit>
                    <label class="form-label">
                        "Name"
                        <input
                            class="form-control"
                            type="text"
                            placeholder="Enter Your Name"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    {field_error("username")}
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
                    <label class="form-label">
                        "Repeat Password"
                        <input
                            class="form-control"
                            type="password"
                            placeholder="Repeat password"
                            prop:value=move || repeat_password.get()
                            on:input=move |ev| repeat_password.set(event_target_value(&ev))
                        />
                    </label>
                    {field_error("repeat_password")}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Submit" }}
                    </button>
                    {move || error.get().map(|message| view! { <p class="form-error form-error--center">{message}</p> })}
                    <div class="auth-card__switch">
                        <span>"Already have an account?"</span>
                        <A href=AppRoute::Login.path()>"Login"</A>
                    </div>
                </form>
            </div>
        </div>
    }
}
