//! Profile page: view, edit, and delete the signed-in account.
//!
//! SYSTEM CONTEXT
//! ==============
//! Profile fields come from `/profile`, not from the session identity. After
//! a successful save the session store refreshes the identity so the
//! navbar and guards see the new username/email; the refresh never marks
//! the session pending, so this page stays mounted through it.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::app::{SharedApi, SharedSession, use_navigator};
use crate::net::types::ProfileUpdate;
use crate::routes::Redirect;
use crate::util::validation::{FieldErrors, check_email, check_username, collect};

pub(crate) fn validate_profile_form(username: &str, email: &str) -> Result<ProfileUpdate, FieldErrors> {
    let mut errors = FieldErrors::new();
    collect(&mut errors, "username", check_username(username));
    collect(&mut errors, "email", check_email(email));
    if errors.is_empty() {
        Ok(ProfileUpdate { username: username.to_owned(), email: email.to_owned() })
    } else {
        Err(errors)
    }
}

/// Browser confirmation dialog; declines outside the browser.
fn confirm_account_deletion() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message("Are you sure you want to delete your account?").ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let api = expect_context::<SharedApi>();
    let store = expect_context::<SharedSession>();
    let navigator = use_navigator();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let field_errors = RwSignal::new(FieldErrors::new());
    let error = RwSignal::new(None::<String>);
    let info = RwSignal::new(None::<&'static str>);
    let loading = RwSignal::new(true);
    let busy = RwSignal::new(false);

    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.profile().await {
                Ok(profile) => {
                    username.set(profile.username);
                    email.set(profile.email);
                }
                Err(err) => {
                    log::error!("load profile failed: {err}");
                    error.set(Some(err.user_message()));
                }
            }
            loading.set(false);
        });
    }

    let on_save = {
        let store = Arc::clone(&store);
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            error.set(None);
            info.set(None);
            let update = match validate_profile_form(&username.get_untracked(), &email.get_untracked()) {
                Ok(update) => update,
                Err(errors) => {
                    field_errors.set(errors);
                    return;
                }
            };
            field_errors.set(FieldErrors::new());

            busy.set(true);
            let api = api.clone();
            let store = Arc::clone(&store);
            leptos::task::spawn_local(async move {
                match api.update_profile(&update).await {
                    Ok(profile) => {
                        username.set(profile.username);
                        email.set(profile.email);
                        store.refresh_identity().await;
                        info.set(Some("Profile updated"));
                    }
                    Err(err) => {
                        log::error!("update profile failed: {err}");
                        error.set(Some(err.user_message()));
                    }
                }
                busy.set(false);
            });
        }
    };

    let on_delete = move |_: leptos::ev::MouseEvent| {
        if busy.get_untracked() || !confirm_account_deletion() {
            return;
        }
        error.set(None);
        busy.set(true);
        let store = Arc::clone(&store);
        leptos::task::spawn_local(async move {
            let leave = move |redirect: Redirect| navigator.go(redirect.href());
            if let Err(err) = store.delete_account(leave).await {
                log::error!("delete profile failed: {err}");
                error.set(Some(err.user_message()));
                busy.set(false);
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
        <div class="profile-page">
            <h2>"Profile"</h2>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading profile..."</p> }>
                <form class="profile-form" on:submit=on_save.clone()>
                    <label class="form-label">
                        "Name"
                        <input
                            class="form-control"
                            type="text"
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
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    {field_error("email")}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Save"
                    </button>
                    <button class="btn btn--danger" type="button" disabled=move || busy.get() on:click=on_delete.clone()>
                        "Delete Account"
                    </button>
                </form>
            </Show>
            {move || info.get().map(|message| view! { <p class="form-info">{message}</p> })}
            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
        </div>
    }
}
