//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session signal and store from Leptos context; they
//! never write session state directly.

pub mod navbar;
pub mod require_auth;
pub mod task_card;
