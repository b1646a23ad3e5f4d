//! Route-level page components.

pub mod dashboard;
pub mod fallback;
pub mod home;
pub mod login;
pub mod profile;
pub mod register;
