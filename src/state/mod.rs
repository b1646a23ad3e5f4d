//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns the authoritative identity; `tasks` is page-local list and
//! form state. Neither is written by components except through their own
//! methods.

pub mod session;
pub mod tasks;
