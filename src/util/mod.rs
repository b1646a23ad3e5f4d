//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure decision and validation logic lives here so pages and components stay
//! thin and the rules stay testable without a browser.

pub mod guard;
pub mod nav;
pub mod validation;
