//! Route admission decision.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure function of the session and the route's admitted roles. The
//! `RequireAuth` component re-runs it on every session change and hands
//! redirects to the router; nothing here navigates by itself.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::Role;
use crate::routes::{AppRoute, Redirect};
use crate::state::session::Session;

/// Outcome of evaluating a protected route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Identity not yet known: show a neutral placeholder, do not redirect.
    Pending,
    /// Render the protected content.
    Render,
    /// Navigate elsewhere.
    Redirect(Redirect),
}

/// Decide access to `requested` for the given session.
///
/// Signed-out users go to login carrying `requested`; signed-in users whose
/// role is not in `allowed` go to the unauthorized page.
#[must_use]
pub fn decide(session: &Session, allowed: &[Role], requested: AppRoute) -> Decision {
    if !session.resolved {
        return Decision::Pending;
    }
    match session.role() {
        None => Decision::Redirect(Redirect::with_from(AppRoute::Login, requested)),
        Some(role) if !allowed.contains(&role) => Decision::Redirect(Redirect::to(AppRoute::Unauthorized)),
        Some(_) => Decision::Render,
    }
}

/// [`decide`] using the roles declared by the route table. Public routes
/// always render.
#[must_use]
pub fn decide_route(session: &Session, requested: AppRoute) -> Decision {
    match requested.required_roles() {
        Some(allowed) => decide(session, allowed, requested),
        None => Decision::Render,
    }
}
