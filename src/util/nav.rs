//! Navigation-shell link sets.
//!
//! Links depend only on whether an identity is present (plus the admin
//! dashboard link); the navbar component renders whatever this returns.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::net::types::Role;
use crate::routes::AppRoute;
use crate::state::session::Session;

/// One entry in the navbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    Link { label: &'static str, route: AppRoute },
    Logout,
}

/// Links on the left side of the navbar.
#[must_use]
pub fn primary_links(session: &Session) -> Vec<NavItem> {
    match session.role() {
        None => Vec::new(),
        Some(Role::User) => vec![NavItem::Link { label: "Home", route: AppRoute::Home }],
        Some(Role::Admin) => vec![
            NavItem::Link { label: "Home", route: AppRoute::Home },
            NavItem::Link { label: "Dashboard", route: AppRoute::Dashboard },
        ],
    }
}

/// Account actions on the right side of the navbar.
#[must_use]
pub fn account_links(session: &Session) -> Vec<NavItem> {
    if session.is_authenticated() {
        vec![NavItem::Link { label: "Profile", route: AppRoute::Profile }, NavItem::Logout]
    } else {
        vec![
            NavItem::Link { label: "Login", route: AppRoute::Login },
            NavItem::Link { label: "Register", route: AppRoute::Register },
        ]
    }
}
