//! Client-side route table.
//!
//! DESIGN
//! ======
//! Paths and their admission roles live in one enum so the router, the
//! route guard, and the navigation shell cannot disagree about them.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::Role;

const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// Every screen the client can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Landing,
    Register,
    Login,
    Home,
    Profile,
    Dashboard,
    Unauthorized,
    /// Catch-all for unknown paths.
    NotFound,
}

impl AppRoute {
    pub const ALL: [AppRoute; 8] = [
        AppRoute::Landing,
        AppRoute::Register,
        AppRoute::Login,
        AppRoute::Home,
        AppRoute::Profile,
        AppRoute::Dashboard,
        AppRoute::Unauthorized,
        AppRoute::NotFound,
    ];

    /// Absolute path; `NotFound` has no path of its own.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Register => "/register",
            Self::Login => "/login",
            Self::Home => "/home",
            Self::Profile => "/profile",
            Self::Dashboard => "/dashboard",
            Self::Unauthorized => "/unauthorized",
            Self::NotFound => "*",
        }
    }

    /// Match a location against the table, ignoring query, fragment, and a
    /// trailing slash.
    #[must_use]
    pub fn parse(location: &str) -> Self {
        let path = location.split(['?', '#']).next().unwrap_or_default();
        let path = if path.len() > 1 { path.trim_end_matches('/') } else { path };
        let path = if path.is_empty() { "/" } else { path };
        Self::ALL
            .into_iter()
            .find(|route| *route != Self::NotFound && route.path() == path)
            .unwrap_or(Self::NotFound)
    }

    /// Roles admitted by the route guard, or `None` for public routes.
    #[must_use]
    pub fn required_roles(self) -> Option<&'static [Role]> {
        match self {
            Self::Home | Self::Profile => Some(Role::ALL),
            Self::Dashboard => Some(ADMIN_ONLY),
            Self::Landing | Self::Register | Self::Login | Self::Unauthorized | Self::NotFound => None,
        }
    }

    /// Where a freshly authenticated user lands.
    #[must_use]
    pub fn landing_for(role: Role) -> Self {
        match role {
            Role::Admin => Self::Dashboard,
            Role::User => Self::Home,
        }
    }
}

/// A navigation the hosting router should perform, replacing history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Redirect {
    pub to: AppRoute,
    /// Originally requested route, collected for post-login return.
    pub from: Option<AppRoute>,
}

impl Redirect {
    #[must_use]
    pub fn to(route: AppRoute) -> Self {
        Self { to: route, from: None }
    }

    #[must_use]
    pub fn with_from(route: AppRoute, from: AppRoute) -> Self {
        Self { to: route, from: Some(from) }
    }

    /// Target location including the `from` query when present.
    #[must_use]
    pub fn href(&self) -> String {
        match self.from {
            Some(from) => format!("{}?{FROM_QUERY_KEY}={}", self.to.path(), from.path()),
            None => self.to.path().to_owned(),
        }
    }
}

/// Query key carrying the originally requested route to the login page.
pub const FROM_QUERY_KEY: &str = "from";
