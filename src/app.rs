//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the single [`SessionStore`] for the tab. The store is provided as
//! context next to an `RwSignal<Session>` mirror that a store subscription
//! keeps current, so components re-render on every session change while
//! writes still go through the store's operations. Navigation requested by
//! async handlers goes through the app-owned [`Navigator`].

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::{NavigateOptions, StaticSegment};

use crate::components::navbar::Navbar;
use crate::components::require_auth::RequireAuth;
use crate::net::api::ApiClient;
use crate::net::{AppTransport, app_transport};
use crate::pages::{
    dashboard::DashboardPage,
    fallback::{NotFoundPage, UnauthorizedPage},
    home::HomePage,
    login::LoginPage,
    profile::ProfilePage,
    register::RegisterPage,
};
use crate::routes::AppRoute;
use crate::state::session::{Session, SessionStore};

/// Session store shared through context.
pub type SharedSession = Arc<SessionStore<AppTransport>>;
/// API client shared through context.
pub type SharedApi = ApiClient<AppTransport>;

/// App-wide navigation request slot, owned by [`App`] and drained by
/// [`NavigationDriver`] inside the router. A request outlives the page that
/// made it, including pages the route guard has already unmounted.
#[derive(Clone, Copy, Debug)]
pub struct Navigator(RwSignal<Option<String>>);

impl Navigator {
    /// Navigate to `href` once the current task yields.
    pub fn go(self, href: impl Into<String>) {
        self.0.set(Some(href.into()));
    }
}

/// Navigator provided by [`App`].
pub fn use_navigator() -> Navigator {
    expect_context::<Navigator>()
}

/// Performs requests written to the [`Navigator`]; lives as long as the
/// router.
#[component]
fn NavigationDriver() -> impl IntoView {
    let Navigator(target) = use_navigator();
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(href) = target.get() {
            target.set(None);
            navigate(&href, NavigateOptions::default());
        }
    });
}

/// Root application component.
///
/// Provides the session store, its signal mirror, and the API client, then
/// kicks off the startup identity check.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = ApiClient::new(app_transport());
    let store: SharedSession = Arc::new(SessionStore::new(api.clone()));

    let session = RwSignal::new(store.snapshot());
    store.subscribe(move |current: &Session| session.set(current.clone()));

    provide_context(session);
    provide_context(Arc::clone(&store));
    provide_context::<SharedApi>(api);
    provide_context(Navigator(RwSignal::new(None)));

    leptos::task::spawn_local({
        let store = Arc::clone(&store);
        async move {
            store.resolve_identity().await;
        }
    });

    view! {
        <Title text="To-Do App"/>

        <Router>
            <NavigationDriver/>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=RegisterPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                    <Route
                        path=StaticSegment("home")
                        view=|| view! { <RequireAuth route=AppRoute::Home><HomePage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <RequireAuth route=AppRoute::Profile><ProfilePage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <RequireAuth route=AppRoute::Dashboard><DashboardPage/></RequireAuth> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
