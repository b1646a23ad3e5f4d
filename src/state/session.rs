//! Auth-session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! The single source of truth for "who is the current user". Route guards,
//! the navbar, and the profile page read it; only the operations on
//! [`SessionStore`] write it.
//!
//! DESIGN
//! ======
//! Each state-changing cycle (identity check, login/register, logout) takes
//! a generation number. A response may only commit if its generation is
//! still the latest, so a slow identity check can never overwrite the result
//! of a newer one. Logout always commits. A refresh of a settled session
//! takes a generation too but never marks the session pending, so guarded
//! pages stay mounted through it.
//!
//! Listeners run synchronously after every change, outside the lock, so a
//! listener may read the store again.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::{Credentials, Identity, Registration, Role};
use crate::routes::{AppRoute, Redirect};

/// Client-held belief about the current identity.
///
/// `resolved` is false only while an identity check or a
/// login/register/logout call is in flight.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub identity: Option<Identity>,
    pub resolved: bool,
}

impl Session {
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|identity| identity.role)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

/// Handle returned by [`SessionStore::subscribe`].
pub type SubscriptionId = u64;

type Listener = Arc<dyn Fn(&Session) + Send + Sync>;

#[derive(Default)]
struct Inner {
    session: Session,
    generation: u64,
    next_subscription: SubscriptionId,
    listeners: Vec<(SubscriptionId, Listener)>,
}

/// Owner of the tab-wide [`Session`].
pub struct SessionStore<T> {
    api: ApiClient<T>,
    inner: Mutex<Inner>,
}

impl<T: Transport> SessionStore<T> {
    /// New store in the initial `{ identity: absent, resolved: false }` state.
    pub fn new(api: ApiClient<T>) -> Self {
        Self { api, inner: Mutex::new(Inner::default()) }
    }

    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    /// Current session value.
    pub fn snapshot(&self) -> Session {
        self.lock().session.clone()
    }

    /// Register `listener` to run after every session change.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&Session) + Send + Sync + 'static,
    {
        let mut inner = self.lock();
        inner.next_subscription += 1;
        let id = inner.next_subscription;
        inner.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns false if `id` was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.lock();
        let before = inner.listeners.len();
        inner.listeners.retain(|(existing, _)| *existing != id);
        inner.listeners.len() != before
    }

    /// Ask the server who the session cookie belongs to.
    ///
    /// Any failure (network, 401, malformed body) means "no session"; it is
    /// never reported as an error. Returns the identity now held by the
    /// store.
    pub async fn resolve_identity(&self) -> Option<Identity> {
        let generation = self.begin();
        self.check_identity(generation).await
    }

    /// Re-read the identity of an already settled session, e.g. after a
    /// profile edit, without passing through the pending state.
    ///
    /// Guarded pages stay mounted while the check runs. Failures mean "no
    /// session" exactly as in [`Self::resolve_identity`].
    pub async fn refresh_identity(&self) -> Option<Identity> {
        let generation = self.next_generation();
        self.check_identity(generation).await
    }

    async fn check_identity(&self, generation: u64) -> Option<Identity> {
        let identity = match self.api.me().await {
            Ok(identity) => Some(identity),
            Err(err) => {
                log::debug!("identity check failed, treating as signed out: {err}");
                None
            }
        };
        if self.commit(generation, |session| session.identity = identity.clone()) {
            identity
        } else {
            log::debug!("discarding superseded identity response (generation {generation})");
            self.snapshot().identity
        }
    }

    /// Log in, then confirm the identity with a fresh identity check.
    ///
    /// # Errors
    ///
    /// Returns the login call's error (e.g. invalid credentials). The session
    /// is settled back to resolved before returning.
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<Option<Identity>, ApiError> {
        self.submit_then_resolve(self.api.login(credentials)).await
    }

    /// Create an account, then confirm the identity with a fresh identity
    /// check.
    ///
    /// # Errors
    ///
    /// Returns the signup call's error (e.g. duplicate email). The session is
    /// settled back to resolved before returning.
    pub async fn register(&self, registration: &Registration) -> Result<Option<Identity>, ApiError> {
        self.submit_then_resolve(self.api.signup(registration)).await
    }

    /// Log out. The server call is best-effort; the local session is cleared
    /// regardless. Returns the redirect to the login surface.
    pub async fn clear_session(&self) -> Redirect {
        self.begin();
        if let Err(err) = self.api.logout().await {
            log::warn!("logout request failed, clearing local session anyway: {err}");
        }
        self.force_signed_out();
        Redirect::to(AppRoute::Login)
    }

    /// Delete the signed-in account, then sign out.
    ///
    /// `leave` receives the registration redirect after the server confirms
    /// the deletion and before the session changes, so a caller rendered
    /// behind the route guard can navigate away while it is still mounted.
    ///
    /// # Errors
    ///
    /// Returns the delete call's error; the session is left untouched.
    pub async fn delete_account<F>(&self, leave: F) -> Result<(), ApiError>
    where
        F: FnOnce(Redirect),
    {
        self.api.delete_profile().await?;
        leave(Redirect::to(AppRoute::Register));
        self.clear_session().await;
        Ok(())
    }

    async fn submit_then_resolve<F>(&self, call: F) -> Result<Option<Identity>, ApiError>
    where
        F: Future<Output = Result<(), ApiError>>,
    {
        let generation = self.begin();
        if let Err(err) = call.await {
            self.commit(generation, |_| {});
            return Err(err);
        }
        // Confirmation strictly follows the credential call.
        Ok(self.resolve_identity().await)
    }

    /// Start a cycle: take the next generation and mark the session pending.
    fn begin(&self) -> u64 {
        let mut inner = self.lock();
        inner.generation += 1;
        let generation = inner.generation;
        if inner.session.resolved {
            inner.session.resolved = false;
            Self::notify(inner);
        }
        generation
    }

    /// Take the next generation without touching the session.
    fn next_generation(&self) -> u64 {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.generation
    }

    /// Apply `update` and settle the session, only if `generation` is the
    /// latest cycle.
    fn commit(&self, generation: u64, update: impl FnOnce(&mut Session)) -> bool {
        let mut inner = self.lock();
        if inner.generation != generation {
            return false;
        }
        let before = inner.session.clone();
        update(&mut inner.session);
        inner.session.resolved = true;
        if inner.session != before {
            Self::notify(inner);
        }
        true
    }

    fn force_signed_out(&self) {
        let mut inner = self.lock();
        inner.generation += 1;
        let before = inner.session.clone();
        inner.session = Session { identity: None, resolved: true };
        if inner.session != before {
            Self::notify(inner);
        }
    }

    fn notify(inner: MutexGuard<'_, Inner>) {
        let session = inner.session.clone();
        let listeners: Vec<Listener> = inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect();
        drop(inner);
        for listener in listeners {
            listener(&session);
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
