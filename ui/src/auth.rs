//! Authentication context
//!
//! Read-only provider of the current user, populated once at startup from
//! the backend session and injected through Leptos context so components
//! never reach for a global. The session token itself lives in local storage
//! and is attached to requests by the API client.

use gloo_storage::{LocalStorage, Storage};
use leptos::{create_rw_signal, expect_context, provide_context, RwSignal, SignalGet, SignalSet};

use studyhub_shared::CurrentUser;

const SESSION_KEY: &str = "studyhub.session";

/// Injected provider of the current user
#[derive(Clone, Copy)]
pub struct AuthContext {
    user: RwSignal<Option<CurrentUser>>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            user: create_rw_signal(None),
        }
    }

    /// Snapshot of the signed-in user, if any
    pub fn current_user(&self) -> Option<CurrentUser> {
        self.user.get()
    }

    /// Reactive handle for views that render sign-in state
    pub fn user_signal(&self) -> RwSignal<Option<CurrentUser>> {
        self.user
    }

    pub fn set_user(&self, user: Option<CurrentUser>) {
        self.user.set(user);
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Register the auth context at the app root
pub fn provide_auth() -> AuthContext {
    let auth = AuthContext::new();
    provide_context(auth);
    auth
}

/// Get the auth context provided by the app root
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Session token left by the login flow, if any
pub fn stored_session_token() -> Option<String> {
    LocalStorage::get(SESSION_KEY).ok()
}

/// Drop a session the backend no longer recognizes
pub fn clear_session_token() {
    LocalStorage::delete(SESSION_KEY);
}
