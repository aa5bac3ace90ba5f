//! Authentication state and the store operations that mutate it.
//!
//! Every operation is a thin delegation to `net::auth`; the store's job is
//! keeping the one reactive cell in sync with the provider.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::auth as provider;
use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
///
/// `loading` starts `true` and clears exactly once, after the initial
/// session resolution; the navigation guard defers until then.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Resolve the persisted session once at startup and populate the signal.
/// Failures are logged and swallowed; `loading` clears either way.
pub async fn initialize(auth: RwSignal<AuthState>) {
    let user = provider::current_user().await;
    if user.is_none() {
        leptos::logging::log!("auth: no active session");
    }
    auth.update(|state| {
        state.user = user;
        state.loading = false;
    });
}

/// Start the Google OAuth redirect.
///
/// # Errors
///
/// Propagates the provider error so the login page can surface it.
pub async fn sign_in_with_google() -> Result<(), String> {
    provider::sign_in_with_oauth().await
}

/// Sign out at the provider and clear the current user.
pub async fn sign_out(auth: RwSignal<AuthState>) {
    provider::sign_out().await;
    auth.update(|state| state.user = None);
}

/// Keep the signal in sync with sessions written or cleared by other tabs.
pub fn subscribe(auth: RwSignal<AuthState>) {
    provider::on_session_change(move |changed| {
        match changed {
            // A sibling tab signed in; resolve the user behind the new session.
            Some(_) => leptos::task::spawn_local(async move {
                let user = provider::current_user().await;
                auth.update(|state| state.user = user);
            }),
            None => auth.update(|state| state.user = None),
        }
    });
}
