//! Route table and navigation guard.
//!
//! The table is plain data so the guard decision stays a pure function:
//! the [`RouteGuard`] component just replays that decision whenever the
//! location or auth state changes.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;

/// One row of the route table. Patterns use `:name` for parameter segments.
pub struct RouteEntry {
    pub path: &'static str,
    pub requires_auth: bool,
}

/// Every navigable route in the application.
pub const ROUTES: &[RouteEntry] = &[
    RouteEntry { path: "/", requires_auth: false },
    RouteEntry { path: "/login", requires_auth: false },
    RouteEntry { path: "/dashboard", requires_auth: true },
    RouteEntry { path: "/classrooms", requires_auth: true },
    RouteEntry { path: "/classrooms/:id", requires_auth: true },
    RouteEntry { path: "/assignments/:id", requires_auth: true },
    RouteEntry { path: "/grading/:assignment_id", requires_auth: true },
    RouteEntry { path: "/auth/callback", requires_auth: false },
];

/// Whether a concrete path hits a route that requires authentication.
/// Unknown paths fall through to the not-found view and never require auth.
pub fn requires_auth(path: &str) -> bool {
    ROUTES
        .iter()
        .any(|entry| entry.requires_auth && matches(entry.path, path))
}

/// What the guard does with a navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    ToLogin,
    ToDashboard,
}

/// Decide a navigation against the current auth state:
///
/// - a protected target without a signed-in user redirects to `/login`;
/// - `/login` with a signed-in user redirects to `/dashboard`;
/// - everything else proceeds unmodified.
///
/// While the initial session resolution is still in flight the guard
/// defers; it re-runs once `loading` clears.
pub fn decide(path: &str, auth: &AuthState) -> GuardDecision {
    if auth.loading {
        return GuardDecision::Proceed;
    }
    if requires_auth(path) && auth.user.is_none() {
        return GuardDecision::ToLogin;
    }
    if matches("/login", path) && auth.user.is_some() {
        return GuardDecision::ToDashboard;
    }
    GuardDecision::Proceed
}

/// Segment-wise pattern match; `:name` segments match any non-empty
/// segment. A single trailing slash on the path is ignored.
fn matches(pattern: &str, path: &str) -> bool {
    let path = if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    };
    let mut pattern_segments = pattern.split('/');
    let mut path_segments = path.split('/');
    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return true,
            (Some(p), Some(s)) => {
                if p.starts_with(':') {
                    if s.is_empty() {
                        return false;
                    }
                } else if p != s {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

/// Reactive navigation guard. Mounted once inside the router; renders
/// nothing.
#[component]
pub fn RouteGuard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let path = location.pathname.get();
        match decide(&path, &auth.get()) {
            GuardDecision::Proceed => {}
            GuardDecision::ToLogin => navigate("/login", NavigateOptions::default()),
            GuardDecision::ToDashboard => navigate("/dashboard", NavigateOptions::default()),
        }
    });
}

