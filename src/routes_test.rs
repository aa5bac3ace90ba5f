use super::*;
use crate::net::types::User;

fn signed_in() -> AuthState {
    AuthState {
        user: Some(User {
            id: uuid::Uuid::new_v4(),
            email: "teacher@example.com".to_owned(),
            name: "Pat Teacher".to_owned(),
            picture: String::new(),
        }),
        loading: false,
    }
}

fn signed_out() -> AuthState {
    AuthState {
        user: None,
        loading: false,
    }
}

// =============================================================
// Route matching
// =============================================================

#[test]
fn requires_auth_static_routes() {
    assert!(requires_auth("/dashboard"));
    assert!(requires_auth("/classrooms"));
    assert!(!requires_auth("/"));
    assert!(!requires_auth("/login"));
    assert!(!requires_auth("/auth/callback"));
}

#[test]
fn requires_auth_param_routes() {
    assert!(requires_auth("/classrooms/3f2b8c1e-0000-4000-8000-000000000001"));
    assert!(requires_auth("/assignments/abc"));
    assert!(requires_auth("/grading/abc"));
}

#[test]
fn requires_auth_ignores_trailing_slash() {
    assert!(requires_auth("/dashboard/"));
    assert!(requires_auth("/classrooms/abc/"));
}

#[test]
fn requires_auth_false_for_unknown_paths() {
    assert!(!requires_auth("/nope"));
    assert!(!requires_auth("/classrooms/a/b"));
}

#[test]
fn param_segment_must_be_non_empty() {
    assert!(!requires_auth("/classrooms//"));
}

// =============================================================
// Guard decisions
// =============================================================

#[test]
fn guard_redirects_signed_out_from_protected_routes() {
    let auth = signed_out();
    assert_eq!(decide("/dashboard", &auth), GuardDecision::ToLogin);
    assert_eq!(decide("/grading/abc", &auth), GuardDecision::ToLogin);
}

#[test]
fn guard_redirects_signed_in_away_from_login() {
    assert_eq!(decide("/login", &signed_in()), GuardDecision::ToDashboard);
}

#[test]
fn guard_lets_signed_in_users_through() {
    let auth = signed_in();
    assert_eq!(decide("/dashboard", &auth), GuardDecision::Proceed);
    assert_eq!(decide("/classrooms/abc", &auth), GuardDecision::Proceed);
}

#[test]
fn guard_lets_signed_out_users_reach_public_routes() {
    let auth = signed_out();
    assert_eq!(decide("/", &auth), GuardDecision::Proceed);
    assert_eq!(decide("/login", &auth), GuardDecision::Proceed);
    assert_eq!(decide("/auth/callback", &auth), GuardDecision::Proceed);
}

#[test]
fn guard_defers_while_session_resolution_in_flight() {
    let auth = AuthState::default();
    assert!(auth.loading);
    assert_eq!(decide("/dashboard", &auth), GuardDecision::Proceed);
    assert_eq!(decide("/login", &auth), GuardDecision::Proceed);
}
