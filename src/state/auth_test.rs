use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
}

#[test]
fn auth_state_default_is_loading() {
    // Loading starts true so the guard defers until the stored session
    // has been resolved once.
    let state = AuthState::default();
    assert!(state.loading);
}
