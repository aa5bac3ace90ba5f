use super::*;

// =============================================================
// Authorize URL
// =============================================================

#[test]
fn authorize_url_targets_google_provider() {
    let url = authorize_url("https://app.example.com");
    assert!(url.starts_with(&format!("{SUPABASE_URL}/auth/v1/authorize?provider=google")));
}

#[test]
fn authorize_url_encodes_redirect_target() {
    let url = authorize_url("https://app.example.com");
    assert!(url.contains("redirect_to=https%3A%2F%2Fapp.example.com%2Fauth%2Fcallback"));
}

#[test]
fn authorize_url_requests_classroom_scopes() {
    let url = authorize_url("http://localhost:3000");
    assert!(url.contains("classroom.courses.readonly"));
    assert!(url.contains("classroom.coursework.students"));
    // Scopes are space-separated, and the space must be escaped.
    assert!(url.contains("readonly%20https"));
}

// =============================================================
// Provider user mapping
// =============================================================

#[test]
fn user_from_provider_reads_metadata() {
    let value = serde_json::json!({
        "id": "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
        "email": "teacher@example.com",
        "user_metadata": {
            "full_name": "Pat Teacher",
            "avatar_url": "https://lh3.example.com/p.png"
        }
    });
    let user = user_from_provider(&value).expect("user");
    assert_eq!(user.email, "teacher@example.com");
    assert_eq!(user.name, "Pat Teacher");
    assert_eq!(user.picture, "https://lh3.example.com/p.png");
}

#[test]
fn user_from_provider_defaults_missing_metadata() {
    let value = serde_json::json!({
        "id": "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
        "email": "teacher@example.com"
    });
    let user = user_from_provider(&value).expect("user");
    assert_eq!(user.name, "");
    assert_eq!(user.picture, "");
}

#[test]
fn user_from_provider_rejects_malformed_id() {
    let value = serde_json::json!({ "id": "not-a-uuid", "email": "x@y.z" });
    assert!(user_from_provider(&value).is_none());
}

#[test]
fn user_from_provider_rejects_missing_email() {
    let value = serde_json::json!({ "id": "6ba7b810-9dad-11d1-80b4-00c04fd430c8" });
    assert!(user_from_provider(&value).is_none());
}

// =============================================================
// Callback completion
// =============================================================

#[test]
fn complete_callback_propagates_provider_error() {
    let err = futures::executor::block_on(complete_callback(
        "#error=access_denied&error_description=User+denied+access",
    ))
    .expect_err("error");
    assert_eq!(err, "User denied access");
}

#[test]
fn complete_callback_without_profile_fails_signed_out() {
    // Off-browser there is no profile endpoint behind the token, so the
    // callback must fail closed: an error for the caller and no session
    // left behind, never a half-signed-in state.
    let err = futures::executor::block_on(complete_callback("#access_token=a&refresh_token=r"))
        .expect_err("error");
    assert!(err.contains("profile"));
    assert!(crate::net::session::load().is_none());
}
