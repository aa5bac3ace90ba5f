//! Session persistence and OAuth callback parsing.
//!
//! The provider session lives in `localStorage` under a fixed key so it
//! survives reloads and is visible to other tabs (the `storage` event is
//! what drives cross-tab auth-change notifications). Parsing and expiry
//! logic are plain functions so they stay testable off-browser.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Session;

#[cfg(feature = "hydrate")]
pub const STORAGE_KEY: &str = "classgrade_session";

/// Refresh this many seconds before the recorded expiry to avoid using a
/// token that dies mid-request.
const EXPIRY_MARGIN_SECS: i64 = 60;

/// Tokens extracted from the OAuth redirect fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallbackTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: Option<i64>,
}

/// Parse the URL fragment the provider appends after an OAuth redirect,
/// e.g. `#access_token=…&expires_in=3600&refresh_token=…&token_type=bearer`.
///
/// # Errors
///
/// Returns the provider's `error_description` (or `error` code) when the
/// redirect reports a failure, or a generic message when the expected
/// tokens are missing.
pub fn parse_fragment(fragment: &str) -> Result<CallbackTokens, String> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);

    let mut access_token = None;
    let mut refresh_token = None;
    let mut expires_in = None;
    let mut error = None;
    let mut error_description = None;

    for pair in fragment.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        match key {
            "access_token" => access_token = Some(value.to_owned()),
            "refresh_token" => refresh_token = Some(value.to_owned()),
            "expires_in" => expires_in = value.parse::<i64>().ok(),
            "error" => error = Some(value.to_owned()),
            "error_description" => error_description = Some(decode_component(value)),
            _ => {}
        }
    }

    if let Some(description) = error_description {
        return Err(description);
    }
    if let Some(code) = error {
        return Err(code);
    }
    match (access_token, refresh_token) {
        (Some(access_token), Some(refresh_token)) => Ok(CallbackTokens {
            access_token,
            refresh_token,
            expires_in,
        }),
        _ => Err("callback fragment missing tokens".to_owned()),
    }
}

/// Whether a session should be refreshed, with a safety margin. A session
/// without a recorded expiry is treated as still valid.
pub fn is_expired(expires_at: Option<i64>, now_secs: i64) -> bool {
    expires_at.is_some_and(|at| at - EXPIRY_MARGIN_SECS <= now_secs)
}

/// Percent-decode a provider error description. `+` is treated as a space
/// (the form-encoding the provider uses in redirect fragments); text that
/// does not decode to valid UTF-8 passes through raw.
fn decode_component(value: &str) -> String {
    let spaced = value.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(std::borrow::Cow::into_owned)
        .unwrap_or(spaced)
}

/// Current Unix time in seconds. Zero on the server, where sessions are
/// never resolved anyway.
pub fn now_secs() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let secs = (js_sys::Date::now() / 1000.0) as i64;
        secs
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

/// Load the persisted session from localStorage, if any.
pub fn load() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let raw = storage.get_item(STORAGE_KEY).ok()??;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the session to localStorage.
pub fn store(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        if let Ok(json) = serde_json::to_string(session) {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(STORAGE_KEY, &json);
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Remove the persisted session.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
