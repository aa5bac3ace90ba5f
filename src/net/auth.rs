//! Identity-provider (Supabase GoTrue) client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` plus browser
//! redirects for the OAuth flow. Server-side (SSR): stubs returning
//! `None`/error since authentication only resolves in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Session resolution yields `Option` so a missing or broken session just
//! renders the signed-out UI. Sign-in returns `Result` because the login
//! page needs the provider's message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::session;
use crate::net::types::{Session, User};

/// Project URL and anon key are baked in at build time, the same way the
/// original deployment injects them through the bundler environment.
pub const SUPABASE_URL: &str = match option_env!("SUPABASE_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:54321",
};

pub const SUPABASE_ANON_KEY: &str = match option_env!("SUPABASE_ANON_KEY") {
    Some(key) => key,
    None => "dev-anon-key",
};

/// Google Classroom read scopes requested at sign-in.
pub const OAUTH_SCOPES: &str = "https://www.googleapis.com/auth/classroom.courses.readonly \
     https://www.googleapis.com/auth/classroom.coursework.students";

/// Build the provider's OAuth authorize URL for a Google sign-in that
/// returns to `{origin}/auth/callback`.
pub fn authorize_url(origin: &str) -> String {
    format!(
        "{SUPABASE_URL}/auth/v1/authorize?provider=google&redirect_to={}&scopes={}",
        urlencoding::encode(&format!("{origin}/auth/callback")),
        urlencoding::encode(OAUTH_SCOPES),
    )
}

/// Map the provider's user payload (`GET /auth/v1/user`) into our [`User`].
/// Display name and picture live in `user_metadata`.
pub fn user_from_provider(value: &serde_json::Value) -> Option<User> {
    let id = value.get("id")?.as_str()?.parse().ok()?;
    let email = value.get("email")?.as_str()?.to_owned();
    let metadata = value.get("user_metadata");
    let meta_str = |key: &str| {
        metadata
            .and_then(|m| m.get(key))
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_owned()
    };
    Some(User {
        id,
        email,
        name: meta_str("full_name"),
        picture: meta_str("avatar_url"),
    })
}

/// Resolve the current session: the persisted one if still valid, otherwise
/// a refreshed one. `None` means signed out (or on the server).
pub async fn current_session() -> Option<Session> {
    let stored = session::load()?;
    if !session::is_expired(stored.expires_at, session::now_secs()) {
        return Some(stored);
    }
    let refreshed = refresh_session(&stored.refresh_token).await?;
    session::store(&refreshed);
    Some(refreshed)
}

/// Resolve the currently authenticated user, if any.
pub async fn current_user() -> Option<User> {
    let active = current_session().await?;
    fetch_user(&active.access_token).await
}

/// Start the Google OAuth redirect. The page navigates away on success.
///
/// # Errors
///
/// Returns an error string if the browser navigation cannot be started.
pub async fn sign_in_with_oauth() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or("no window")?;
        let origin = window
            .location()
            .origin()
            .map_err(|_| "origin unavailable".to_owned())?;
        window
            .location()
            .set_href(&authorize_url(&origin))
            .map_err(|_| "navigation failed".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Sign out: best-effort token revocation at the provider, then drop the
/// persisted session unconditionally.
pub async fn sign_out() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(active) = session::load() {
            let _ = gloo_net::http::Request::post(&format!("{SUPABASE_URL}/auth/v1/logout"))
                .header("apikey", SUPABASE_ANON_KEY)
                .header("Authorization", &format!("Bearer {}", active.access_token))
                .send()
                .await;
        }
    }
    session::clear();
}

/// Complete the OAuth flow from the redirect fragment: persist the session
/// and return the signed-in user.
///
/// # Errors
///
/// Returns the provider's error description from the fragment, or a message
/// if the user profile cannot be loaded afterwards. On the profile failure
/// the stored session is dropped again, so the signed-out state the caller
/// shows matches what the next load (and every other tab) sees.
pub async fn complete_callback(fragment: &str) -> Result<User, String> {
    let tokens = session::parse_fragment(fragment)?;
    let fresh = Session {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        expires_at: tokens.expires_in.map(|secs| session::now_secs() + secs),
    };
    session::store(&fresh);
    match fetch_user(&fresh.access_token).await {
        Some(user) => Ok(user),
        None => {
            session::clear();
            Err("signed in, but the user profile could not be loaded".to_owned())
        }
    }
}

/// Subscribe to session changes made by other tabs. The callback receives
/// the new session (`None` when it was cleared). The listener lives for the
/// rest of the page's lifetime.
pub fn on_session_change(callback: impl FnMut(Option<Session>) + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let mut callback = callback;
        let listener = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(
            move |event: web_sys::StorageEvent| {
                if event.key().as_deref() != Some(session::STORAGE_KEY) {
                    return;
                }
                let next = event
                    .new_value()
                    .and_then(|raw| serde_json::from_str(&raw).ok());
                callback(next);
            },
        );
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("storage", listener.as_ref().unchecked_ref());
        }
        listener.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = callback;
    }
}

/// Fetch the user behind an access token via `GET /auth/v1/user`.
/// Returns `None` if the token is rejected or on the server.
async fn fetch_user(access_token: &str) -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&format!("{SUPABASE_URL}/auth/v1/user"))
            .header("apikey", SUPABASE_ANON_KEY)
            .header("Authorization", &format!("Bearer {access_token}"))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let body: serde_json::Value = resp.json().await.ok()?;
        user_from_provider(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = access_token;
        None
    }
}

/// Exchange a refresh token for a new session.
async fn refresh_session(refresh_token: &str) -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct RefreshRequest<'a> {
            refresh_token: &'a str,
        }
        #[derive(serde::Deserialize)]
        struct RefreshResponse {
            access_token: String,
            refresh_token: String,
            expires_in: Option<i64>,
        }

        let resp = gloo_net::http::Request::post(&format!(
            "{SUPABASE_URL}/auth/v1/token?grant_type=refresh_token"
        ))
        .header("apikey", SUPABASE_ANON_KEY)
        .json(&RefreshRequest { refresh_token })
        .ok()?
        .send()
        .await
        .ok()?;
        if !resp.ok() {
            return None;
        }
        let body: RefreshResponse = resp.json().await.ok()?;
        Some(Session {
            access_token: body.access_token,
            refresh_token: body.refresh_token,
            expires_at: body.expires_in.map(|secs| session::now_secs() + secs),
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = refresh_token;
        None
    }
}
