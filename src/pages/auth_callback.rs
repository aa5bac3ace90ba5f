//! OAuth callback page — completes the sign-in the provider redirected
//! back to us with.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Callback page. Reads the token fragment left by the provider, persists
/// the session, updates the auth signal, and moves on to the dashboard.
/// Stays on screen with a message if the provider reported an error.
#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let navigate = use_navigate();
        leptos::task::spawn_local(async move {
            let fragment = web_sys::window()
                .and_then(|w| w.location().hash().ok())
                .unwrap_or_default();
            match crate::net::auth::complete_callback(&fragment).await {
                Ok(user) => {
                    auth.update(|state| {
                        state.user = Some(user);
                        state.loading = false;
                    });
                    navigate("/dashboard", NavigateOptions::default());
                }
                Err(message) => {
                    leptos::logging::warn!("OAuth callback failed: {message}");
                    error.set(Some(message));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }

    view! {
        <div class="auth-callback-page">
            <Show
                when=move || error.get().is_some()
                fallback=|| view! { <p>"Completing sign-in..."</p> }
            >
                <p class="auth-callback-page__error">
                    {move || error.get().unwrap_or_default()}
                </p>
                <a href="/login">"Back to login"</a>
            </Show>
        </div>
    }
}
