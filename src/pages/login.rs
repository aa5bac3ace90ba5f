//! Login page with Google OAuth redirect button.

use leptos::prelude::*;

use crate::state::auth;

/// Login page — clicking the button starts the Google OAuth redirect with
/// the Classroom scopes. Provider errors are surfaced inline.
#[component]
pub fn LoginPage() -> impl IntoView {
    let error = RwSignal::new(None::<String>);

    let on_sign_in = move |_| {
        leptos::task::spawn_local(async move {
            if let Err(message) = auth::sign_in_with_google().await {
                leptos::logging::warn!("sign-in failed: {message}");
                error.set(Some(message));
            }
        });
    };

    view! {
        <div class="login-page">
            <h1>"ClassGrade"</h1>
            <p>"Sign in with your school Google account to start grading."</p>
            <button class="login-button" on:click=on_sign_in>
                "Sign in with Google"
            </button>
            <Show when=move || error.get().is_some()>
                <p class="login-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
