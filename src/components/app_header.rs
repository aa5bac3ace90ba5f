//! Top bar shown on authenticated pages: brand link, current user, sign-out.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Application header with the signed-in user's name and a sign-out button.
#[component]
pub fn AppHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let user_name = move || {
        auth.get().user.map_or_else(String::new, |u| {
            if u.name.is_empty() { u.email } else { u.name }
        })
    };

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::state::auth::sign_out(auth).await;
                // Navigate via window.location for a clean state.
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/login");
                }
            });
        }
    };

    view! {
        <header class="app-header">
            <a href="/dashboard" class="app-header__brand">
                "ClassGrade"
            </a>
            <span class="app-header__spacer"></span>
            <span class="app-header__user">{user_name}</span>
            <button class="btn app-header__sign-out" on:click=on_sign_out>
                "Sign out"
            </button>
        </header>
    }
}
