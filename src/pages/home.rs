//! Public landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Landing page — points signed-in users at the dashboard and everyone
/// else at the login page.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let signed_in = move || auth.get().user.is_some();

    view! {
        <div class="home-page">
            <h1>"ClassGrade"</h1>
            <p>"Rubric-based grading for Google Classroom courses."</p>
            <Show
                when=signed_in
                fallback=|| {
                    view! {
                        <a href="/login" class="btn btn--primary">
                            "Get started"
                        </a>
                    }
                }
            >
                <a href="/dashboard" class="btn btn--primary">
                    "Go to dashboard"
                </a>
            </Show>
        </div>
    }
}
