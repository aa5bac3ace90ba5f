//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    assignment_detail::AssignmentDetailPage, auth_callback::AuthCallbackPage,
    classroom_detail::ClassroomDetailPage, classrooms::ClassroomsPage, dashboard::DashboardPage,
    grading::GradingPage, home::HomePage, login::LoginPage,
};
use crate::routes::RouteGuard;
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth context, kicks off the one-time session resolution,
/// and sets up client-side routing with the navigation guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth_state = RwSignal::new(AuthState::default());
    provide_context(auth_state);

    // Resolve the stored session once and follow provider change events.
    // On the server, loading stays true and the guard defers.
    #[cfg(feature = "hydrate")]
    {
        crate::state::auth::subscribe(auth_state);
        leptos::task::spawn_local(crate::state::auth::initialize(auth_state));
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/classgrade.css"/>
        <Title text="ClassGrade"/>

        <Router>
            <RouteGuard/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("classrooms") view=ClassroomsPage/>
                <Route
                    path=(StaticSegment("classrooms"), ParamSegment("id"))
                    view=ClassroomDetailPage
                />
                <Route
                    path=(StaticSegment("assignments"), ParamSegment("id"))
                    view=AssignmentDetailPage
                />
                <Route
                    path=(StaticSegment("grading"), ParamSegment("assignment_id"))
                    view=GradingPage
                />
                <Route
                    path=(StaticSegment("auth"), StaticSegment("callback"))
                    view=AuthCallbackPage
                />
            </Routes>
        </Router>
    }
}
