//! Classroom detail page — course info plus its assignment list.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use uuid::Uuid;

use crate::components::app_header::AppHeader;

/// Classroom detail page. Reads the classroom ID from the route parameter
/// and refetches when it changes.
#[component]
pub fn ClassroomDetailPage() -> impl IntoView {
    let params = use_params_map();

    let classroom = LocalResource::new(move || {
        let id = params.read().get("id");
        async move {
            let id = id?.parse::<Uuid>().ok()?;
            crate::net::api::fetch_classroom(id).await
        }
    });

    let assignments = LocalResource::new(move || {
        let id = params.read().get("id");
        async move {
            let id = id?.parse::<Uuid>().ok()?;
            crate::net::api::fetch_assignments(id).await
        }
    });

    view! {
        <div class="classroom-detail-page">
            <AppHeader/>
            <main class="classroom-detail-page__content">
                <a href="/classrooms" class="classroom-detail-page__back">
                    "\u{2190} All classrooms"
                </a>
                <Suspense fallback=move || view! { <p>"Loading classroom..."</p> }>
                    {move || {
                        classroom
                            .get()
                            .map(|found| match found {
                                Some(c) => {
                                    view! {
                                        <header>
                                            <h1>{c.name}</h1>
                                            <p class="classroom-detail-page__section">
                                                {c.section.unwrap_or_default()}
                                            </p>
                                            <p>{c.description.unwrap_or_default()}</p>
                                        </header>
                                    }
                                        .into_any()
                                }
                                None => view! { <p>"Classroom not found."</p> }.into_any(),
                            })
                    }}
                </Suspense>
                <h2>"Assignments"</h2>
                <Suspense fallback=move || view! { <p>"Loading assignments..."</p> }>
                    {move || {
                        assignments
                            .get()
                            .map(|list| {
                                let list = list.unwrap_or_default();
                                view! {
                                    <ul class="classroom-detail-page__assignments">
                                        {list
                                            .into_iter()
                                            .map(|a| {
                                                let href = format!("/assignments/{}", a.id);
                                                view! {
                                                    <li>
                                                        <a href=href>{a.title}</a>
                                                        <span class="assignment__points">
                                                            {format!("{} pts", a.max_points)}
                                                        </span>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                            })
                    }}
                </Suspense>
            </main>
        </div>
    }
}
