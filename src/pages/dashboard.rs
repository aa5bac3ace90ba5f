//! Dashboard page — classroom overview for the signed-in teacher.

use leptos::prelude::*;

use crate::components::app_header::AppHeader;
use crate::components::classroom_card::ClassroomCard;

/// Dashboard page showing the teacher's classrooms. Access is gated by the
/// router-level guard.
#[component]
pub fn DashboardPage() -> impl IntoView {
    // Classroom list resource — fetches on mount.
    let classrooms = LocalResource::new(|| crate::net::api::fetch_classrooms());

    view! {
        <div class="dashboard-page">
            <AppHeader/>
            <main class="dashboard-page__content">
                <h1>"Your classrooms"</h1>
                <Suspense fallback=move || view! { <p>"Loading classrooms..."</p> }>
                    {move || {
                        classrooms
                            .get()
                            .map(|list| match list {
                                Some(list) if !list.is_empty() => {
                                    view! {
                                        <div class="dashboard-page__cards">
                                            {list
                                                .into_iter()
                                                .map(|c| {
                                                    view! {
                                                        <ClassroomCard
                                                            id=c.id
                                                            name=c.name
                                                            section=c.section
                                                        />
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                                Some(_) => {
                                    view! {
                                        <p class="dashboard-page__empty">
                                            "No classrooms yet. Courses appear here once they are synced from Google Classroom."
                                        </p>
                                    }
                                        .into_any()
                                }
                                None => {
                                    view! {
                                        <p class="dashboard-page__error">
                                            "Could not load classrooms."
                                        </p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </main>
        </div>
    }
}
