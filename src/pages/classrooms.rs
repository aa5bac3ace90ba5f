//! Classrooms page — the full course list.

use leptos::prelude::*;

use crate::components::app_header::AppHeader;
use crate::components::classroom_card::ClassroomCard;

/// Classroom list page. Same data as the dashboard grid, without the
/// overview framing.
#[component]
pub fn ClassroomsPage() -> impl IntoView {
    let classrooms = LocalResource::new(|| crate::net::api::fetch_classrooms());

    view! {
        <div class="classrooms-page">
            <AppHeader/>
            <main class="classrooms-page__content">
                <h1>"Classrooms"</h1>
                <Suspense fallback=move || view! { <p>"Loading classrooms..."</p> }>
                    {move || {
                        classrooms
                            .get()
                            .map(|list| {
                                let list = list.unwrap_or_default();
                                view! {
                                    <div class="classrooms-page__cards">
                                        {list
                                            .into_iter()
                                            .map(|c| {
                                                view! {
                                                    <ClassroomCard id=c.id name=c.name section=c.section/>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                            })
                    }}
                </Suspense>
            </main>
        </div>
    }
}
