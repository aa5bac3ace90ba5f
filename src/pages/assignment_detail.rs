//! Assignment detail page.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use uuid::Uuid;

use crate::components::app_header::AppHeader;

/// Assignment detail page — title, description, points, due date, and a
/// link into the grading view.
#[component]
pub fn AssignmentDetailPage() -> impl IntoView {
    let params = use_params_map();

    let assignment = LocalResource::new(move || {
        let id = params.read().get("id");
        async move {
            let id = id?.parse::<Uuid>().ok()?;
            crate::net::api::fetch_assignment(id).await
        }
    });

    view! {
        <div class="assignment-page">
            <AppHeader/>
            <main class="assignment-page__content">
                <Suspense fallback=move || view! { <p>"Loading assignment..."</p> }>
                    {move || {
                        assignment
                            .get()
                            .map(|found| match found {
                                Some(a) => {
                                    let grading_href = format!("/grading/{}", a.id);
                                    let back_href = format!("/classrooms/{}", a.classroom_id);
                                    view! {
                                        <a href=back_href class="assignment-page__back">
                                            "\u{2190} Back to classroom"
                                        </a>
                                        <h1>{a.title}</h1>
                                        <p>{a.description.unwrap_or_default()}</p>
                                        <dl class="assignment-page__facts">
                                            <dt>"Max points"</dt>
                                            <dd>{a.max_points.to_string()}</dd>
                                            <dt>"Due"</dt>
                                            <dd>{a.due_date.unwrap_or_else(|| "No due date".to_owned())}</dd>
                                        </dl>
                                        <a href=grading_href class="btn btn--primary">
                                            "Open grading"
                                        </a>
                                    }
                                        .into_any()
                                }
                                None => view! { <p>"Assignment not found."</p> }.into_any(),
                            })
                    }}
                </Suspense>
            </main>
        </div>
    }
}
