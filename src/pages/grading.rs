//! Grading page — rubric display and grade entry for one assignment.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use uuid::Uuid;

use crate::components::app_header::AppHeader;
use crate::net::types::NewGrade;

/// Grading page. Shows the assignment's rubric ordered by `order_index`
/// and a small form recording a grade for a submission.
#[component]
pub fn GradingPage() -> impl IntoView {
    let params = use_params_map();

    let assignment = LocalResource::new(move || {
        let id = params.read().get("assignment_id");
        async move {
            let id = id?.parse::<Uuid>().ok()?;
            crate::net::api::fetch_assignment(id).await
        }
    });

    let criteria = LocalResource::new(move || {
        let id = params.read().get("assignment_id");
        async move {
            let id = id?.parse::<Uuid>().ok()?;
            crate::net::api::fetch_grading_criteria(id).await
        }
    });

    view! {
        <div class="grading-page">
            <AppHeader/>
            <main class="grading-page__content">
                <Suspense fallback=move || view! { <p>"Loading assignment..."</p> }>
                    {move || {
                        assignment
                            .get()
                            .map(|found| match found {
                                Some(a) => {
                                    view! {
                                        <h1>{format!("Grading: {}", a.title)}</h1>
                                    }
                                        .into_any()
                                }
                                None => view! { <p>"Assignment not found."</p> }.into_any(),
                            })
                    }}
                </Suspense>

                <h2>"Rubric"</h2>
                <Suspense fallback=move || view! { <p>"Loading rubric..."</p> }>
                    {move || {
                        criteria
                            .get()
                            .map(|list| {
                                let list = list.unwrap_or_default();
                                let total: f64 = list.iter().map(|c| c.max_points).sum();
                                view! {
                                    <table class="grading-page__rubric">
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|c| {
                                                    view! {
                                                        <tr>
                                                            <td>{c.subtask_name}</td>
                                                            <td>{c.description}</td>
                                                            <td>{format!("{} pts", c.max_points)}</td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                        <tfoot>
                                            <tr>
                                                <td colspan="2">"Total"</td>
                                                <td>{format!("{total} pts")}</td>
                                            </tr>
                                        </tfoot>
                                    </table>
                                }
                            })
                    }}
                </Suspense>

                <GradeForm/>
            </main>
        </div>
    }
}

/// Form recording a grade for one submission.
#[component]
fn GradeForm() -> impl IntoView {
    let submission_id = RwSignal::new(String::new());
    let total_points = RwSignal::new(String::new());
    let late_penalty = RwSignal::new(String::new());
    let feedback = RwSignal::new(String::new());
    let status = RwSignal::new(None::<String>);

    let submit = Callback::new(move |()| {
        let Ok(submission) = submission_id.get().trim().parse::<Uuid>() else {
            status.set(Some("Enter a valid submission ID.".to_owned()));
            return;
        };
        let Ok(points) = total_points.get().trim().parse::<f64>() else {
            status.set(Some("Enter the points awarded.".to_owned()));
            return;
        };
        let penalty = late_penalty.get().trim().parse::<f64>().unwrap_or(0.0);

        let grade = NewGrade {
            submission_id: submission,
            total_points: points,
            late_penalty: penalty,
            final_score: points - penalty,
            feedback: {
                let text = feedback.get().trim().to_owned();
                if text.is_empty() { None } else { Some(text) }
            },
            is_ai_generated: false,
        };

        leptos::task::spawn_local(async move {
            match crate::net::api::create_grade(&grade).await {
                Ok(saved) => {
                    status.set(Some(format!("Saved grade: {} pts", saved.final_score)));
                }
                Err(message) => {
                    leptos::logging::warn!("grade submission failed: {message}");
                    status.set(Some(message));
                }
            }
        });
    });

    view! {
        <section class="grade-form">
            <h2>"Record a grade"</h2>
            <label class="grade-form__label">
                "Submission ID"
                <input
                    type="text"
                    prop:value=move || submission_id.get()
                    on:input=move |ev| submission_id.set(event_target_value(&ev))
                />
            </label>
            <label class="grade-form__label">
                "Points"
                <input
                    type="text"
                    prop:value=move || total_points.get()
                    on:input=move |ev| total_points.set(event_target_value(&ev))
                />
            </label>
            <label class="grade-form__label">
                "Late penalty"
                <input
                    type="text"
                    prop:value=move || late_penalty.get()
                    on:input=move |ev| late_penalty.set(event_target_value(&ev))
                />
            </label>
            <label class="grade-form__label">
                "Feedback"
                <textarea
                    prop:value=move || feedback.get()
                    on:input=move |ev| feedback.set(event_target_value(&ev))
                ></textarea>
            </label>
            <div class="grade-form__actions">
                <button class="btn btn--primary" on:click=move |_| submit.run(())>
                    "Save grade"
                </button>
            </div>
            <Show when=move || status.get().is_some()>
                <p class="grade-form__status">{move || status.get().unwrap_or_default()}</p>
            </Show>
        </section>
    }
}
