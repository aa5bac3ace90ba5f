//! Reusable card component for classroom list items.

use leptos::prelude::*;
use uuid::Uuid;

/// A clickable card representing a classroom in the list views.
#[component]
pub fn ClassroomCard(id: Uuid, name: String, section: Option<String>) -> impl IntoView {
    let href = format!("/classrooms/{id}");

    view! {
        <a class="classroom-card" href=href>
            <span class="classroom-card__name">{name}</span>
            <span class="classroom-card__section">{section.unwrap_or_default()}</span>
        </a>
    }
}
