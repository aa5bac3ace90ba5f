//! REST API helpers for the grading backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the session
//! access token as a bearer header. Server-side (SSR): stubs returning
//! `None`/error since these endpoints are only meaningful in the browser.
//!
//! Callers get `Option`/`Result` outputs instead of panics so fetch
//! failures degrade page content without crashing hydration.

#![allow(clippy::unused_async)]

use uuid::Uuid;

use super::types::{Assignment, Classroom, Grade, GradingCriterion, NewGrade};

/// Issue an authenticated GET and decode the JSON body.
/// Returns `None` when signed out, on HTTP failure, or on the server.
#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Option<T> {
    let active = crate::net::auth::current_session().await?;
    let resp = gloo_net::http::Request::get(path)
        .header("Authorization", &format!("Bearer {}", active.access_token))
        .send()
        .await
        .ok()?;
    if !resp.ok() {
        return None;
    }
    resp.json::<T>().await.ok()
}

/// Fetch all classrooms visible to the signed-in teacher.
pub async fn fetch_classrooms() -> Option<Vec<Classroom>> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/classrooms/").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch a single classroom by id.
pub async fn fetch_classroom(classroom_id: Uuid) -> Option<Classroom> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&format!("/api/classrooms/{classroom_id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = classroom_id;
        None
    }
}

/// Fetch the assignments of a classroom.
pub async fn fetch_assignments(classroom_id: Uuid) -> Option<Vec<Assignment>> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&format!("/api/assignments/classroom/{classroom_id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = classroom_id;
        None
    }
}

/// Fetch a single assignment by id.
pub async fn fetch_assignment(assignment_id: Uuid) -> Option<Assignment> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&format!("/api/assignments/{assignment_id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = assignment_id;
        None
    }
}

/// Fetch the grading rubric of an assignment, ordered by `order_index`.
pub async fn fetch_grading_criteria(assignment_id: Uuid) -> Option<Vec<GradingCriterion>> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&format!("/api/grading/criteria/assignment/{assignment_id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = assignment_id;
        None
    }
}

/// Record a grade for a submission via `POST /api/grading/grades`.
///
/// # Errors
///
/// Returns an error string if the caller is signed out or the request fails.
pub async fn create_grade(grade: &NewGrade) -> Result<Grade, String> {
    #[cfg(feature = "hydrate")]
    {
        let active = crate::net::auth::current_session()
            .await
            .ok_or("not signed in")?;
        let resp = gloo_net::http::Request::post("/api/grading/grades")
            .header("Authorization", &format!("Bearer {}", active.access_token))
            .json(grade)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("grade submission failed: {}", resp.status()));
        }
        resp.json::<Grade>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = grade;
        Err("not available on server".to_owned())
    }
}
