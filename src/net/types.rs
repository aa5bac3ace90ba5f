//! Serde types shared across the net layer.
//!
//! Shapes mirror the backend response models; timestamps stay as ISO-8601
//! strings since the UI only displays them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated user as exposed by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub picture: String,
}

/// Provider-issued session tokens. Opaque to the UI beyond presence/absence
/// and the expiry used to decide when a refresh is needed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    /// Unix timestamp (seconds) when `access_token` expires, if known.
    pub expires_at: Option<i64>,
}

/// A Google Classroom course mirrored into the backend.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Classroom {
    pub id: Uuid,
    pub google_course_id: String,
    pub name: String,
    pub section: Option<String>,
    pub description: Option<String>,
    pub owner_id: Uuid,
    pub created_at: String,
    pub updated_at: String,
}

/// An assignment within a classroom.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Assignment {
    pub id: Uuid,
    pub google_assignment_id: String,
    pub classroom_id: Uuid,
    pub creator_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    pub max_points: f64,
    pub due_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// One rubric row for grading an assignment.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GradingCriterion {
    pub id: Uuid,
    pub assignment_id: Uuid,
    pub created_by: Option<Uuid>,
    pub subtask_name: String,
    pub description: String,
    pub max_points: f64,
    pub order_index: i32,
    pub is_ai_generated: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// A recorded grade for a submission.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Grade {
    pub id: Uuid,
    pub submission_id: Uuid,
    pub graded_by: Option<Uuid>,
    pub total_points: f64,
    pub late_penalty: f64,
    pub final_score: f64,
    pub feedback: Option<String>,
    pub is_ai_generated: bool,
    pub graded_at: String,
    pub updated_at: String,
}

/// Payload for recording a grade.
#[derive(Clone, Debug, Serialize)]
pub struct NewGrade {
    pub submission_id: Uuid,
    pub total_points: f64,
    pub late_penalty: f64,
    pub final_score: f64,
    pub feedback: Option<String>,
    pub is_ai_generated: bool,
}
