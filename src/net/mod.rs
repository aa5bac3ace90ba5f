//! Network layer: identity-provider client, session persistence, and
//! REST helpers for the grading backend.

pub mod api;
pub mod auth;
pub mod session;
pub mod types;
