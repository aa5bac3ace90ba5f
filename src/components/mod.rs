//! Reusable UI components.

pub mod app_header;
pub mod classroom_card;
