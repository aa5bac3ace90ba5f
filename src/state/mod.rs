//! Shared client-side state.
//!
//! A single domain lives here: authentication. The signal is provided via
//! context from the root component so pages and the navigation guard read
//! the same cell.

pub mod auth;
