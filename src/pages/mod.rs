//! One page component per route.

pub mod assignment_detail;
pub mod auth_callback;
pub mod classroom_detail;
pub mod classrooms;
pub mod dashboard;
pub mod grading;
pub mod home;
pub mod login;
