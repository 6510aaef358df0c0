//! Routed pages.

pub mod blogs;
pub mod categories;
pub mod dashboard;
pub mod login;
pub mod signup;
pub mod users;
