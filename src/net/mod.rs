//! Backend REST access: client, wire types, multipart forms, and errors.

pub mod api;
pub mod error;
pub mod form;
pub mod types;
