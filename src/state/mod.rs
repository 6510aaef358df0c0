//! Shared client-side state.
//!
//! DESIGN
//! ======
//! `session` is the single source of truth for authentication; `records`
//! holds the per-page collection models the CRUD screens render from.

pub mod records;
pub mod session;
