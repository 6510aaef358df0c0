//! Browser glue and small view-independent helpers.

pub mod auth;
pub mod browser;
pub mod pagination;
pub mod storage;
