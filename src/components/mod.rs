//! Reusable UI components shared by the dashboard pages.

pub mod blog_form;
pub mod category_form;
pub mod listing_form;
pub mod navbar;
pub mod notice;
pub mod pager_controls;
pub mod record_card;
pub mod sidebar;
