//! Paginated collection state shared by the CRUD pages.
//!
//! DESIGN
//! ======
//! Each page owns one `CollectionState` in an `RwSignal`. Fetch results,
//! local deletes, and pager movement all go through these methods so the
//! pager never points past the end of the collection.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use crate::net::error::ApiError;
use crate::net::types::Record;
use crate::util::pagination::Pager;

#[derive(Clone, Debug, PartialEq)]
pub struct CollectionState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub pager: Pager,
}

impl<T: Record + Clone> CollectionState<T> {
    /// Empty collection that starts in the loading state.
    #[must_use]
    pub fn new(per_page: usize) -> Self {
        Self { items: Vec::new(), loading: true, error: None, pager: Pager::new(per_page) }
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Store a fetch result. Failures keep the previous items visible.
    pub fn finish_load(&mut self, result: Result<Vec<T>, ApiError>, error_prefix: Option<&str>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
                self.pager.clamp(self.items.len());
            }
            Err(e) => {
                self.error = Some(match error_prefix {
                    Some(prefix) => format!("{prefix}: {e}"),
                    None => e.to_string(),
                });
            }
        }
    }

    /// Drop the record with `key` after a successful delete.
    pub fn remove(&mut self, key: &str) -> Option<T> {
        let index = self.items.iter().position(|item| item.key() == Some(key))?;
        let removed = self.items.remove(index);
        self.pager.clamp(self.items.len());
        Some(removed)
    }

    pub fn find(&self, key: &str) -> Option<&T> {
        self.items.iter().find(|item| item.key() == Some(key))
    }

    /// Items on the current page.
    #[must_use]
    pub fn page_items(&self) -> Vec<T> {
        self.pager.slice(&self.items).to_vec()
    }

    #[must_use]
    pub fn show_pager(&self) -> bool {
        !self.loading && self.error.is_none() && self.pager.is_paginated(self.items.len())
    }

    pub fn next_page(&mut self) {
        self.pager.next(self.items.len());
    }

    pub fn previous_page(&mut self) {
        self.pager.previous();
    }
}

pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete. Please try again.";

/// Record kinds with a delete action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Category,
    Listing,
    Blog,
}

impl RecordKind {
    fn deleted_message(self) -> &'static str {
        match self {
            Self::Category => "Category deleted successfully.",
            Self::Listing => "Listing deleted successfully.",
            Self::Blog => "Blog deleted successfully.",
        }
    }
}

/// Notice shown after a delete attempt.
pub fn delete_notice(kind: RecordKind, result: &Result<(), ApiError>) -> &'static str {
    match result {
        Ok(()) => kind.deleted_message(),
        Err(_) => DELETE_FAILED_MESSAGE,
    }
}

/// Text for the delete confirmation prompt.
pub fn confirm_delete_message(label: &str) -> String {
    format!("Are you sure you want to delete \"{label}\"?")
}
