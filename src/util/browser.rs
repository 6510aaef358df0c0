//! Browser dialog and file-input glue.
//!
//! Requires a browser environment; SSR and native builds get inert fallbacks
//! (no confirmation, no picked file) so callers need no cfg branches.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use leptos::prelude::*;

use crate::net::form::UploadFile;

/// Ask the user to confirm a destructive action.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// First file chosen in a file input, if any.
pub fn picked_file(input: NodeRef<leptos::html::Input>) -> Option<UploadFile> {
    #[cfg(feature = "hydrate")]
    {
        let element = input.get_untracked()?;
        let file = element.files()?.get(0)?;
        Some(UploadFile::from_file(file))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        None
    }
}
