//! Multipart form payloads for record mutations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Create/edit forms collect their inputs into a draft, validate it locally,
//! and turn it into a `MultipartForm`. The API client converts that into a
//! browser `FormData` only at send time, so field naming is testable natively.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use super::error::ApiError;

/// An image picked through a file input.
#[derive(Clone, Debug)]
pub struct UploadFile {
    pub file_name: String,
    #[cfg(feature = "hydrate")]
    pub(crate) file: web_sys::File,
}

impl UploadFile {
    #[cfg(feature = "hydrate")]
    pub fn from_file(file: web_sys::File) -> Self {
        Self { file_name: file.name(), file }
    }

    #[cfg(all(test, not(feature = "hydrate")))]
    pub(crate) fn named(file_name: &str) -> Self {
        Self { file_name: file_name.to_owned() }
    }
}

#[derive(Clone, Debug)]
pub enum FormValue {
    Text(String),
    File(UploadFile),
}

/// Ordered multipart fields.
#[derive(Clone, Debug, Default)]
pub struct MultipartForm {
    pub fields: Vec<(&'static str, FormValue)>,
}

impl MultipartForm {
    #[must_use]
    pub fn text(mut self, name: &'static str, value: &str) -> Self {
        self.fields.push((name, FormValue::Text(value.to_owned())));
        self
    }

    /// Append a text field only when it has content.
    #[must_use]
    pub fn text_if_present(self, name: &'static str, value: &str) -> Self {
        if value.trim().is_empty() { self } else { self.text(name, value) }
    }

    #[must_use]
    pub fn file(mut self, name: &'static str, file: Option<UploadFile>) -> Self {
        if let Some(file) = file {
            self.fields.push((name, FormValue::File(file)));
        }
        self
    }

    /// Field names in insertion order.
    pub fn names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(name, _)| *name).collect()
    }

    /// Text value of the first field called `name`.
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.fields.iter().find_map(|(n, v)| match v {
            FormValue::Text(t) if *n == name => Some(t.as_str()),
            _ => None,
        })
    }

    #[cfg(feature = "hydrate")]
    pub(crate) fn to_form_data(&self) -> Result<web_sys::FormData, ApiError> {
        let data = web_sys::FormData::new().map_err(|e| ApiError::Request(format!("{e:?}")))?;
        for (name, value) in &self.fields {
            let appended = match value {
                FormValue::Text(text) => data.append_with_str(name, text),
                FormValue::File(upload) => data.append_with_blob_and_filename(name, &upload.file, &upload.file_name),
            };
            appended.map_err(|e| ApiError::Request(format!("{e:?}")))?;
        }
        Ok(data)
    }
}

fn require(value: &str, message: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() { Err(ApiError::validation(message)) } else { Ok(()) }
}

// =============================================================================
// DRAFTS
// =============================================================================

/// Category create/edit form contents.
#[derive(Clone, Debug, Default)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
    pub image: Option<UploadFile>,
}

impl CategoryDraft {
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when the name is blank.
    pub fn into_form(self) -> Result<MultipartForm, ApiError> {
        require(&self.name, "Category name is required")?;
        Ok(MultipartForm::default()
            .text("name", self.name.trim())
            .text("description", &self.description)
            .file("image", self.image))
    }
}

/// Listing create form contents.
#[derive(Clone, Debug, Default)]
pub struct ListingDraft {
    pub name: String,
    pub description: String,
    pub location: String,
    pub referral_link: String,
    pub image: Option<UploadFile>,
}

impl ListingDraft {
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when the name is blank.
    pub fn into_form(self) -> Result<MultipartForm, ApiError> {
        require(&self.name, "Name is required")?;
        Ok(MultipartForm::default()
            .text("name", self.name.trim())
            .text("description", &self.description)
            .text("location", &self.location)
            .text("referralLink", &self.referral_link)
            .file("images", self.image))
    }
}

/// Blog create form contents.
#[derive(Clone, Debug, Default)]
pub struct BlogDraft {
    pub title: String,
    pub description: String,
    pub tag: String,
    pub date: String,
    pub image: Option<UploadFile>,
}

impl BlogDraft {
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when the title is blank.
    pub fn into_form(self) -> Result<MultipartForm, ApiError> {
        require(&self.title, "Title is required")?;
        Ok(MultipartForm::default()
            .text("title", self.title.trim())
            .text("description", &self.description)
            .file("image", self.image)
            .text_if_present("tag", &self.tag)
            .text_if_present("date", &self.date))
    }
}
