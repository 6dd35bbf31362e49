//! Form payloads and validation
//!
//! Declarative ruleset for the album data form (trim, required, length
//! bound) and the delete-confirmation form. Validation runs against the
//! submitted body before any entity is constructed from it; failures are
//! ordinary control flow that re-renders the form, never an error path.

use serde::Deserialize;

use crate::domain::MAX_FIELD_CHARS;

const REQUIRED_MSG: &str = "Value is required and can't be empty";
const LENGTH_MSG: &str = "Value must be between 1 and 100 characters long";

/// Raw create/update form body as submitted by the browser
#[derive(Debug, Default, Deserialize)]
pub struct AlbumFormData {
    pub artist: Option<String>,
    pub title: Option<String>,
}

/// Submitted values that passed the ruleset, trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedAlbumInput {
    pub artist: String,
    pub title: String,
}

/// Per-field messages for re-rendering a rejected form
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AlbumFormErrors {
    pub artist: Option<&'static str>,
    pub title: Option<&'static str>,
}

impl AlbumFormData {
    /// Apply the field ruleset: trim, then required, then 1-100 characters
    pub fn validate(&self) -> Result<ValidatedAlbumInput, AlbumFormErrors> {
        match (check_field(&self.artist), check_field(&self.title)) {
            (Ok(artist), Ok(title)) => Ok(ValidatedAlbumInput { artist, title }),
            (artist, title) => Err(AlbumFormErrors {
                artist: artist.err(),
                title: title.err(),
            }),
        }
    }

    /// Raw artist value for redisplaying a rejected form
    pub fn raw_artist(&self) -> &str {
        self.artist.as_deref().unwrap_or("")
    }

    /// Raw title value for redisplaying a rejected form
    pub fn raw_title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}

fn check_field(value: &Option<String>) -> Result<String, &'static str> {
    let trimmed = value.as_deref().unwrap_or("").trim();
    if trimmed.is_empty() {
        return Err(REQUIRED_MSG);
    }
    if trimmed.chars().count() > MAX_FIELD_CHARS {
        return Err(LENGTH_MSG);
    }
    Ok(trimmed.to_string())
}

/// Delete-confirmation form body.
///
/// Deletion proceeds only when the affirmative submit button was pressed;
/// the "No" button (or an empty body) skips it.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteFormData {
    pub delete_album_yes: Option<String>,
}

impl DeleteFormData {
    pub fn confirmed(&self) -> bool {
        self.delete_album_yes.is_some()
    }
}
