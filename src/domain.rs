//! Album domain entity
//!
//! The single record this application manages. Construction validates, so
//! an `Album` that exists satisfies the field invariants; storage hydrates
//! rows back through the same constructors.

use thiserror::Error;

/// Upper bound on `artist` and `title`, counted in characters
pub const MAX_FIELD_CHARS: usize = 100;

/// Entity invariant violations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Album ids are server-assigned and strictly positive
    #[error("Album id must be a positive integer (got {0})")]
    InvalidId(i64),

    /// Field empty or longer than [`MAX_FIELD_CHARS`]
    #[error("Album {0} must be between 1 and {max} characters", max = MAX_FIELD_CHARS)]
    FieldLength(&'static str),
}

/// An album record: artist and title, plus the id once persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    id: Option<i64>,
    artist: String,
    title: String,
}

impl Album {
    /// Create a not-yet-persisted album (no id)
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self {
            id: None,
            artist: checked_field("artist", artist.into())?,
            title: checked_field("title", title.into())?,
        })
    }

    /// Rehydrate a persisted album with its assigned id
    pub fn with_id(
        id: i64,
        artist: impl Into<String>,
        title: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if id <= 0 {
            return Err(DomainError::InvalidId(id));
        }
        let mut album = Self::new(artist, title)?;
        album.id = Some(id);
        Ok(album)
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// An album is new until storage has assigned it an id.
    /// This drives the repository's insert-vs-update dispatch.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

fn checked_field(field: &'static str, value: String) -> Result<String, DomainError> {
    let chars = value.chars().count();
    if chars == 0 || chars > MAX_FIELD_CHARS {
        return Err(DomainError::FieldLength(field));
    }
    Ok(value)
}
