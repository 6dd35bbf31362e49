//! Album storage interface
//!
//! The seam between the repository and the concrete storage technology.
//! Handlers never see SQL; swapping the backing store touches only the
//! implementation behind this trait.

use async_trait::async_trait;

use crate::domain::Album;
use crate::error::Result;

mod sqlite;
pub use sqlite::SqliteAlbumStorage;

/// Persistence operations for the album table
#[async_trait]
pub trait AlbumStorage: Send + Sync {
    /// Fetch all albums in underlying row order (no explicit ORDER BY)
    async fn fetch_album_list(&self) -> Result<Vec<Album>>;

    /// Fetch an album by id
    async fn fetch_album_by_id(&self, id: i64) -> Result<Option<Album>>;

    /// Insert a new album and return the assigned id
    async fn insert_album(&self, album: &Album) -> Result<i64>;

    /// Update an existing album, matched by id exactly.
    /// No version check: last writer wins. `false` when no row matched.
    async fn update_album(&self, album: &Album) -> Result<bool>;

    /// Delete the album with the given id. `false` when no row matched.
    async fn delete_album(&self, id: i64) -> Result<bool>;
}
