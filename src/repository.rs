//! Album repository
//!
//! Thin facade over [`AlbumStorage`] consumed by the HTTP handlers. The
//! only policy here is the insert-vs-update dispatch on save; everything
//! else passes through unchanged.

use std::sync::Arc;

use tracing::debug;

use crate::domain::Album;
use crate::error::Result;
use crate::storage::AlbumStorage;

#[derive(Clone)]
pub struct AlbumRepository {
    storage: Arc<dyn AlbumStorage>,
}

impl AlbumRepository {
    pub fn new(storage: Arc<dyn AlbumStorage>) -> Self {
        Self { storage }
    }

    /// Fetch all albums
    pub async fn fetch_all(&self) -> Result<Vec<Album>> {
        self.storage.fetch_album_list().await
    }

    /// Fetch a single album by id
    pub async fn fetch_single(&self, id: i64) -> Result<Option<Album>> {
        self.storage.fetch_album_by_id(id).await
    }

    /// Persist an album: insert when it has no id yet, update otherwise.
    ///
    /// Returns `false` when an update matched no row.
    pub async fn save(&self, album: &Album) -> Result<bool> {
        if album.is_new() {
            let id = self.storage.insert_album(album).await?;
            debug!("Inserted album {}", id);
            Ok(true)
        } else {
            self.storage.update_album(album).await
        }
    }

    /// Delete an album. One that was never persisted deletes nothing.
    pub async fn delete(&self, album: &Album) -> Result<bool> {
        match album.id() {
            Some(id) => self.storage.delete_album(id).await,
            None => Ok(false),
        }
    }
}
