//! SQLite table gateway for the `album` table
//!
//! Each operation runs a single SQL statement; none are transactional
//! with any other operation. Rows are hydrated back through the entity
//! constructors, so storage can never hand out an invariant-violating
//! album.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::AlbumStorage;
use crate::domain::Album;
use crate::error::Result;

/// SQL-backed album storage
#[derive(Clone)]
pub struct SqliteAlbumStorage {
    pool: SqlitePool,
}

impl SqliteAlbumStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn album_from_row(row: &SqliteRow) -> Result<Album> {
    let id: i64 = row.get("id");
    let artist: String = row.get("artist");
    let title: String = row.get("title");

    Ok(Album::with_id(id, artist, title)?)
}

#[async_trait]
impl AlbumStorage for SqliteAlbumStorage {
    async fn fetch_album_list(&self) -> Result<Vec<Album>> {
        let rows = sqlx::query("SELECT id, artist, title FROM album")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(album_from_row).collect()
    }

    async fn fetch_album_by_id(&self, id: i64) -> Result<Option<Album>> {
        let row = sqlx::query("SELECT id, artist, title FROM album WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(album_from_row).transpose()
    }

    async fn insert_album(&self, album: &Album) -> Result<i64> {
        let result = sqlx::query("INSERT INTO album (artist, title) VALUES (?, ?)")
            .bind(album.artist())
            .bind(album.title())
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    async fn update_album(&self, album: &Album) -> Result<bool> {
        // An album without an id cannot match any row
        let id = match album.id() {
            Some(id) => id,
            None => return Ok(false),
        };

        let result = sqlx::query(
            "UPDATE album SET artist = ?, title = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        )
        .bind(album.artist())
        .bind(album.title())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_album(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM album WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
