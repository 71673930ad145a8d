//! Image store coordinating decoding and database operations.
//!
//! SQLite and the image decoder are both blocking, so every operation hops
//! onto the blocking thread pool with a pooled connection.

use std::path::Path;

use chrono::Utc;
use imageshelf_common::{Error, ImageId, Result};
use imageshelf_db::models::ImageRecord;
use imageshelf_db::pool::{self, DbPool};
use imageshelf_db::queries::images;
use rusqlite::Connection;
use tracing::{debug, info};

use super::file::ImageFile;
use super::probe::probe;

/// Durable local store of image payloads and their metadata.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Clone)]
pub struct ImageStore {
    pool: DbPool,
}

impl ImageStore {
    /// Wrap an already initialized pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open (creating if absent) the database at `path`.
    ///
    /// The parent directory is created as needed. Schema setup runs on every
    /// open and is a no-op when the schema is current.
    pub fn open(path: &Path, pool_size: u32) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::storage_unavailable(format!(
                    "Failed to create database directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let db_path = path.to_str().ok_or_else(|| {
            Error::storage_unavailable(format!("Database path is not UTF-8: {}", path.display()))
        })?;

        let pool = pool::init_pool(db_path, pool_size)?;
        info!(path = %path.display(), "Image store opened");

        Ok(Self::new(pool))
    }

    /// Open a private in-memory store; the data is gone once the last clone drops.
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::new(pool::init_memory_pool()?))
    }

    /// Decode `file`, derive its metadata, and persist it under a fresh id.
    ///
    /// Decoding happens before a connection is taken from the pool, so a
    /// large image does not hold up other operations.
    ///
    /// # Errors
    ///
    /// * [`Error::Decode`] - the payload is not a valid raster image
    /// * [`Error::DuplicateKey`] - the generated id is already taken
    pub async fn save(&self, file: ImageFile, is_ai_generated: bool) -> Result<ImageRecord> {
        let (file, info) = blocking(move || {
            let info = probe(&file.data)?;
            Ok((file, info))
        })
        .await?;

        let upload_time = Utc::now().timestamp_millis();
        let mime_type = if file.mime_type.is_empty() {
            info.mime_type.to_string()
        } else {
            file.mime_type
        };

        let record = ImageRecord {
            id: ImageId::generate_at(upload_time),
            name: file.name,
            mime_type,
            size: file.data.len() as u64,
            width: info.width,
            height: info.height,
            upload_time,
            is_ai_generated,
            blob: file.data,
        };

        let record = self
            .with_conn(move |conn| {
                images::insert_image(conn, &record)?;
                Ok(record)
            })
            .await?;

        info!(
            id = %record.id,
            name = %record.name,
            width = record.width,
            height = record.height,
            is_ai_generated,
            "Image saved"
        );

        Ok(record)
    }

    /// Every stored image, oldest upload first.
    pub async fn list_all(&self) -> Result<Vec<ImageRecord>> {
        self.with_conn(images::list_images).await
    }

    /// Stored images filtered on the AI-generated flag, oldest upload first.
    pub async fn list_by_origin(&self, is_ai_generated: bool) -> Result<Vec<ImageRecord>> {
        self.with_conn(move |conn| images::list_images_by_origin(conn, is_ai_generated))
            .await
    }

    /// Number of stored images.
    pub async fn count(&self) -> Result<u64> {
        self.with_conn(images::count_images).await
    }

    pub async fn get(&self, id: &ImageId) -> Result<Option<ImageRecord>> {
        let id = id.clone();
        self.with_conn(move |conn| images::get_image(conn, &id)).await
    }

    /// Remove the image with the given id.
    ///
    /// Deleting an unknown id is not an error; the return value says whether
    /// anything was removed.
    pub async fn delete(&self, id: &ImageId) -> Result<bool> {
        let key = id.clone();
        let deleted = self
            .with_conn(move |conn| images::delete_image(conn, &key))
            .await?;

        debug!(id = %id, deleted, "Image delete");
        Ok(deleted)
    }

    async fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        blocking(move || {
            let conn = pool::get_conn(&pool)?;
            f(&*conn)
        })
        .await
    }
}

async fn blocking<F, T>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| Error::internal(format!("spawn_blocking join error: {e}")))?
}
