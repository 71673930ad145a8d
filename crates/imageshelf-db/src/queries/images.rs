//! Image collection queries.
//!
//! This module provides the operations over the `images` table: insert,
//! point lookup, ordered scans, and delete. There is no update; records are
//! immutable once written.

use imageshelf_common::{Error, ImageId, Result};
use rusqlite::Connection;

use crate::models::ImageRecord;

const SELECT_COLUMNS: &str =
    "SELECT id, name, mime_type, size, width, height, upload_time, is_ai_generated, blob
     FROM images";

/// Scan order: upload time, then insertion order for same-millisecond saves.
const ORDER_BY: &str = "ORDER BY upload_time ASC, rowid ASC";

/// Parse an image from a database row.
///
/// Expects columns in the order of [`SELECT_COLUMNS`].
fn parse_image_row(row: &rusqlite::Row) -> rusqlite::Result<ImageRecord> {
    Ok(ImageRecord {
        id: ImageId::from(row.get::<_, String>(0)?),
        name: row.get(1)?,
        mime_type: row.get(2)?,
        size: row.get::<_, i64>(3)? as u64,
        width: row.get(4)?,
        height: row.get(5)?,
        upload_time: row.get(6)?,
        is_ai_generated: row.get(7)?,
        blob: row.get(8)?,
    })
}

fn is_primary_key_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
    )
}

/// Insert a new image record.
///
/// # Returns
///
/// * `Ok(())` - The record was written
/// * `Err(Error::DuplicateKey)` - A record with the same id already exists
/// * `Err(Error::Database)` - Any other database failure
pub fn insert_image(conn: &Connection, record: &ImageRecord) -> Result<()> {
    conn.execute(
        "INSERT INTO images (id, name, mime_type, size, width, height, upload_time, is_ai_generated, blob)
         VALUES (:id, :name, :mime_type, :size, :width, :height, :upload_time, :is_ai_generated, :blob)",
        rusqlite::named_params! {
            ":id": record.id.as_str(),
            ":name": &record.name,
            ":mime_type": &record.mime_type,
            ":size": record.size as i64,
            ":width": record.width,
            ":height": record.height,
            ":upload_time": record.upload_time,
            ":is_ai_generated": record.is_ai_generated,
            ":blob": &record.blob,
        },
    )
    .map_err(|e| {
        if is_primary_key_violation(&e) {
            Error::DuplicateKey(record.id.to_string())
        } else {
            Error::database(e.to_string())
        }
    })?;

    Ok(())
}

/// Get an image by ID.
///
/// # Returns
///
/// * `Ok(Some(ImageRecord))` - The image if found
/// * `Ok(None)` - If the image does not exist
/// * `Err(Error)` - If a database error occurs
pub fn get_image(conn: &Connection, id: &ImageId) -> Result<Option<ImageRecord>> {
    let result = conn.query_row(
        &format!("{SELECT_COLUMNS} WHERE id = :id"),
        rusqlite::named_params! { ":id": id.as_str() },
        parse_image_row,
    );

    match result {
        Ok(image) => Ok(Some(image)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// List every image, oldest first.
pub fn list_images(conn: &Connection) -> Result<Vec<ImageRecord>> {
    let mut stmt = conn
        .prepare(&format!("{SELECT_COLUMNS} {ORDER_BY}"))
        .map_err(|e| Error::database(e.to_string()))?;

    let images = stmt
        .query_map([], parse_image_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(images)
}

/// List images that are (or are not) AI-generated, oldest first.
pub fn list_images_by_origin(conn: &Connection, is_ai_generated: bool) -> Result<Vec<ImageRecord>> {
    let mut stmt = conn
        .prepare(&format!(
            "{SELECT_COLUMNS} WHERE is_ai_generated = :is_ai_generated {ORDER_BY}"
        ))
        .map_err(|e| Error::database(e.to_string()))?;

    let images = stmt
        .query_map(
            rusqlite::named_params! { ":is_ai_generated": is_ai_generated },
            parse_image_row,
        )
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(images)
}

/// Count stored images.
pub fn count_images(conn: &Connection) -> Result<u64> {
    conn.query_row("SELECT COUNT(*) FROM images", [], |row| row.get::<_, i64>(0))
        .map(|n| n as u64)
        .map_err(|e| Error::database(e.to_string()))
}

/// Delete an image by ID.
///
/// Deleting an absent id is not an error.
///
/// # Returns
///
/// * `Ok(true)` - If the image was deleted
/// * `Ok(false)` - If the image did not exist
/// * `Err(Error)` - If a database error occurs
pub fn delete_image(conn: &Connection, id: &ImageId) -> Result<bool> {
    let rows_affected = conn
        .execute(
            "DELETE FROM images WHERE id = :id",
            rusqlite::named_params! { ":id": id.as_str() },
        )
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(rows_affected > 0)
}
