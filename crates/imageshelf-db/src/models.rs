//! Internal Rust models matching the database schema.

use imageshelf_common::ImageId;
use serde::{Deserialize, Serialize};

/// One persisted image: metadata plus the raw payload.
///
/// Records are immutable once inserted; the only mutation is deletion.
/// The serde view uses camelCase keys and leaves out the payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    pub id: ImageId,
    pub name: String,
    pub mime_type: String,
    /// Payload length in bytes.
    pub size: u64,
    pub width: u32,
    pub height: u32,
    /// Creation time in epoch milliseconds.
    pub upload_time: i64,
    pub is_ai_generated: bool,
    #[serde(skip)]
    pub blob: Vec<u8>,
}
