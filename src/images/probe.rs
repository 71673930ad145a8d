//! Raster decoding used to derive metadata at save time.

use imageshelf_common::{Error, Result};

/// Facts derived from decoding an image payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    /// MIME type of the sniffed container format.
    pub mime_type: &'static str,
}

/// Decode `data` as a raster image.
///
/// The whole image is decoded, not just the header, so a truncated or
/// corrupt payload is rejected here rather than on first display.
pub fn probe(data: &[u8]) -> Result<ImageInfo> {
    let format = image::guess_format(data)
        .map_err(|e| Error::decode(format!("Unrecognized image format: {}", e)))?;

    let img = image::load_from_memory_with_format(data, format)
        .map_err(|e| Error::decode(format!("Failed to decode image data: {}", e)))?;

    Ok(ImageInfo {
        width: img.width(),
        height: img.height(),
        mime_type: format.to_mime_type(),
    })
}
