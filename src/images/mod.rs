//! Local image storage.
//!
//! Image payloads are stored inline in the database next to the metadata
//! derived from them at save time. See [`ImageStore`] for the operations.

mod file;
mod probe;
mod store;

pub use file::ImageFile;
pub use probe::{probe, ImageInfo};
pub use store::ImageStore;
