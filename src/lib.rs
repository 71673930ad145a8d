//! Imageshelf - local image library with an AI image-edit client
//!
//! The library has two collaborating halves:
//!
//! - [`images::ImageStore`] persists image payloads and their metadata
//!   (dimensions, upload time, origin) in a local SQLite database.
//! - [`edit::EditClient`] sends an image plus a text instruction to the
//!   DashScope multimodal generation service and hands back the edited image.
//!
//! [`library::ImageLibrary`] wires them together for the common
//! save → edit → re-save flow.
//!
//! # Example
//!
//! ```no_run
//! use imageshelf::config::Config;
//! use imageshelf::images::ImageFile;
//! use imageshelf::library::ImageLibrary;
//!
//! # async fn run() -> imageshelf::Result<()> {
//! let library = ImageLibrary::open(&Config::default())?;
//! let file = ImageFile::from_path("photo.png").await?;
//! let record = library.store().save(file, false).await?;
//!
//! let edited = library
//!     .edit_and_save(&record.id, "make the sky purple", "", "sk-...")
//!     .await?;
//! println!("saved {} ({}x{})", edited.id, edited.width, edited.height);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod edit;
pub mod images;
pub mod library;

pub use imageshelf_common::{Error, ImageId, Result};
pub use imageshelf_db::models::ImageRecord;
