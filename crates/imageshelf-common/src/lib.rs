//! Imageshelf-Common: Shared types and error handling.
//!
//! This crate provides common functionality used across imageshelf:
//!
//! - **Typed IDs**: [`ImageId`], the primary key of a stored image
//! - **Error Handling**: The shared [`Error`] taxonomy and [`Result`] alias
//!
//! # Examples
//!
//! ```
//! use imageshelf_common::{Error, ImageId, Result};
//!
//! let id = ImageId::generate();
//! assert!(id.as_str().starts_with("img_"));
//!
//! fn example() -> Result<()> {
//!     Err(Error::decode("not an image"))
//! }
//! assert!(example().is_err());
//! ```

pub mod error;
pub mod ids;

pub use error::{Error, Result};
pub use ids::*;
