//! Database query modules.
//!
//! - images: insert, point lookup, scans, and deletes over the image collection

pub mod images;
