//! Imageshelf-DB: Database schema, migrations, and query operations
//!
//! This crate provides the image collection for imageshelf using SQLite
//! with rusqlite and r2d2 connection pooling.
//!
//! # Modules
//!
//! - `migrations` - Database schema migrations
//! - `pool` - Connection pool management
//! - `models` - Rust models matching database schema
//! - `queries` - Database query operations
//!
//! # Example
//!
//! ```no_run
//! use imageshelf_db::pool::{init_pool, get_conn};
//! use imageshelf_db::queries::images;
//!
//! let pool = init_pool("/var/lib/imageshelf/library.sqlite", 4).unwrap();
//! let conn = get_conn(&pool).unwrap();
//!
//! for record in images::list_images(&conn).unwrap() {
//!     println!("{} ({}x{})", record.name, record.width, record.height);
//! }
//! ```

pub mod migrations;
pub mod models;
pub mod pool;
pub mod queries;
