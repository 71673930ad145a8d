//! Database connection pool management.
//!
//! This module provides connection pooling for SQLite using r2d2.
//! It handles pool initialization, connection customization, and running migrations.

use std::time::Duration;

use imageshelf_common::{Error, Result};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

use crate::migrations;

/// Type alias for the database connection pool.
pub type DbPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled database connection.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// How long to wait for a connection when opening the pool.
const CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Initialize a new database pool with the given file path.
///
/// This function will:
/// - Create the SQLite database file if it doesn't exist
/// - Switch the database to WAL journaling
/// - Run pending database migrations
///
/// # Arguments
///
/// * `db_path` - Path to the SQLite database file
/// * `max_size` - Maximum number of pooled connections
///
/// # Returns
///
/// * `Ok(DbPool)` - Initialized connection pool
/// * `Err(Error::StorageUnavailable)` - If the engine rejects the open or the schema cannot be created
///
/// # Example
///
/// ```no_run
/// use imageshelf_db::pool::init_pool;
///
/// let pool = init_pool("/var/lib/imageshelf/library.sqlite", 4).unwrap();
/// let conn = pool.get().unwrap();
/// ```
pub fn init_pool(db_path: &str, max_size: u32) -> Result<DbPool> {
    let manager = SqliteConnectionManager::file(db_path).with_init(|conn| {
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| {
            row.get::<_, String>(0)
        })
        .map(|_| ())
    });

    build_pool(Pool::builder().max_size(max_size), manager)
}

/// Initialize an in-memory database pool for testing.
///
/// Every SQLite in-memory connection is its own database, so the pool is
/// capped at a single connection that is never reaped for idleness or age.
/// The database is lost when the pool is dropped.
///
/// # Example
///
/// ```
/// use imageshelf_db::pool::init_memory_pool;
///
/// let pool = init_memory_pool().unwrap();
/// let conn = pool.get().unwrap();
/// ```
pub fn init_memory_pool() -> Result<DbPool> {
    let builder = Pool::builder()
        .max_size(1)
        .idle_timeout(None)
        .max_lifetime(None);

    build_pool(builder, SqliteConnectionManager::memory())
}

fn build_pool(
    builder: r2d2::Builder<SqliteConnectionManager>,
    manager: SqliteConnectionManager,
) -> Result<DbPool> {
    let pool = builder
        .connection_timeout(CONNECTION_TIMEOUT)
        .build(manager)
        .map_err(|e| Error::storage_unavailable(format!("Failed to open database: {}", e)))?;

    let conn = pool.get().map_err(|e| {
        Error::storage_unavailable(format!("Failed to get connection for migrations: {}", e))
    })?;

    migrations::run_migrations(&conn)
        .map_err(|e| Error::storage_unavailable(format!("Failed to run migrations: {}", e)))?;

    let version = migrations::current_version(&conn)
        .map_err(|e| Error::storage_unavailable(format!("Failed to read schema version: {}", e)))?;
    tracing::debug!(schema_version = version, "Database ready");

    Ok(pool)
}

/// Get a connection from the pool.
///
/// This is a convenience wrapper around `pool.get()` that converts the
/// r2d2 error into our common Error type.
pub fn get_conn(pool: &DbPool) -> Result<PooledConnection> {
    pool.get()
        .map_err(|e| Error::database(format!("Failed to get connection from pool: {}", e)))
}
