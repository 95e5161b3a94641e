//! Error types for the SQLite driver adapter.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while opening or using the database handle.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The database file could not be opened.
    #[error("cannot open database '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// The engine rejected or failed a statement.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Convenience alias for results with [`DriverError`].
pub type Result<T> = std::result::Result<T, DriverError>;
