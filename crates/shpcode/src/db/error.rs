//! Database error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// SQLite error from rusqlite.
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// IO error when creating directories or files.
    #[error("IO error for path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A migration failed to apply.
    #[error("Migration failed at version {version}: {reason}")]
    Migration { version: u32, reason: String },

    /// The database lock was poisoned.
    #[error("Database lock poisoned")]
    LockPoisoned,

    /// An insert collided with an existing code (or a repeated code in the
    /// same batch). The whole batch was rolled back.
    #[error("Tracking code already exists: {code}")]
    DuplicateCode { code: String },

    /// A stored row could not be decoded into a typed record.
    #[error("Invalid tracking row '{code}': {reason}")]
    InvalidRow { code: String, reason: String },
}
