use std::path::PathBuf;
use thiserror::Error;

use crate::db::DatabaseError;

#[derive(Error, Debug)]
pub enum ShpError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Tracking code error: {0}")]
    Code(#[from] CodeError),

    #[error("Batch error: {0}")]
    Batch(#[from] BatchError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    #[error("Malformed tracking code '{input}': expected BR + 12 digits + F, T or M")]
    Malformed { input: String },

    #[error("Unknown category '{0}': expected F, T or M")]
    UnknownCategory(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatusError {
    #[error("Unknown tracking status: {0}")]
    Unknown(String),
}

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("A batch needs at least one item")]
    Empty,

    #[error("Cannot remove the last item of a batch")]
    LastItem,

    #[error("No batch item with id {0}")]
    UnknownItem(uuid::Uuid),

    #[error("Batch has already been generated; reset it to start a new one")]
    Locked,

    #[error("Failed to store generated codes, nothing was saved: {0}")]
    Store(#[from] DatabaseError),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Batch has not been generated yet")]
    NotGenerated,

    #[error("Failed to create export directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write export file '{path}': {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Config validation failed: {message}")]
    Validation { message: String },
}

pub type Result<T> = std::result::Result<T, ShpError>;
