//! Error types for SNB shard ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering or reading shard files.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to open a shard file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Shard file name pattern could not be compiled.
    #[error("invalid shard pattern for '{stem}': {source}")]
    ShardPattern {
        stem: String,
        #[source]
        source: regex::Error,
    },

    /// A shard line could not be read or decoded as UTF-8.
    #[error("failed to read {path} at line {line}: {source}")]
    LineRead {
        path: PathBuf,
        line: u64,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
