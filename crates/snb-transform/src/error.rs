use std::path::PathBuf;

use snb_ingest::IngestError;
use thiserror::Error;

/// Errors raised while converting one prefix.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("failed to create output {path}: {source}")]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} line {line}: expected at least {needed} fields, found {found}")]
    MissingField {
        path: PathBuf,
        line: u64,
        needed: usize,
        found: usize,
    },

    #[error("unknown prefix: {0}")]
    UnknownPrefix(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
