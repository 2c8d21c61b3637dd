//! Pipe-delimited shard reading.
//!
//! Shards written by the SNB data generator use `|` as the delimiter, carry
//! one header line and never quote fields. Every line after the header is a
//! record, including blank ones, and every `"` is kept verbatim.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// One data line of a shard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipeRecord {
    /// 1-based line number in the shard file.
    pub line: u64,
    pub fields: Vec<String>,
}

impl PipeRecord {
    /// Strips whitespace at both ends of `text` and splits it on `|`.
    ///
    /// A blank line yields a single empty field.
    pub fn parse(line: u64, text: &str) -> Self {
        Self {
            line,
            fields: text.trim().split('|').map(str::to_string).collect(),
        }
    }
}

/// Streaming reader over the data lines of one shard file.
pub struct ShardReader {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
}

impl ShardReader {
    /// Opens a shard; the header line is consumed by the first read.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            lines: BufReader::new(file).lines(),
        })
    }

    /// Iterates the data records, header excluded.
    pub fn records(&mut self) -> impl Iterator<Item = Result<PipeRecord>> + '_ {
        let path = &self.path;
        self.lines
            .by_ref()
            .zip(1u64..)
            .skip(1)
            .map(move |(result, line)| match result {
                Ok(text) => Ok(PipeRecord::parse(line, &text)),
                Err(source) => Err(IngestError::LineRead {
                    path: path.clone(),
                    line,
                    source,
                }),
            })
    }
}
