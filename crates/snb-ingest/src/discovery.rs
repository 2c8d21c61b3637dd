//! Shard discovery for a prefix.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use regex::Regex;
use snb_model::PrefixSpec;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Builds the file name pattern for shards of `stem`: `<stem>_<N>_<M>.csv`.
pub fn shard_pattern(stem: &str) -> Result<Regex> {
    let pattern = format!(r"^{}_[0-9]+_[0-9]+\.csv$", regex::escape(stem));
    Regex::new(&pattern).map_err(|source| IngestError::ShardPattern {
        stem: stem.to_string(),
        source,
    })
}

/// Directory holding the shards of `spec` under `input_dir`.
pub fn shard_dir(input_dir: &Path, spec: &PrefixSpec) -> PathBuf {
    match spec.directory() {
        Some(dir) => input_dir.join(dir),
        None => input_dir.to_path_buf(),
    }
}

/// Lists the shard files of `spec` under `input_dir`.
///
/// Returns files sorted by filename. A missing directory yields no shards.
pub fn list_shard_files(input_dir: &Path, spec: &PrefixSpec) -> Result<Vec<PathBuf>> {
    let dir = shard_dir(input_dir, spec);
    let pattern = shard_pattern(spec.stem())?;

    let entries = match std::fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            debug!(prefix = spec.name, dir = %dir.display(), "shard directory missing");
            return Ok(Vec::new());
        }
        Err(error) => {
            return Err(IngestError::DirectoryRead {
                path: dir,
                source: error,
            });
        }
    };

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.clone(),
            source: e,
        })?;

        let path = entry.path();

        // Skip directories
        if !path.is_file() {
            continue;
        }

        let matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| pattern.is_match(name));

        if matches {
            files.push(path);
        }
    }

    // Sort by filename
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    debug!(prefix = spec.name, shard_count = files.len(), "shards discovered");
    Ok(files)
}
