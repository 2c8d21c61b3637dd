//! Parallel conversion of every prefix in a batch.
//!
//! Each prefix is one unit of work on a `rayon` pool. Prefixes own disjoint
//! output files, so workers share nothing but the read-only converter. A
//! failing prefix does not stop the others; its error is kept in the result.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use snb_model::PrefixSpec;
use snb_transform::{ConvertConfig, Converter};
use tracing::{error, info, info_span, warn};

use crate::types::{BatchResult, PrefixOutcome};

/// Worker pool settings for a batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// Number of worker threads; 0 uses one per CPU core.
    pub jobs: usize,
}

/// Creates the output directory if it does not exist.
///
/// Only the last path component is created; a missing parent is an error.
pub fn prepare_output_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    std::fs::create_dir(path)
        .with_context(|| format!("create output directory {}", path.display()))
}

/// Converts `specs` in parallel and waits for all of them.
///
/// Errors are returned only for batch-level failures (output directory,
/// worker pool). Per-prefix failures are reported in [`BatchResult`].
pub fn run_batch(
    config: &ConvertConfig,
    specs: &[PrefixSpec],
    options: BatchOptions,
) -> Result<BatchResult> {
    let span = info_span!(
        "batch",
        input_dir = %config.input_dir.display(),
        output_dir = %config.output_dir.display()
    );
    let _guard = span.enter();
    let start = Instant::now();

    if !config.input_dir.is_dir() {
        warn!(
            input_dir = %config.input_dir.display(),
            "input directory not found; every prefix will be empty"
        );
    }
    prepare_output_dir(&config.output_dir)?;

    let pool = ThreadPoolBuilder::new()
        .num_threads(options.jobs)
        .thread_name(|index| format!("snb-convert-{index}"))
        .build()
        .context("build worker pool")?;
    let workers = pool.current_num_threads();

    let converter = Converter::new(config.clone());
    let outcomes: Vec<PrefixOutcome> = pool.install(|| {
        specs
            .par_iter()
            .map(|spec| {
                let result = span.in_scope(|| converter.convert(spec));
                if let Err(err) = &result {
                    error!(prefix = spec.name, error = %err, "prefix failed");
                }
                PrefixOutcome {
                    prefix: spec.name,
                    rule: spec.derivation.label(),
                    result,
                }
            })
            .collect()
    });

    let result = BatchResult {
        input_dir: config.input_dir.clone(),
        output_dir: config.output_dir.clone(),
        workers,
        outcomes,
    };
    info!(
        workers,
        prefix_count = result.outcomes.len(),
        failed = result.failures().count(),
        records = result.total_records(),
        duration_ms = start.elapsed().as_millis(),
        "batch complete"
    );
    Ok(result)
}
