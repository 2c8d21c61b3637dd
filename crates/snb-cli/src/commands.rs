use anyhow::Result;
use snb_cli::batch::{BatchOptions, run_batch};
use snb_cli::types::BatchResult;
use snb_model::PREFIXES;
use snb_transform::ConvertConfig;

use crate::cli::Cli;

/// Converts every registered prefix from the CLI's input to its output.
pub fn run_convert(cli: &Cli) -> Result<BatchResult> {
    let config = ConvertConfig::new(&cli.input_dir, &cli.output_dir);
    let options = BatchOptions { jobs: cli.jobs };
    run_batch(&config, &PREFIXES, options)
}
