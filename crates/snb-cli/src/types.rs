use std::path::PathBuf;

use snb_model::ConversionSummary;
use snb_transform::ConvertError;

/// Outcome of converting a single prefix.
#[derive(Debug)]
pub struct PrefixOutcome {
    pub prefix: &'static str,
    pub rule: &'static str,
    pub result: Result<ConversionSummary, ConvertError>,
}

#[derive(Debug)]
pub struct BatchResult {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub workers: usize,
    /// One entry per requested prefix, in request order.
    pub outcomes: Vec<PrefixOutcome>,
}

impl BatchResult {
    pub fn has_errors(&self) -> bool {
        self.outcomes.iter().any(|outcome| outcome.result.is_err())
    }

    pub fn summaries(&self) -> impl Iterator<Item = &ConversionSummary> {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&'static str, &ConvertError)> {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().err().map(|e| (outcome.prefix, e)))
    }

    pub fn total_records(&self) -> usize {
        self.summaries().map(|summary| summary.records).sum()
    }
}
