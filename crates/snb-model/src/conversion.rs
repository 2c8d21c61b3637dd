use std::path::PathBuf;

/// Rows written to a single output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSummary {
    pub path: PathBuf,
    pub rows: usize,
}

impl OutputSummary {
    /// File name of the output, for display.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Result of converting every shard of one prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub prefix: String,
    /// Input shard files that were read, in read order.
    pub shards: Vec<PathBuf>,
    /// Data records read (header lines excluded).
    pub records: usize,
    pub primary: OutputSummary,
    pub derived: Vec<OutputSummary>,
}

impl ConversionSummary {
    /// Total rows written to derived outputs.
    pub fn derived_rows(&self) -> usize {
        self.derived.iter().map(|output| output.rows).sum()
    }
}
