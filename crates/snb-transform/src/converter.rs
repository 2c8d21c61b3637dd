use std::path::{Path, PathBuf};
use std::time::Instant;

use snb_ingest::{PipeRecord, ShardReader, list_shard_files};
use snb_model::{ConversionSummary, Derivation, PrefixSpec};
use tracing::{debug, info, info_span};

use crate::derive::{derived_row, extend_primary};
use crate::error::{ConvertError, Result};
use crate::quote::quote_fields;
use crate::writer::OutputFile;

/// Directories a conversion reads from and writes to.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl ConvertConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
        }
    }
}

/// Converts the shards of one prefix into loader CSV files.
///
/// A converter holds no mutable state, so one instance can serve any number
/// of prefixes concurrently as long as their output files differ.
#[derive(Debug, Clone)]
pub struct Converter {
    config: ConvertConfig,
}

impl Converter {
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    /// Converts a registered prefix looked up by name.
    pub fn convert_named(&self, prefix: &str) -> Result<ConversionSummary> {
        let spec = PrefixSpec::lookup(prefix)
            .ok_or_else(|| ConvertError::UnknownPrefix(prefix.to_string()))?;
        self.convert(spec)
    }

    /// Converts every shard of `spec`.
    ///
    /// The primary output and any derived outputs are truncated before the
    /// first shard is read. A prefix without shards leaves them empty.
    pub fn convert(&self, spec: &PrefixSpec) -> Result<ConversionSummary> {
        let span = info_span!("convert", prefix = spec.name);
        let _guard = span.enter();
        let start = Instant::now();

        let shards = list_shard_files(&self.config.input_dir, spec)?;
        let output_dir = &self.config.output_dir;
        let mut primary = OutputFile::create(&output_dir.join(spec.primary_output()))?;
        let mut derived = spec
            .derivation
            .derived_outputs()
            .into_iter()
            .map(|name| OutputFile::create(&output_dir.join(name)))
            .collect::<Result<Vec<_>>>()?;

        let mut records = 0usize;
        for shard in &shards {
            let mut reader = ShardReader::open(shard)?;
            let mut shard_records = 0usize;
            for record in reader.records() {
                convert_record(
                    &spec.derivation,
                    shard,
                    record?,
                    &mut primary,
                    &mut derived,
                )?;
                shard_records += 1;
            }
            records += shard_records;
            debug!(shard = %shard.display(), records = shard_records, "shard converted");
        }

        let primary = primary.finish()?;
        let derived = derived
            .into_iter()
            .map(OutputFile::finish)
            .collect::<Result<Vec<_>>>()?;
        let summary = ConversionSummary {
            prefix: spec.name.to_string(),
            shards,
            records,
            primary,
            derived,
        };
        info!(
            rule = spec.derivation.label(),
            shard_count = summary.shards.len(),
            records = summary.records,
            derived_rows = summary.derived_rows(),
            duration_ms = start.elapsed().as_millis(),
            "prefix converted"
        );
        Ok(summary)
    }
}

fn convert_record(
    derivation: &Derivation,
    shard: &Path,
    record: PipeRecord,
    primary: &mut OutputFile,
    derived: &mut [OutputFile],
) -> Result<()> {
    let PipeRecord { line, mut fields } = record;
    let needed = derivation.min_fields();
    if fields.len() < needed {
        return Err(ConvertError::MissingField {
            path: shard.to_path_buf(),
            line,
            needed,
            found: fields.len(),
        });
    }

    quote_fields(&mut fields);
    if let Some(row) = derived_row(derivation, &fields) {
        derived[row.output].write_row(&row.fields)?;
    }
    extend_primary(derivation, &mut fields);
    primary.write_row(&fields)
}
