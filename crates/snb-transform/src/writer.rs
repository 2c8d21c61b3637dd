use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use snb_model::OutputSummary;

use crate::error::{ConvertError, Result};

/// A truncated output file receiving comma-joined rows.
///
/// Fields are written exactly as given; quoting is applied beforehand.
pub struct OutputFile {
    path: PathBuf,
    writer: BufWriter<File>,
    rows: usize,
}

impl OutputFile {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| ConvertError::OutputCreate {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
            rows: 0,
        })
    }

    /// Writes one row of already-quoted fields.
    pub fn write_row<S: AsRef<str>>(&mut self, fields: &[S]) -> Result<()> {
        let mut line = String::new();
        for (index, field) in fields.iter().enumerate() {
            if index > 0 {
                line.push(',');
            }
            line.push_str(field.as_ref());
        }
        line.push('\n');
        self.writer
            .write_all(line.as_bytes())
            .map_err(|source| ConvertError::OutputWrite {
                path: self.path.clone(),
                source,
            })?;
        self.rows += 1;
        Ok(())
    }

    /// Flushes buffered rows and reports what was written.
    pub fn finish(mut self) -> Result<OutputSummary> {
        self.writer
            .flush()
            .map_err(|source| ConvertError::OutputWrite {
                path: self.path.clone(),
                source,
            })?;
        Ok(OutputSummary {
            path: self.path,
            rows: self.rows,
        })
    }
}
