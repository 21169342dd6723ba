//! CSV file reader

use super::traits::{RawRow, RowSource, Rows, SourceResult};
use std::path::{Path, PathBuf};

/// Reads rows from a delimited text file on disk.
///
/// The file is reopened for every pass; rows may differ in width.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    delimiter: u8,
}

impl CsvSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            delimiter: b',',
        }
    }

    /// Use a delimiter other than a comma (e.g. `b'\t'`)
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RowSource for CsvSource {
    fn rows(&self) -> SourceResult<Rows<'_>> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_path(&self.path)?;

        let rows = reader.into_records().map(|record| -> SourceResult<RawRow> {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            Ok(RawRow::new(line, record.iter().map(String::from).collect()))
        });
        Ok(Box::new(rows))
    }
}
