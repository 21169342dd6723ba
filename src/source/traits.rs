//! Row source trait definitions

use thiserror::Error;

/// Errors raised while reading the tabular source
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// One data row: ordered fields plus the line it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    line: u64,
    fields: Vec<String>,
}

impl RawRow {
    pub fn new(line: u64, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    /// Line number in the source (the header is line 1)
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Field at a column index, if the row is that wide
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A lazy pass over the data rows of a source
pub type Rows<'a> = Box<dyn Iterator<Item = SourceResult<RawRow>> + 'a>;

/// A tabular source that can be read from the start any number of times.
pub trait RowSource: Send + Sync {
    /// Start a fresh pass over the data rows, header excluded.
    fn rows(&self) -> SourceResult<Rows<'_>>;
}
