//! Row and pipeline errors

use crate::lookup::LookupError;
use crate::source::SourceError;
use thiserror::Error;

/// A row whose fields cannot be turned into a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("row has {width} fields, column {index} is missing")]
    MissingColumn { index: usize, width: usize },

    #[error("field '{field}' is not an integer: {value:?}")]
    InvalidInteger { field: String, value: String },
}

/// Errors that end the document stream.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    #[error("lookup error: {0}")]
    Lookup(#[from] LookupError),

    #[error("line {line}: {source}")]
    Row {
        line: u64,
        #[source]
        source: ParseError,
    },
}
