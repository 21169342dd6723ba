//! Record readers for tabular association sources
//!
//! Every reader implements `RowSource`: each call to `rows()` starts an
//! independent pass from the first data row, so a pipeline can consume the
//! same source twice. Exactly one header row is skipped and field values are
//! passed through untouched.

mod delimited;
mod memory;
mod traits;

pub use delimited::CsvSource;
pub use memory::MemorySource;
pub use traits::{RawRow, RowSource, Rows, SourceError, SourceResult};
