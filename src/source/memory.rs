//! In-memory row source

use super::traits::{RawRow, RowSource, Rows, SourceResult};

/// Buffered table held in memory; the first row of the table is the header.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    rows: Vec<Vec<String>>,
}

impl MemorySource {
    /// Build from a complete table, header row first.
    pub fn from_table<R, S>(table: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: table
                .into_iter()
                .skip(1)
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl RowSource for MemorySource {
    fn rows(&self) -> SourceResult<Rows<'_>> {
        Ok(Box::new(self.rows.iter().enumerate().map(|(i, fields)| {
            // header occupies line 1
            Ok(RawRow::new(i as u64 + 2, fields.clone()))
        })))
    }
}
