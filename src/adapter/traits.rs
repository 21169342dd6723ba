//! Dataset trait: the contract each table layout implements
//!
//! A dataset knows its column contract, which lookup it needs, the lookup
//! key a row contributes, and how one row becomes one document.

use super::enrichment::EnrichmentIndex;
use super::error::ParseError;
use crate::graph::OutputDocument;
use crate::lookup::LookupKind;
use crate::source::RawRow;

/// One association table layout and its mapping onto documents.
pub trait Dataset: Send + Sync {
    /// Stable name, e.g. "gene-metabolite"
    fn id(&self) -> &str;

    /// Column names in order, header row included in the source
    fn columns(&self) -> &'static [&'static str];

    /// Which batched lookup enriches this dataset
    fn lookup_kind(&self) -> LookupKind;

    /// The key this row contributes to the batched lookup, if any.
    ///
    /// Must not apply value transforms: key collection never fails on a
    /// field that only document building would reject.
    fn lookup_key(&self, row: &RawRow) -> Result<Option<String>, ParseError>;

    /// Turn one row into a document, reading enrichment results by key.
    fn build_document(
        &self,
        row: &RawRow,
        enrichment: &EnrichmentIndex,
    ) -> Result<OutputDocument, ParseError>;
}
