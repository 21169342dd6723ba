//! Batched enrichment from the lookup service
//!
//! Pass one over the source gathers the keys a dataset wants looked up; a
//! single client call resolves them; the resulting index is read-only while
//! documents are emitted.

use super::error::PipelineError;
use super::traits::Dataset;
use crate::config::LookupConfig;
use crate::graph::PropertyValue;
use crate::lookup::{LookupClient, LookupError, LookupKind, LookupRecord};
use crate::source::RowSource;
use std::collections::{BTreeSet, HashMap};

/// Collect the deduplicated lookup keys of every row in one full pass.
pub fn collect_keys(
    dataset: &dyn Dataset,
    source: &dyn RowSource,
) -> Result<BTreeSet<String>, PipelineError> {
    let mut keys = BTreeSet::new();
    for row in source.rows()? {
        let row = row?;
        let key = dataset
            .lookup_key(&row)
            .map_err(|err| PipelineError::Row {
                line: row.line(),
                source: err,
            })?;
        if let Some(key) = key {
            keys.insert(key);
        }
    }
    Ok(keys)
}

/// Found lookup records keyed by the query that produced them.
#[derive(Debug, Clone)]
pub struct EnrichmentIndex {
    kind: LookupKind,
    records: HashMap<String, LookupRecord>,
}

impl EnrichmentIndex {
    pub fn empty(kind: LookupKind) -> Self {
        Self {
            kind,
            records: HashMap::new(),
        }
    }

    /// Issue the one batched call for `keys` and index the usable results.
    pub fn fetch(
        kind: LookupKind,
        keys: &BTreeSet<String>,
        client: &dyn LookupClient,
        config: &LookupConfig,
    ) -> Result<Self, LookupError> {
        let records = match kind {
            LookupKind::Gene => client.query_many(keys, &config.gene_scopes, &config.gene_fields)?,
            LookupKind::Taxon => client.get_taxa(keys, &config.taxon_fields)?,
        };
        let index = Self::from_records(kind, records);
        tracing::debug!(
            requested = keys.len(),
            found = index.len(),
            "enrichment index built"
        );
        Ok(index)
    }

    /// Keep records that were found and carry the kind's required field.
    ///
    /// When the service answers a query more than once the last usable answer is kept.
    pub fn from_records(kind: LookupKind, records: impl IntoIterator<Item = LookupRecord>) -> Self {
        let required = kind.required_field();
        let mut index = Self::empty(kind);
        for record in records {
            if record.notfound || !record.has(required) {
                continue;
            }
            index.records.insert(record.query.clone(), record);
        }
        index
    }

    pub fn kind(&self) -> LookupKind {
        self.kind
    }

    pub fn get(&self, key: &str) -> Option<&LookupRecord> {
        self.records.get(key)
    }

    /// A field of the record for `key`, converted to an attribute value
    pub fn field(&self, key: &str, field: &str) -> Option<PropertyValue> {
        self.get(key)
            .and_then(|record| record.get(field))
            .and_then(PropertyValue::from_json)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
