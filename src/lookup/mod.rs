//! Naming and taxonomy lookup service behind enrichment
//!
//! Defines the client trait and record types for the batched gene and taxon
//! queries. Three implementations:
//! - `BioThingsClient`: blocking HTTP against mygene.info / t.biothings.io (production)
//! - `MockClient`: returns preconfigured records (testing)
//! - `OfflineClient`: answers every key as not found (runs without network)
//!
//! The client is handed to the enrichment step explicitly; nothing in the
//! crate holds a process-wide handle.

mod biothings;

pub use biothings::BioThingsClient;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Which batched query a dataset needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    /// Gene names via `query_many`
    Gene,
    /// Taxonomic details via `get_taxa`
    Taxon,
}

impl LookupKind {
    /// Field a found record must carry to be usable
    pub fn required_field(&self) -> &'static str {
        match self {
            Self::Gene => "name",
            Self::Taxon => "scientific_name",
        }
    }
}

/// One result from the lookup service.
///
/// Either `{query, notfound: true}` or `{query, <requested fields>...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupRecord {
    pub query: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub notfound: bool,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl LookupRecord {
    pub fn found(query: impl Into<String>, fields: Value) -> Self {
        Self {
            query: query.into(),
            notfound: false,
            fields: match fields {
                Value::Object(map) => map,
                _ => Map::new(),
            },
        }
    }

    pub fn not_found(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            notfound: true,
            fields: Map::new(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Whether the field is present and not null
    pub fn has(&self, field: &str) -> bool {
        self.get(field).is_some_and(|v| !v.is_null())
    }
}

/// Errors from lookup client operations.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("lookup service not available: {0}")]
    Unavailable(String),
    #[error("lookup request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("lookup service returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("lookup response parse error: {0}")]
    Decode(String),
}

/// Client trait for the batched lookup service.
///
/// Each method is one logical call covering the whole key set. Results may
/// come back in any order, with at most one record per key.
pub trait LookupClient: Send + Sync {
    /// Resolve gene-like identifiers against the given scopes.
    fn query_many(
        &self,
        ids: &BTreeSet<String>,
        scopes: &[String],
        fields: &[String],
    ) -> Result<Vec<LookupRecord>, LookupError>;

    /// Fetch taxonomy details for NCBI taxon ids.
    fn get_taxa(
        &self,
        ids: &BTreeSet<String>,
        fields: &[String],
    ) -> Result<Vec<LookupRecord>, LookupError>;
}

/// Client used when enrichment is switched off: every key is not found.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineClient;

impl LookupClient for OfflineClient {
    fn query_many(
        &self,
        ids: &BTreeSet<String>,
        _scopes: &[String],
        _fields: &[String],
    ) -> Result<Vec<LookupRecord>, LookupError> {
        Ok(ids.iter().map(LookupRecord::not_found).collect())
    }

    fn get_taxa(
        &self,
        ids: &BTreeSet<String>,
        _fields: &[String],
    ) -> Result<Vec<LookupRecord>, LookupError> {
        Ok(ids.iter().map(LookupRecord::not_found).collect())
    }
}

/// Mock client for testing. Returns preconfigured records.
///
/// Keys without a registered record come back as `notfound`. Every call is
/// counted and its key set kept for inspection.
#[derive(Debug, Default)]
pub struct MockClient {
    records: BTreeMap<String, LookupRecord>,
    failing: bool,
    calls: AtomicUsize,
    requests: Mutex<Vec<BTreeSet<String>>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock client whose every call fails.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Register a record, keyed by its `query`.
    pub fn with_record(mut self, record: LookupRecord) -> Self {
        self.records.insert(record.query.clone(), record);
        self
    }

    /// Number of lookup calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Key sets of every call, in call order
    pub fn requests(&self) -> Vec<BTreeSet<String>> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn answer(&self, ids: &BTreeSet<String>) -> Result<Vec<LookupRecord>, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(ids.clone());

        if self.failing {
            return Err(LookupError::Unavailable(
                "mock client configured to fail".to_string(),
            ));
        }

        // reversed to exercise callers that rely on result order
        Ok(ids
            .iter()
            .rev()
            .map(|id| {
                self.records
                    .get(id)
                    .cloned()
                    .unwrap_or_else(|| LookupRecord::not_found(id.clone()))
            })
            .collect())
    }
}

impl LookupClient for MockClient {
    fn query_many(
        &self,
        ids: &BTreeSet<String>,
        _scopes: &[String],
        _fields: &[String],
    ) -> Result<Vec<LookupRecord>, LookupError> {
        self.answer(ids)
    }

    fn get_taxa(
        &self,
        ids: &BTreeSet<String>,
        _fields: &[String],
    ) -> Result<Vec<LookupRecord>, LookupError> {
        self.answer(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn keys(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn record_deserializes_found_and_notfound() {
        let records: Vec<LookupRecord> = serde_json::from_value(json!([
            {"query": "5243", "_id": "5243", "name": "ATP binding cassette subfamily B member 1"},
            {"query": "999999999", "notfound": true}
        ]))
        .unwrap();

        assert!(!records[0].notfound);
        assert!(records[0].has("name"));
        assert_eq!(records[0].get("_id"), Some(&json!("5243")));
        assert!(records[1].notfound);
        assert!(records[1].fields.is_empty());
    }

    #[test]
    fn has_treats_null_as_missing() {
        let record = LookupRecord::found("1", json!({"name": null}));
        assert!(!record.has("name"));
    }

    #[test]
    fn mock_returns_registered_records_and_notfound_for_the_rest() {
        let client = MockClient::new()
            .with_record(LookupRecord::found("5243", json!({"name": "ABCB1 protein"})));

        let records = client.query_many(&keys(&["5243", "1"]), &[], &[]).unwrap();
        assert_eq!(records.len(), 2);
        let found = records.iter().find(|r| r.query == "5243").unwrap();
        assert!(!found.notfound);
        let missing = records.iter().find(|r| r.query == "1").unwrap();
        assert!(missing.notfound);
    }

    #[test]
    fn mock_counts_calls_and_keeps_requests() {
        let client = MockClient::new();
        client.get_taxa(&keys(&["562"]), &[]).unwrap();
        client.get_taxa(&keys(&["562", "1280"]), &[]).unwrap();

        assert_eq!(client.calls(), 2);
        assert_eq!(client.requests()[1], keys(&["1280", "562"]));
    }

    #[test]
    fn failing_mock_returns_error() {
        let client = MockClient::failing();
        let err = client.query_many(&keys(&["1"]), &[], &[]).unwrap_err();
        assert!(matches!(err, LookupError::Unavailable(_)));
        assert_eq!(client.calls(), 1);
    }

    #[test]
    fn offline_client_finds_nothing() {
        let records = OfflineClient.get_taxa(&keys(&["562", "1280"]), &[]).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.notfound));
    }

    #[test]
    fn required_field_per_kind() {
        assert_eq!(LookupKind::Gene.required_field(), "name");
        assert_eq!(LookupKind::Taxon.required_field(), "scientific_name");
    }
}
