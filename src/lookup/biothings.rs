//! HTTP client for the BioThings gene and taxonomy services

use super::{LookupClient, LookupError, LookupRecord};
use crate::config::LookupConfig;
use reqwest::blocking::Client;
use std::collections::BTreeSet;
use std::time::Duration;

/// Blocking client for mygene.info (`POST /query`) and t.biothings.io
/// (`POST /taxon`).
///
/// A logical call is split into requests of at most `batch_size` keys; the
/// first failed request fails the whole call.
#[derive(Debug, Clone)]
pub struct BioThingsClient {
    http: Client,
    gene_url: String,
    taxon_url: String,
    batch_size: usize,
}

impl BioThingsClient {
    pub fn new(config: &LookupConfig) -> Result<Self, LookupError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("metabolink/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LookupError::Unavailable(format!("failed to build http client: {e}")))?;

        Ok(Self {
            http,
            gene_url: config.gene_url.trim_end_matches('/').to_string(),
            taxon_url: config.taxon_url.trim_end_matches('/').to_string(),
            batch_size: config.batch_size.max(1),
        })
    }

    /// POST the keys in chunks and concatenate the records.
    fn post_batched(
        &self,
        url: &str,
        id_param: &str,
        ids: &BTreeSet<String>,
        extra: &[(&str, String)],
    ) -> Result<Vec<LookupRecord>, LookupError> {
        let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
        let mut records = Vec::with_capacity(ids.len());

        for chunk in ids.chunks(self.batch_size) {
            let mut form: Vec<(&str, String)> = vec![(id_param, chunk.join(","))];
            form.extend(extra.iter().cloned());

            tracing::debug!(url, keys = chunk.len(), "lookup request");
            let resp = self.http.post(url).form(&form).send()?;
            let status = resp.status();
            if !status.is_success() {
                let body = resp.text().unwrap_or_default();
                return Err(LookupError::Status {
                    status: status.as_u16(),
                    body,
                });
            }

            let batch: Vec<LookupRecord> = resp
                .json()
                .map_err(|e| LookupError::Decode(format!("{url}: {e}")))?;
            records.extend(batch);
        }

        Ok(records)
    }
}

impl LookupClient for BioThingsClient {
    fn query_many(
        &self,
        ids: &BTreeSet<String>,
        scopes: &[String],
        fields: &[String],
    ) -> Result<Vec<LookupRecord>, LookupError> {
        let url = format!("{}/query", self.gene_url);
        self.post_batched(
            &url,
            "q",
            ids,
            &[("scopes", scopes.join(",")), ("fields", fields.join(","))],
        )
    }

    fn get_taxa(
        &self,
        ids: &BTreeSet<String>,
        fields: &[String],
    ) -> Result<Vec<LookupRecord>, LookupError> {
        let url = format!("{}/taxon", self.taxon_url);
        self.post_batched(&url, "ids", ids, &[("fields", fields.join(","))])
    }
}
