//! Two-pass conversion pipeline
//!
//! Stages, in order:
//! 1. Collect lookup keys over a full pass of the source
//! 2. One batched enrichment call
//! 3. Second pass: one document per row, duplicates suppressed
//!
//! Nothing runs until the first document is requested. Any error ends the
//! stream after it is yielded.

use super::dedup::Deduplicated;
use super::enrichment::{collect_keys, EnrichmentIndex};
use super::error::PipelineError;
use super::traits::Dataset;
use crate::config::LookupConfig;
use crate::graph::OutputDocument;
use crate::lookup::LookupClient;
use crate::source::{RowSource, Rows};
use std::collections::BTreeSet;

/// Where a document stream is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Idle,
    CollectingKeys,
    Enriching,
    Emitting,
    Done,
}

/// Composes a dataset, its source and a lookup client.
pub struct Pipeline<'a> {
    dataset: &'a dyn Dataset,
    source: &'a dyn RowSource,
    client: &'a dyn LookupClient,
    config: &'a LookupConfig,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        dataset: &'a dyn Dataset,
        source: &'a dyn RowSource,
        client: &'a dyn LookupClient,
        config: &'a LookupConfig,
    ) -> Self {
        Self {
            dataset,
            source,
            client,
            config,
        }
    }

    /// Lazy stream of unique documents.
    pub fn documents(&self) -> Deduplicated<Documents<'a>> {
        Deduplicated::new(Documents {
            dataset: self.dataset,
            source: self.source,
            client: self.client,
            config: self.config,
            stage: PipelineStage::Idle,
            keys: BTreeSet::new(),
            enrichment: EnrichmentIndex::empty(self.dataset.lookup_kind()),
            rows: None,
            emitted: 0,
        })
    }
}

/// One document per source row, before duplicate suppression.
pub struct Documents<'a> {
    dataset: &'a dyn Dataset,
    source: &'a dyn RowSource,
    client: &'a dyn LookupClient,
    config: &'a LookupConfig,
    stage: PipelineStage,
    keys: BTreeSet<String>,
    enrichment: EnrichmentIndex,
    rows: Option<Rows<'a>>,
    emitted: usize,
}

impl Documents<'_> {
    pub fn stage(&self) -> PipelineStage {
        self.stage
    }

    fn fail(&mut self, err: PipelineError) -> Option<Result<OutputDocument, PipelineError>> {
        tracing::debug!(dataset = self.dataset.id(), error = %err, "pipeline aborted");
        self.stage = PipelineStage::Done;
        self.rows = None;
        Some(Err(err))
    }
}

impl Iterator for Documents<'_> {
    type Item = Result<OutputDocument, PipelineError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stage {
                PipelineStage::Idle => self.stage = PipelineStage::CollectingKeys,
                PipelineStage::CollectingKeys => match collect_keys(self.dataset, self.source) {
                    Ok(keys) => {
                        tracing::info!(
                            dataset = self.dataset.id(),
                            keys = keys.len(),
                            "collected lookup keys"
                        );
                        self.keys = keys;
                        self.stage = PipelineStage::Enriching;
                    }
                    Err(e) => return self.fail(e),
                },
                PipelineStage::Enriching => {
                    let keys = std::mem::take(&mut self.keys);
                    let kind = self.dataset.lookup_kind();
                    match EnrichmentIndex::fetch(kind, &keys, self.client, self.config) {
                        Ok(index) => self.enrichment = index,
                        Err(e) => return self.fail(e.into()),
                    }
                    match self.source.rows() {
                        Ok(rows) => {
                            self.rows = Some(rows);
                            self.stage = PipelineStage::Emitting;
                        }
                        Err(e) => return self.fail(e.into()),
                    }
                }
                PipelineStage::Emitting => {
                    let next = self.rows.as_mut().and_then(Iterator::next);
                    match next {
                        Some(Ok(row)) => {
                            match self.dataset.build_document(&row, &self.enrichment) {
                                Ok(document) => {
                                    self.emitted += 1;
                                    return Some(Ok(document));
                                }
                                Err(source) => {
                                    return self.fail(PipelineError::Row {
                                        line: row.line(),
                                        source,
                                    })
                                }
                            }
                        }
                        Some(Err(e)) => return self.fail(e.into()),
                        None => {
                            tracing::info!(
                                dataset = self.dataset.id(),
                                rows = self.emitted,
                                "source exhausted"
                            );
                            self.stage = PipelineStage::Done;
                            self.rows = None;
                        }
                    }
                }
                PipelineStage::Done => return None,
            }
        }
    }
}
