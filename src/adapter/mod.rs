//! Record transformation layer
//!
//! Turns rows of an association table into knowledge graph documents:
//! identifier resolution, batched enrichment, annotation splitting, edge
//! construction and duplicate suppression, driven by a two-pass pipeline.

mod annotation;
mod association;
mod dedup;
mod enrichment;
mod error;
mod fields;
pub mod gene_metabolite;
pub mod microbe_metabolite;
mod pipeline;
pub mod resolver;
mod traits;

pub use annotation::{split_annotation, Annotation};
pub use association::{build_association, normalize_qualifier, split_list, AssociationFields};
pub use dedup::{Deduplicated, Deduplicator};
pub use enrichment::{collect_keys, EnrichmentIndex};
pub use error::{ParseError, PipelineError};
pub use fields::{is_absent, NOT_AVAILABLE, UNKNOWN};
pub use gene_metabolite::GeneMetaboliteDataset;
pub use microbe_metabolite::MicrobeMetaboliteDataset;
pub use pipeline::{Documents, Pipeline, PipelineStage};
pub use resolver::{resolve, Candidate, Namespace, Resolution, Transform};
pub use traits::Dataset;
