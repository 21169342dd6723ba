//! Metabolink: association tables to knowledge graph documents
//!
//! Converts tabular gene–metabolite and microbe–metabolite association
//! records into edge documents keyed by canonical, cross-referenced
//! identifiers, ready for ingestion into a knowledge graph.
//!
//! # Core Concepts
//!
//! - **Entities**: genes, chemicals and organisms, each named by the
//!   highest-priority identifier available (`NCBIGene:5243`)
//! - **Enrichment**: one batched call to a naming/taxonomy service per run
//! - **Documents**: subject + association + object, deduplicated by an id
//!   derived from the two endpoints
//!
//! # Example
//!
//! ```no_run
//! use metabolink::{Config, CsvSource, GeneMetaboliteDataset, OfflineClient, Pipeline};
//!
//! let config = Config::default();
//! let source = CsvSource::new("data/meta_gene_net.csv");
//! let pipeline = Pipeline::new(&GeneMetaboliteDataset, &source, &OfflineClient, &config.lookup);
//! for document in pipeline.documents() {
//!     println!("{}", serde_json::to_string(&document?)?);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod adapter;
pub mod config;
mod graph;
pub mod lookup;
pub mod source;

pub use adapter::{
    Dataset, GeneMetaboliteDataset, MicrobeMetaboliteDataset, ParseError, Pipeline, PipelineError,
    PipelineStage,
};
pub use config::{Config, ConfigError, LookupConfig};
pub use graph::{
    document_id, AssociationEdge, AssociationEdgeBuilder, Category, Entity, EntityBuilder,
    OutputDocument, Properties, PropertyValue, ASSOCIATED_WITH, RELATION_TOKEN,
};
pub use lookup::{BioThingsClient, LookupClient, LookupError, LookupRecord, MockClient, OfflineClient};
pub use source::{CsvSource, MemorySource, RawRow, RowSource, SourceError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
