//! Association edge between the subject and object of a document

use serde::{Deserialize, Serialize};

/// Relation label used by every edge this crate produces
pub const ASSOCIATED_WITH: &str = "biolink:associated_with";

/// Attributes of one association edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationEdge {
    predicate: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    score: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pmid: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sources: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    infores: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    qualifier: Option<String>,
}

impl AssociationEdge {
    pub fn builder(predicate: impl Into<String>) -> AssociationEdgeBuilder {
        AssociationEdgeBuilder {
            edge: Self {
                predicate: predicate.into(),
                score: None,
                pmid: None,
                sources: None,
                infores: None,
                qualifier: None,
            },
        }
    }

    pub fn predicate(&self) -> &str {
        &self.predicate
    }

    pub fn score(&self) -> Option<i64> {
        self.score
    }

    pub fn pmid(&self) -> Option<i64> {
        self.pmid
    }

    pub fn sources(&self) -> Option<&[String]> {
        self.sources.as_deref()
    }

    pub fn infores(&self) -> Option<&[String]> {
        self.infores.as_deref()
    }

    pub fn qualifier(&self) -> Option<&str> {
        self.qualifier.as_deref()
    }
}

/// Collects the optional edge fields; `build()` hands out the finished edge.
#[derive(Debug, Clone)]
pub struct AssociationEdgeBuilder {
    edge: AssociationEdge,
}

impl AssociationEdgeBuilder {
    pub fn score(mut self, score: Option<i64>) -> Self {
        self.edge.score = score;
        self
    }

    pub fn pmid(mut self, pmid: Option<i64>) -> Self {
        self.edge.pmid = pmid;
        self
    }

    pub fn sources(mut self, sources: Option<Vec<String>>) -> Self {
        self.edge.sources = sources;
        self
    }

    pub fn infores(mut self, infores: Option<Vec<String>>) -> Self {
        self.edge.infores = infores;
        self
    }

    pub fn qualifier(mut self, qualifier: Option<String>) -> Self {
        self.edge.qualifier = qualifier;
        self
    }

    pub fn build(self) -> AssociationEdge {
        self.edge
    }
}
