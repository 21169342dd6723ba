//! Output documents: subject, object and the association between them

use super::edge::AssociationEdge;
use super::node::Entity;
use serde::{Deserialize, Serialize};

/// Token joining the two local identifiers in a document id
pub const RELATION_TOKEN: &str = "associated_with";

/// One knowledge graph edge document, ready for ingestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputDocument {
    #[serde(rename = "_id")]
    id: String,
    association: AssociationEdge,
    object: Entity,
    subject: Entity,
}

impl OutputDocument {
    /// Assemble a document; its id is derived from the two endpoint ids.
    pub fn assemble(subject: Entity, association: AssociationEdge, object: Entity) -> Self {
        Self {
            id: document_id(subject.id(), object.id()),
            association,
            object,
            subject,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn association(&self) -> &AssociationEdge {
        &self.association
    }

    pub fn subject(&self) -> &Entity {
        &self.subject
    }

    pub fn object(&self) -> &Entity {
        &self.object
    }
}

/// Derive the document id from the subject and object ids.
///
/// A namespaced id contributes the trimmed text after its first colon; an
/// id without a colon (a surrogate) contributes itself verbatim. The rule
/// is the same for both endpoints.
pub fn document_id(subject_id: &str, object_id: &str) -> String {
    format!(
        "{}_{}_{}",
        local_part(subject_id),
        RELATION_TOKEN,
        local_part(object_id)
    )
}

fn local_part(id: &str) -> &str {
    match id.split_once(':') {
        Some((_, local)) => local.trim(),
        None => id,
    }
}
