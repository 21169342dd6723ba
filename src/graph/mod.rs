//! Output data model: entities, association edges and documents

mod document;
mod edge;
mod node;


pub use document::{document_id, OutputDocument, RELATION_TOKEN};
pub use edge::{AssociationEdge, AssociationEdgeBuilder, ASSOCIATED_WITH};
pub use node::{surrogate_id, Category, Entity, EntityBuilder, Properties, PropertyValue};
