//! Entity (node) representation in the output documents

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Biolink class tag carried in an entity's `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "biolink:Gene")]
    Gene,
    #[serde(rename = "biolink:SmallMolecule")]
    SmallMolecule,
    #[serde(rename = "biolink:ChemicalEntity")]
    ChemicalEntity,
    #[serde(rename = "biolink:OrganismalEntity")]
    OrganismalEntity,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gene => "biolink:Gene",
            Self::SmallMolecule => "biolink:SmallMolecule",
            Self::ChemicalEntity => "biolink:ChemicalEntity",
            Self::OrganismalEntity => "biolink:OrganismalEntity",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed attribute values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Array(Vec<PropertyValue>),
    Object(BTreeMap<String, PropertyValue>),
}

impl PropertyValue {
    /// Convert a JSON value returned by the lookup service.
    ///
    /// `null` has no counterpart and yields `None`; null members of arrays
    /// and objects are skipped.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        use serde_json::Value;
        match value {
            Value::Null => None,
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Some(Self::Int(i)),
                None => n.as_f64().map(Self::Float),
            },
            Value::String(s) => Some(Self::String(s.clone())),
            Value::Array(items) => Some(Self::Array(
                items.iter().filter_map(Self::from_json).collect(),
            )),
            Value::Object(map) => Some(Self::Object(
                map.iter()
                    .filter_map(|(k, v)| Self::from_json(v).map(|v| (k.clone(), v)))
                    .collect(),
            )),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

/// Attribute collection, ordered so serialized documents are stable
pub type Properties = BTreeMap<String, PropertyValue>;

/// A graph node: gene, chemical or organism.
///
/// Entities are assembled once through [`EntityBuilder`] and never mutated
/// afterwards; the fields are only readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    id: String,
    #[serde(rename = "type")]
    category: Category,
    #[serde(flatten)]
    properties: Properties,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    xrefs: Properties,
}

impl Entity {
    pub fn builder(category: Category) -> EntityBuilder {
        EntityBuilder::new(category)
    }

    /// Canonical identifier (`NAMESPACE:value` or a surrogate)
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    pub fn xref(&self, namespace: &str) -> Option<&PropertyValue> {
        self.xrefs.get(namespace)
    }

    pub fn xrefs(&self) -> &Properties {
        &self.xrefs
    }
}

/// Accumulates optional attributes and produces an [`Entity`] on `build()`.
#[derive(Debug, Clone)]
pub struct EntityBuilder {
    id: Option<String>,
    category: Category,
    properties: Properties,
    xrefs: Properties,
}

impl EntityBuilder {
    pub fn new(category: Category) -> Self {
        Self {
            id: None,
            category,
            properties: Properties::new(),
            xrefs: Properties::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add an attribute to the entity
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Add an attribute only when a value is present
    pub fn with_optional(self, key: impl Into<String>, value: Option<PropertyValue>) -> Self {
        match value {
            Some(v) => self.with_property(key, v),
            None => self,
        }
    }

    pub fn with_xref(mut self, namespace: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.xrefs.insert(namespace.into(), value.into());
        self
    }

    /// Finalize the entity.
    ///
    /// An entity built without an id receives a random surrogate.
    pub fn build(self) -> Entity {
        Entity {
            id: self.id.unwrap_or_else(surrogate_id),
            category: self.category,
            properties: self.properties,
            xrefs: self.xrefs,
        }
    }
}

/// Fresh surrogate identifier for entities without any namespaced candidate
pub fn surrogate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
