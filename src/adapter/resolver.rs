//! Hierarchical identifier resolution
//!
//! An entity lists its identifier candidates highest priority first. The
//! first available candidate becomes the primary identifier and names the
//! entity (`PREFIX:value`); every later available candidate is kept as a
//! cross-reference. With no available candidate the entity gets a random
//! surrogate id.

use super::error::ParseError;
use super::fields::{is_absent, parse_int};
use crate::graph::{surrogate_id, EntityBuilder, PropertyValue};

/// Identifier namespaces known to the datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Namespace {
    EntrezGene,
    Ensembl,
    Hgnc,
    UniProtKb,
    PubChemCompound,
    Kegg,
    Hmdb,
    DrugBank,
    Taxid,
}

impl Namespace {
    /// Attribute / xref key the value is stored under
    pub fn key(&self) -> &'static str {
        match self {
            Self::EntrezGene => "entrezgene",
            Self::Ensembl => "ensembl",
            Self::Hgnc => "hgnc",
            Self::UniProtKb => "uniprotkb",
            Self::PubChemCompound => "pubchem_cid",
            Self::Kegg => "kegg",
            Self::Hmdb => "hmdb",
            Self::DrugBank => "drugbank",
            Self::Taxid => "taxid",
        }
    }

    /// Prefix of canonical ids built from this namespace
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::EntrezGene => "NCBIGene",
            Self::Ensembl => "ENSEMBL",
            Self::Hgnc => "HGNC",
            Self::UniProtKb => "UniProtKG",
            Self::PubChemCompound => "PUBCHEM.COMPOUND",
            Self::Kegg => "KEGG.COMPOUND",
            Self::Hmdb => "HMDB",
            Self::DrugBank => "DRUGBANK",
            Self::Taxid => "taxid",
        }
    }
}

/// Conversion applied to a candidate once it is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Integer,
}

impl Transform {
    fn apply(&self, namespace: Namespace, raw: &str) -> Result<PropertyValue, ParseError> {
        match self {
            Self::Integer => parse_int(namespace.key(), raw).map(PropertyValue::Int),
        }
    }
}

/// One identifier candidate for an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub namespace: Namespace,
    pub raw: &'a str,
    pub transform: Option<Transform>,
}

impl<'a> Candidate<'a> {
    pub fn text(namespace: Namespace, raw: &'a str) -> Self {
        Self {
            namespace,
            raw,
            transform: None,
        }
    }

    pub fn integer(namespace: Namespace, raw: &'a str) -> Self {
        Self {
            namespace,
            raw,
            transform: Some(Transform::Integer),
        }
    }

    pub fn is_available(&self) -> bool {
        !is_absent(self.raw)
    }

    fn value(&self) -> Result<PropertyValue, ParseError> {
        match self.transform {
            Some(t) => t.apply(self.namespace, self.raw),
            None => Ok(PropertyValue::String(self.raw.to_string())),
        }
    }
}

/// The selected primary identifier
#[derive(Debug, Clone, PartialEq)]
pub struct Primary {
    pub namespace: Namespace,
    pub value: PropertyValue,
    /// Untransformed field text, used as the enrichment lookup key
    pub raw: String,
}

/// Outcome of resolving one entity's candidates
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    id: String,
    primary: Option<Primary>,
    xrefs: Vec<(Namespace, PropertyValue)>,
}

impl Resolution {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn primary(&self) -> Option<&Primary> {
        self.primary.as_ref()
    }

    pub fn xrefs(&self) -> &[(Namespace, PropertyValue)] {
        &self.xrefs
    }

    /// Whether the id is a surrogate
    pub fn is_surrogate(&self) -> bool {
        self.primary.is_none()
    }

    /// Write the id, primary attribute and xrefs onto an entity under construction.
    pub fn apply(self, builder: EntityBuilder) -> EntityBuilder {
        let mut builder = builder.with_id(self.id);
        if let Some(primary) = self.primary {
            builder = builder.with_property(primary.namespace.key(), primary.value);
        }
        for (namespace, value) in self.xrefs {
            builder = builder.with_xref(namespace.key(), value);
        }
        builder
    }
}

/// The candidate that would become primary, without converting any values.
pub fn primary_candidate<'c, 'a>(candidates: &'c [Candidate<'a>]) -> Option<&'c Candidate<'a>> {
    candidates.iter().find(|c| c.is_available())
}

/// Resolve candidates (highest priority first) into an id and cross-references.
///
/// Transforms run only on available candidates; a failing transform fails
/// the whole resolution.
pub fn resolve(candidates: &[Candidate<'_>]) -> Result<Resolution, ParseError> {
    let mut primary: Option<Primary> = None;
    let mut xrefs = Vec::new();

    for candidate in candidates.iter().filter(|c| c.is_available()) {
        let value = candidate.value()?;
        if primary.is_some() {
            xrefs.push((candidate.namespace, value));
        } else {
            primary = Some(Primary {
                namespace: candidate.namespace,
                value,
                raw: candidate.raw.to_string(),
            });
        }
    }

    let id = match &primary {
        Some(p) => format!("{}:{}", p.namespace.prefix(), render(&p.value)),
        None => surrogate_id(),
    };

    Ok(Resolution { id, primary, xrefs })
}

fn render(value: &PropertyValue) -> String {
    match value {
        PropertyValue::String(s) => s.clone(),
        PropertyValue::Int(i) => i.to_string(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Category, Entity};

    fn gene_candidates<'a>(entrez: &'a str, ensembl: &'a str, hgnc: &'a str, uniprot: &'a str) -> [Candidate<'a>; 4] {
        [
            Candidate::integer(Namespace::EntrezGene, entrez),
            Candidate::text(Namespace::Ensembl, ensembl),
            Candidate::integer(Namespace::Hgnc, hgnc),
            Candidate::text(Namespace::UniProtKb, uniprot),
        ]
    }

    #[test]
    fn highest_priority_available_candidate_is_primary() {
        let resolution =
            resolve(&gene_candidates("5243", "not available", "not available", "P08183")).unwrap();

        assert_eq!(resolution.id(), "NCBIGene:5243");
        let primary = resolution.primary().unwrap();
        assert_eq!(primary.namespace, Namespace::EntrezGene);
        assert_eq!(primary.value, PropertyValue::Int(5243));
        assert_eq!(primary.raw, "5243");
        assert_eq!(
            resolution.xrefs(),
            &[(Namespace::UniProtKb, PropertyValue::from("P08183"))]
        );
    }

    #[test]
    fn lower_tier_is_promoted_when_higher_tiers_are_absent() {
        let resolution =
            resolve(&gene_candidates("not available", "", "40", "P08183")).unwrap();

        assert_eq!(resolution.id(), "HGNC:40");
        assert_eq!(resolution.primary().unwrap().value, PropertyValue::Int(40));
        assert_eq!(resolution.xrefs().len(), 1);
        assert_eq!(resolution.xrefs()[0].0, Namespace::UniProtKb);
    }

    #[test]
    fn every_other_available_candidate_becomes_an_xref() {
        let resolution =
            resolve(&gene_candidates("5243", "ENSG00000085563", "40", "P08183")).unwrap();

        let namespaces: Vec<Namespace> = resolution.xrefs().iter().map(|(ns, _)| *ns).collect();
        assert_eq!(
            namespaces,
            vec![Namespace::Ensembl, Namespace::Hgnc, Namespace::UniProtKb]
        );
        assert!(!namespaces.contains(&Namespace::EntrezGene));
    }

    #[test]
    fn all_absent_gives_a_surrogate() {
        let a = resolve(&gene_candidates("not available", "not available", "Unknown", "")).unwrap();
        let b = resolve(&gene_candidates("not available", "not available", "Unknown", "")).unwrap();

        assert!(a.is_surrogate());
        assert!(a.xrefs().is_empty());
        assert!(!a.id().is_empty());
        assert!(!a.id().contains(':'));
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn invalid_integer_in_an_available_candidate_is_an_error() {
        let err = resolve(&gene_candidates("5243", "not available", "HGNC:40", "not available"))
            .unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidInteger {
                field: "hgnc".to_string(),
                value: "HGNC:40".to_string()
            }
        );
    }

    #[test]
    fn absent_candidates_are_never_transformed() {
        let resolution =
            resolve(&gene_candidates("not available", "ENSG00000085563", "not available", "")).unwrap();
        assert_eq!(resolution.id(), "ENSEMBL:ENSG00000085563");
    }

    #[test]
    fn primary_candidate_skips_absent_values_without_parsing() {
        let candidates = gene_candidates("not available", "not available", "bogus", "P08183");
        let primary = primary_candidate(&candidates).unwrap();
        assert_eq!(primary.namespace, Namespace::Hgnc);
        assert_eq!(primary.raw, "bogus");
    }

    #[test]
    fn apply_writes_id_primary_and_xrefs() {
        let resolution =
            resolve(&gene_candidates("5243", "not available", "not available", "P08183")).unwrap();
        let gene: Entity = resolution.apply(Entity::builder(Category::Gene)).build();

        assert_eq!(gene.id(), "NCBIGene:5243");
        assert_eq!(gene.property("entrezgene"), Some(&PropertyValue::Int(5243)));
        assert_eq!(gene.xref("uniprotkb"), Some(&PropertyValue::from("P08183")));
        assert!(gene.property("uniprotkb").is_none());
    }

    #[test]
    fn prefixes_per_namespace() {
        assert_eq!(Namespace::PubChemCompound.prefix(), "PUBCHEM.COMPOUND");
        assert_eq!(Namespace::Kegg.prefix(), "KEGG.COMPOUND");
        assert_eq!(Namespace::Taxid.prefix(), "taxid");
        assert_eq!(Namespace::UniProtKb.key(), "uniprotkb");
    }
}
