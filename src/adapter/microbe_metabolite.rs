//! Microbe–metabolite association table
//!
//! Subject: the microbe (`biolink:OrganismalEntity`) identified by NCBI
//! taxon id and enriched with taxonomy details. Object: the metabolite
//! (`biolink:ChemicalEntity`).

use super::association::{build_association, AssociationFields};
use super::enrichment::EnrichmentIndex;
use super::error::ParseError;
use super::fields::{column, present};
use super::resolver::{primary_candidate, resolve, Candidate, Namespace};
use super::traits::Dataset;
use crate::graph::{AssociationEdge, Category, Entity, OutputDocument, PropertyValue, ASSOCIATED_WITH};
use crate::lookup::LookupKind;
use crate::source::RawRow;

/// Column indices of the microbe–metabolite layout
pub mod columns {
    pub const ORGANISM: usize = 2;
    pub const PUBCHEM_COMPOUND: usize = 5;
    pub const PUBCHEM_ID: usize = 6;
    pub const FORMULA: usize = 7;
    pub const KEGG_ID: usize = 8;
    pub const TAX_ID: usize = 9;
    pub const SOURCE: usize = 17;
    pub const SMILES: usize = 18;
    pub const HMDB_ID: usize = 19;
    pub const ORIGIN: usize = 20;
}

const COLUMN_NAMES: &[&str] = &[
    "id",
    "g_micro",
    "organism",
    "g_meta",
    "metabolic",
    "pubchem_compound",
    "pubchem_id",
    "formula",
    "kegg_id",
    "tax_id",
    "phylum",
    "class",
    "order",
    "family",
    "genus",
    "species",
    "species_id",
    "source",
    "smiles_sequence",
    "HMDBID",
    "Origin",
];

/// Taxonomy fields copied from the lookup onto the organism
const TAXON_FIELDS: [&str; 4] = ["scientific_name", "parent_taxid", "lineage", "rank"];

#[derive(Debug, Clone, Copy, Default)]
pub struct MicrobeMetaboliteDataset;

impl MicrobeMetaboliteDataset {
    pub fn new() -> Self {
        Self
    }

    fn organism_candidates(row: &RawRow) -> Result<[Candidate<'_>; 1], ParseError> {
        Ok([Candidate::integer(Namespace::Taxid, column(row, columns::TAX_ID)?)])
    }

    /// pubchem → kegg → hmdb
    fn chemical_candidates(row: &RawRow) -> Result<[Candidate<'_>; 3], ParseError> {
        Ok([
            Candidate::integer(Namespace::PubChemCompound, column(row, columns::PUBCHEM_ID)?),
            Candidate::text(Namespace::Kegg, column(row, columns::KEGG_ID)?),
            Candidate::text(Namespace::Hmdb, column(row, columns::HMDB_ID)?),
        ])
    }

    fn organism(row: &RawRow, enrichment: &EnrichmentIndex) -> Result<Entity, ParseError> {
        let resolution = resolve(&Self::organism_candidates(row)?)?;

        let mut organism = Entity::builder(Category::OrganismalEntity)
            .with_property("name", column(row, columns::ORGANISM)?.to_lowercase());

        if let Some(primary) = resolution.primary() {
            for field in TAXON_FIELDS {
                organism = organism.with_optional(field, enrichment.field(&primary.raw, field));
            }
        }

        Ok(resolution.apply(organism).build())
    }

    fn chemical(row: &RawRow) -> Result<Entity, ParseError> {
        let resolution = resolve(&Self::chemical_candidates(row)?)?;

        let chemical = Entity::builder(Category::ChemicalEntity)
            .with_property("name", column(row, columns::PUBCHEM_COMPOUND)?.to_lowercase())
            .with_optional(
                "chemical_formula",
                present(column(row, columns::FORMULA)?).map(PropertyValue::from),
            )
            .with_optional(
                "smiles",
                present(column(row, columns::SMILES)?).map(PropertyValue::from),
            );

        Ok(resolution.apply(chemical).build())
    }

    fn association(row: &RawRow) -> Result<AssociationEdge, ParseError> {
        build_association(
            ASSOCIATED_WITH,
            &AssociationFields {
                sources: Some(column(row, columns::ORIGIN)?),
                infores: Some(column(row, columns::SOURCE)?),
                ..AssociationFields::default()
            },
        )
    }
}

impl Dataset for MicrobeMetaboliteDataset {
    fn id(&self) -> &str {
        "microbe-metabolite"
    }

    fn columns(&self) -> &'static [&'static str] {
        COLUMN_NAMES
    }

    fn lookup_kind(&self) -> LookupKind {
        LookupKind::Taxon
    }

    fn lookup_key(&self, row: &RawRow) -> Result<Option<String>, ParseError> {
        let candidates = Self::organism_candidates(row)?;
        Ok(primary_candidate(&candidates).map(|c| c.raw.to_string()))
    }

    fn build_document(
        &self,
        row: &RawRow,
        enrichment: &EnrichmentIndex,
    ) -> Result<OutputDocument, ParseError> {
        let subject = Self::organism(row, enrichment)?;
        let object = Self::chemical(row)?;
        let association = Self::association(row)?;
        Ok(OutputDocument::assemble(subject, association, object))
    }
}
