//! Gene–metabolite association table
//!
//! Subject: the metabolite (`biolink:SmallMolecule`). Object: the gene it is
//! associated with (`biolink:Gene`), named through the gene lookup.

use super::annotation::split_annotation;
use super::association::{build_association, AssociationFields};
use super::enrichment::EnrichmentIndex;
use super::error::ParseError;
use super::fields::{column, optional_int, present};
use super::resolver::{primary_candidate, resolve, Candidate, Namespace};
use super::traits::Dataset;
use crate::graph::{AssociationEdge, Category, Entity, OutputDocument, PropertyValue, ASSOCIATED_WITH};
use crate::lookup::LookupKind;
use crate::source::RawRow;

/// Column indices of the gene–metabolite layout
pub mod columns {
    pub const COMPOUND: usize = 2;
    pub const PUBCHEM_ID: usize = 3;
    pub const FORMULA: usize = 4;
    pub const KEGG_ID: usize = 5;
    pub const HMDB_ID: usize = 6;
    pub const DRUG_ID: usize = 7;
    pub const DRUG_NAME: usize = 8;
    pub const ORIGIN: usize = 9;
    pub const SMILES: usize = 10;
    pub const GENE: usize = 12;
    pub const ENSEMBL_ID: usize = 13;
    pub const NCBI: usize = 14;
    pub const HGNC: usize = 15;
    pub const UNIPROT: usize = 16;
    pub const PROTEIN_SIZE: usize = 17;
    pub const ANNOTATION: usize = 18;
    pub const SCORE: usize = 19;
    pub const ALTERATION: usize = 20;
    pub const PMID: usize = 21;
    pub const SOURCE: usize = 22;
}

const COLUMN_NAMES: &[&str] = &[
    "id",
    "g_meta",
    "compound",
    "pubchem_id",
    "formula",
    "kegg_id",
    "HMDBID",
    "drug_id",
    "drug_name",
    "Origin",
    "smiles_sequence",
    "gene_id",
    "gene",
    "ensembl_id",
    "NCBI",
    "HGNC",
    "UniProt",
    "protein_size",
    "annonation",
    "score",
    "alteration",
    "PMID",
    "source",
];

/// Namespaces the gene service is scoped on; other primaries are not looked up.
const LOOKUP_NAMESPACES: [Namespace; 3] = [Namespace::EntrezGene, Namespace::Ensembl, Namespace::UniProtKb];

#[derive(Debug, Clone, Copy, Default)]
pub struct GeneMetaboliteDataset;

impl GeneMetaboliteDataset {
    pub fn new() -> Self {
        Self
    }

    /// entrezgene → ensembl → hgnc → uniprotkb
    fn gene_candidates(row: &RawRow) -> Result<[Candidate<'_>; 4], ParseError> {
        Ok([
            Candidate::integer(Namespace::EntrezGene, column(row, columns::NCBI)?),
            Candidate::text(Namespace::Ensembl, column(row, columns::ENSEMBL_ID)?),
            Candidate::integer(Namespace::Hgnc, column(row, columns::HGNC)?),
            Candidate::text(Namespace::UniProtKb, column(row, columns::UNIPROT)?),
        ])
    }

    /// pubchem → kegg → hmdb → drugbank
    fn chemical_candidates(row: &RawRow) -> Result<[Candidate<'_>; 4], ParseError> {
        Ok([
            Candidate::integer(Namespace::PubChemCompound, column(row, columns::PUBCHEM_ID)?),
            Candidate::text(Namespace::Kegg, column(row, columns::KEGG_ID)?),
            Candidate::text(Namespace::Hmdb, column(row, columns::HMDB_ID)?),
            Candidate::text(Namespace::DrugBank, column(row, columns::DRUG_ID)?),
        ])
    }

    fn gene(row: &RawRow, enrichment: &EnrichmentIndex) -> Result<Entity, ParseError> {
        let resolution = resolve(&Self::gene_candidates(row)?)?;

        let mut gene = Entity::builder(Category::Gene)
            .with_property("symbol", column(row, columns::GENE)?)
            .with_optional(
                "protein_size",
                optional_int("protein_size", column(row, columns::PROTEIN_SIZE)?)?.map(PropertyValue::Int),
            );

        if let Some(primary) = resolution.primary() {
            if LOOKUP_NAMESPACES.contains(&primary.namespace) {
                gene = gene.with_optional("name", enrichment.field(&primary.raw, "name"));
            }
        }

        if let Some(text) = present(column(row, columns::ANNOTATION)?) {
            let annotation = split_annotation(text);
            gene = gene
                .with_optional("description", annotation.description.map(PropertyValue::String))
                .with_optional("ref", annotation.reference.map(PropertyValue::String));
        }

        Ok(resolution.apply(gene).build())
    }

    fn chemical(row: &RawRow) -> Result<Entity, ParseError> {
        let resolution = resolve(&Self::chemical_candidates(row)?)?;
        let text = |index| -> Result<Option<PropertyValue>, ParseError> {
            Ok(present(column(row, index)?).map(PropertyValue::from))
        };

        let chemical = Entity::builder(Category::SmallMolecule)
            .with_property("name", column(row, columns::COMPOUND)?)
            .with_optional("drug_name", text(columns::DRUG_NAME)?)
            .with_optional("chemical_formula", text(columns::FORMULA)?)
            .with_optional("smiles", text(columns::SMILES)?);

        Ok(resolution.apply(chemical).build())
    }

    fn association(row: &RawRow) -> Result<AssociationEdge, ParseError> {
        build_association(
            ASSOCIATED_WITH,
            &AssociationFields {
                score: Some(column(row, columns::SCORE)?),
                pmid: Some(column(row, columns::PMID)?),
                sources: Some(column(row, columns::ORIGIN)?),
                infores: Some(column(row, columns::SOURCE)?),
                qualifier: Some(column(row, columns::ALTERATION)?),
            },
        )
    }
}

impl Dataset for GeneMetaboliteDataset {
    fn id(&self) -> &str {
        "gene-metabolite"
    }

    fn columns(&self) -> &'static [&'static str] {
        COLUMN_NAMES
    }

    fn lookup_kind(&self) -> LookupKind {
        LookupKind::Gene
    }

    fn lookup_key(&self, row: &RawRow) -> Result<Option<String>, ParseError> {
        let candidates = Self::gene_candidates(row)?;
        Ok(primary_candidate(&candidates)
            .filter(|c| LOOKUP_NAMESPACES.contains(&c.namespace))
            .map(|c| c.raw.to_string()))
    }

    fn build_document(
        &self,
        row: &RawRow,
        enrichment: &EnrichmentIndex,
    ) -> Result<OutputDocument, ParseError> {
        let object = Self::gene(row, enrichment)?;
        let subject = Self::chemical(row)?;
        let association = Self::association(row)?;
        Ok(OutputDocument::assemble(subject, association, object))
    }
}
