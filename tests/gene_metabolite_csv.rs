//! Gene–metabolite tables read from CSV files end to end.

mod common;

use common::{gene_row, run_pipeline, write_table, NA};
use metabolink::adapter::gene_metabolite::columns;
use metabolink::{
    GeneMetaboliteDataset, LookupRecord, MockClient, OfflineClient, OutputDocument, PipelineError,
    PropertyValue,
};
use serde_json::json;

fn documents(results: Vec<Result<OutputDocument, PipelineError>>) -> Vec<OutputDocument> {
    results
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .expect("pipeline succeeds")
}

#[test]
fn entrezgene_example_row() {
    let file = write_table(
        &GeneMetaboliteDataset,
        &[gene_row(&[
            (columns::PUBCHEM_ID, "264"),
            (columns::NCBI, "5243"),
            (columns::UNIPROT, "P08183"),
        ])],
    );

    let docs = documents(run_pipeline(&GeneMetaboliteDataset, &file, &OfflineClient));

    assert_eq!(docs.len(), 1);
    let doc = &docs[0];
    assert_eq!(doc.object().id(), "NCBIGene:5243");
    assert_eq!(doc.object().xref("uniprotkb"), Some(&PropertyValue::from("P08183")));
    assert_eq!(doc.subject().id(), "PUBCHEM.COMPOUND:264");
    assert_eq!(doc.id(), "264_associated_with_5243");
    assert!(doc.object().property("name").is_none());
}

#[test]
fn serialized_document_shape() {
    let file = write_table(
        &GeneMetaboliteDataset,
        &[gene_row(&[
            (columns::PUBCHEM_ID, "264"),
            (columns::NCBI, "7157"),
            (columns::ANNOTATION, "Tumor suppressor [PMID:123]"),
            (columns::ALTERATION, "Elevated level"),
            (columns::SCORE, "2"),
        ])],
    );
    let client = MockClient::new()
        .with_record(LookupRecord::found("7157", json!({"name": "tumor protein p53"})));

    let docs = documents(run_pipeline(&GeneMetaboliteDataset, &file, &client));
    let value = serde_json::to_value(&docs[0]).unwrap();

    assert_eq!(
        value,
        json!({
            "_id": "264_associated_with_7157",
            "association": {
                "predicate": "biolink:associated_with",
                "score": 2,
                "sources": ["microbiota"],
                "infores": ["gutmgene"],
                "qualifier": "increase level"
            },
            "object": {
                "id": "NCBIGene:7157",
                "type": "biolink:Gene",
                "entrezgene": 7157,
                "symbol": "TP53",
                "name": "tumor protein p53",
                "description": "Tumor suppressor",
                "ref": "PMID:123"
            },
            "subject": {
                "id": "PUBCHEM.COMPOUND:264",
                "type": "biolink:SmallMolecule",
                "name": "Butyric acid",
                "pubchem_cid": 264,
                "chemical_formula": "C4H8O2",
                "smiles": "CCCC(=O)O"
            }
        })
    );
}

#[test]
fn duplicate_rows_collapse_to_one_document() {
    let row = gene_row(&[(columns::PUBCHEM_ID, "264"), (columns::NCBI, "7157")]);
    let file = write_table(&GeneMetaboliteDataset, &[row.clone(), row.clone(), row]);
    let client = MockClient::new();

    let docs = documents(run_pipeline(&GeneMetaboliteDataset, &file, &client));

    assert_eq!(docs.len(), 1);
    assert_eq!(client.calls(), 1);
}

#[test]
fn surrogate_subject_keeps_its_full_id_in_the_document_id() {
    let file = write_table(&GeneMetaboliteDataset, &[gene_row(&[(columns::NCBI, "7157")])]);

    let docs = documents(run_pipeline(&GeneMetaboliteDataset, &file, &OfflineClient));

    let subject_id = docs[0].subject().id();
    assert!(!subject_id.contains(':'));
    assert_eq!(docs[0].id(), format!("{subject_id}_associated_with_7157"));
}

#[test]
fn malformed_annotation_is_dropped_silently() {
    let file = write_table(
        &GeneMetaboliteDataset,
        &[gene_row(&[(columns::NCBI, "7157"), (columns::ANNOTATION, "Kinase [see notes")])],
    );

    let docs = documents(run_pipeline(&GeneMetaboliteDataset, &file, &OfflineClient));

    assert!(docs[0].object().property("description").is_none());
    assert!(docs[0].object().property("ref").is_none());
}

#[test]
fn invalid_entrezgene_stops_the_stream() {
    let file = write_table(
        &GeneMetaboliteDataset,
        &[
            gene_row(&[(columns::NCBI, "7157")]),
            gene_row(&[(columns::NCBI, "TP53")]),
            gene_row(&[(columns::NCBI, "5243")]),
        ],
    );

    let results = run_pipeline(&GeneMetaboliteDataset, &file, &OfflineClient);

    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    let err = results[1].as_ref().unwrap_err();
    assert!(matches!(err, PipelineError::Row { line: 3, .. }));
    assert!(err.to_string().contains("entrezgene"));
}

#[test]
fn hgnc_only_row_is_named_by_hgnc_without_lookup() {
    let file = write_table(
        &GeneMetaboliteDataset,
        &[gene_row(&[(columns::HGNC, "11998"), (columns::UNIPROT, NA)])],
    );
    let client = MockClient::new();

    let docs = documents(run_pipeline(&GeneMetaboliteDataset, &file, &client));

    assert_eq!(docs[0].object().id(), "HGNC:11998");
    assert_eq!(docs[0].object().property("hgnc"), Some(&PropertyValue::Int(11998)));
    assert!(client.requests()[0].is_empty());
}
