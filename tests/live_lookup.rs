//! Calls the public BioThings services. Run with `--features live_lookup`.

#![cfg(feature = "live_lookup")]

use metabolink::{BioThingsClient, LookupClient, LookupConfig};
use std::collections::BTreeSet;

fn keys(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

#[test]
fn mygene_names_a_known_entrez_id() {
    let config = LookupConfig::default();
    let client = BioThingsClient::new(&config).unwrap();

    let records = client
        .query_many(&keys(&["5243", "0"]), &config.gene_scopes, &config.gene_fields)
        .unwrap();

    let found = records.iter().find(|r| r.query == "5243").unwrap();
    assert!(found.has("name"));
    assert!(records.iter().any(|r| r.query == "0" && r.notfound));
}

#[test]
fn taxonomy_service_resolves_e_coli() {
    let config = LookupConfig::default();
    let client = BioThingsClient::new(&config).unwrap();

    let records = client.get_taxa(&keys(&["562"]), &config.taxon_fields).unwrap();

    let ecoli = records.iter().find(|r| r.query == "562").unwrap();
    assert!(ecoli.has("scientific_name"));
    assert!(ecoli.has("rank"));
}
