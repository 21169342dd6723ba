//! Table fixtures

use metabolink::{Config, CsvSource, Dataset, LookupClient, OutputDocument, Pipeline, PipelineError};
use tempfile::NamedTempFile;

pub const NA: &str = "not available";

/// A gene–metabolite row (23 columns) with ids absent unless overridden.
pub fn gene_row(overrides: &[(usize, &str)]) -> Vec<String> {
    let mut row: Vec<String> = [
        "1", "GM1", "Butyric acid", NA, "C4H8O2", NA, NA, NA, NA, "Microbiota", "CCCC(=O)O",
        "G1", "TP53", NA, NA, NA, NA, NA, "Transport protein", NA, "Unknown", NA, "gutMGene",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    for (index, value) in overrides {
        row[*index] = value.to_string();
    }
    row
}

/// A microbe–metabolite row (21 columns) with ids absent unless overridden.
pub fn microbe_row(overrides: &[(usize, &str)]) -> Vec<String> {
    let mut row: Vec<String> = [
        "1", "MI1", "Akkermansia muciniphila", "ME1", "Propionate", "Propionic acid", NA, "C3H6O2",
        NA, NA, "Verrucomicrobia", "Verrucomicrobiae", "Verrucomicrobiales", "Akkermansiaceae",
        "Akkermansia", "Akkermansia muciniphila", "239935", "infores:gmmad", "CCC(=O)O", NA,
        "Microbiota",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    for (index, value) in overrides {
        row[*index] = value.to_string();
    }
    row
}

/// Write the dataset's header and `rows` to a temporary CSV file.
pub fn write_table(dataset: &dyn Dataset, rows: &[Vec<String>]) -> NamedTempFile {
    let file = NamedTempFile::new().expect("create temp file");
    {
        let mut writer = csv::Writer::from_path(file.path()).expect("open csv writer");
        writer.write_record(dataset.columns()).expect("write header");
        for row in rows {
            writer.write_record(row).expect("write row");
        }
        writer.flush().expect("flush csv");
    }
    file
}

/// Run the whole pipeline over a CSV file and collect the stream.
pub fn run_pipeline(
    dataset: &dyn Dataset,
    file: &NamedTempFile,
    client: &dyn LookupClient,
) -> Vec<Result<OutputDocument, PipelineError>> {
    let config = Config::default();
    let source = CsvSource::new(file.path());
    Pipeline::new(dataset, &source, client, &config.lookup)
        .documents()
        .collect()
}
