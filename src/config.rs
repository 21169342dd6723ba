//! Run configuration
//!
//! Loaded from YAML; every key is optional and falls back to the public
//! BioThings endpoints and the field lists the datasets need.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from reading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub lookup: LookupConfig,
}

/// Where and how the enrichment lookups are made
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Base URL of the gene annotation service
    pub gene_url: String,
    /// Base URL of the taxonomy service
    pub taxon_url: String,
    /// Identifier scopes a gene key is matched against
    pub gene_scopes: Vec<String>,
    pub gene_fields: Vec<String>,
    pub taxon_fields: Vec<String>,
    /// Maximum keys per HTTP request
    pub batch_size: usize,
    pub timeout_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            gene_url: "https://mygene.info/v3".to_string(),
            taxon_url: "https://t.biothings.io/v1".to_string(),
            gene_scopes: strings(&["entrezgene", "ensembl.gene", "uniprot"]),
            gene_fields: strings(&["name"]),
            taxon_fields: strings(&["scientific_name", "parent_taxid", "lineage", "rank"]),
            batch_size: 1000,
            timeout_secs: 60,
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Config {
    /// Read a YAML configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    /// Default location (~/.config/metabolink/config.yaml on Linux)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("metabolink").join("config.yaml"))
    }

    /// Load the file at `default_path()` if there is one, defaults otherwise
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }
}
