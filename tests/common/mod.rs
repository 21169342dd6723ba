//! Common test utilities for the CSV-backed pipeline tests
//!
//! Writes association tables to temporary CSV files with the exact column
//! layout of each dataset, and runs them through the pipeline.

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::{gene_row, microbe_row, run_pipeline, write_table, NA};
