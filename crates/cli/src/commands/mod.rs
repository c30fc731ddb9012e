//! CLI command implementations.

pub mod facets;
pub mod filter;

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use vitrine_core::ProductSummary;

/// Errors shared by every command that reads a catalog export.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Catalog file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not a JSON array of product summaries.
    #[error("Failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Output could not be written.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// Output could not be encoded.
    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Read a catalog export, preserving its order.
pub fn load_catalog(path: &Path) -> Result<Vec<ProductSummary>, CommandError> {
    let bytes = std::fs::read(path).map_err(|source| CommandError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let products: Vec<ProductSummary> =
        serde_json::from_slice(&bytes).map_err(|source| CommandError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(products = products.len(), "Catalog loaded");
    Ok(products)
}

/// Pretty-print `value` as JSON to `out`.
pub fn write_json(out: &mut impl Write, value: &impl Serialize) -> Result<(), CommandError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
