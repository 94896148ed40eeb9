//! AST input layer.
//!
//! Reads a pycparser JSON dump into a `serde_json::Value` tree. The tree is
//! kept dynamically typed on purpose: the dump's node set is open-ended and
//! the catalog only interprets the handful of kinds it recognizes.

use std::fs;
use std::path::Path;

use log::debug;
use serde_json::Value;

use crate::error::CatalogError;

/// Read and parse a pycparser JSON dump from `path`.
///
/// # Returns
/// * `Ok(Value)` - The parsed AST tree
/// * `Err` - If the file cannot be read or is not valid JSON
pub fn parse_ast_file(path: impl AsRef<Path>) -> Result<Value, CatalogError> {
    let path = path.as_ref();
    debug!("reading AST from {}", path.display());
    let contents = fs::read_to_string(path)?;
    parse_ast_str(&contents)
}

/// Parse an in-memory pycparser JSON dump.
pub fn parse_ast_str(contents: &str) -> Result<Value, CatalogError> {
    let ast: Value = serde_json::from_str(contents)?;
    Ok(ast)
}
