//! Fatal error taxonomy.
//!
//! Only whole-run failures live here; node-local problems (missing names,
//! unresolvable types, absent parameter lists) degrade to sentinel text in
//! the report and never surface as errors.

use thiserror::Error;

/// A condition that aborts the run before any further catalog output.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The AST file cannot be opened or read.
    #[error("cannot read AST file: {0}")]
    Io(#[from] std::io::Error),

    /// The AST file is not valid JSON.
    #[error("cannot parse AST JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed but does not look like a translation unit.
    #[error("malformed AST document: {0}")]
    Schema(&'static str),
}
