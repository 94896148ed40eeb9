//! # c-func-catalog
//!
//! Extracts a function-level inventory from a pycparser JSON AST dump:
//! every function declaration or definition in the translation unit is
//! reported with its name, resolved return type and ordered parameter
//! list, and definitions additionally carry the number of `if` statements
//! in their body.
//!
//! ## Modules
//!
//! - [`node`]: access helpers for the tagged JSON tree
//! - [`parser`]: read and parse the AST dump
//! - [`types`]: declarator type resolution
//! - [`count`]: structural node counting
//! - [`params`]: parameter list extraction
//! - [`catalog`]: catalog construction and report rendering

pub mod catalog;
pub mod count;
pub mod error;
pub mod node;
pub mod params;
pub mod parser;
pub mod types;

/// Logging utilities
pub mod logging {
    use log::LevelFilter;
    use std::env;

    /// Initialize logger based on debug flag or environment variable
    pub fn init_logger(debug: bool) {
        let log_level = if debug {
            LevelFilter::Debug
        } else if env::var("RUST_LOG").is_ok() {
            // Allow RUST_LOG to override if set
            env_logger::init();
            return;
        } else {
            LevelFilter::Warn
        };

        env_logger::Builder::new().filter_level(log_level).init();
    }
}

// Re-export commonly used types
pub use catalog::{build_catalog, write_catalog, write_catalog_json, FunctionRecord};
pub use error::CatalogError;
pub use params::Parameter;
pub use parser::{parse_ast_file, parse_ast_str};
