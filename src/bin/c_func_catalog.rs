//! Function inventory report for a pycparser JSON AST dump.
//!
//! Usage:
//!     c_func_catalog [ast.json] [--json catalog.json] [--debug]
//!
//! Prints one block per function (name, return type, parameters, and for
//! definitions the `if` statement count) followed by the function total.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use c_func_catalog::logging::init_logger;
use c_func_catalog::{parse_ast_file, write_catalog, write_catalog_json, CatalogError};

/// Extract the function inventory from a C AST JSON dump
#[derive(Parser, Debug)]
#[command(name = "c_func_catalog")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the AST JSON dump
    #[arg(default_value = "ast.json")]
    ast: PathBuf,

    /// Also write the catalog as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn run(args: &Args) -> Result<(), CatalogError> {
    let ast = parse_ast_file(&args.ast)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_catalog(&mut out, &ast)?;
    out.flush()?;

    if let Some(json_path) = &args.json {
        let mut file = File::create(json_path)?;
        write_catalog_json(&mut file, &ast)?;
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logger(args.debug);

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
