//! Function catalog construction and report rendering.
//!
//! Walks the translation unit's top-level `ext` array, classifies each
//! element as a function definition (`FuncDef`), a prototype (`Decl` whose
//! type is `FuncDecl`) or irrelevant, and produces one [`FunctionRecord`]
//! per qualifying element in source order.

use std::borrow::Cow;
use std::io::{self, Write};

use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::count::{count_nodes, IF_TAG};
use crate::error::CatalogError;
use crate::node::{kind_of, str_field, NodeKind};
use crate::params::{extract_params, Parameter};
use crate::types::{resolve_type, UNKNOWN_TYPE};

/// Sentinel for declarators without a usable `name` field.
pub const UNKNOWN_NAME: &str = "unknown";

/// One catalog entry, built per qualifying top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionRecord<'t> {
    pub name: &'t str,
    pub return_type: Cow<'t, str>,
    /// `None` when the declarator carries no argument list.
    pub params: Option<Vec<Parameter<'t>>>,
    pub is_definition: bool,
    /// `If` statements anywhere in the body; definitions only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_count: Option<usize>,
}

/// Classify a top-level element.
///
/// Returns the declarator subtree and whether the element is a full
/// definition, or `None` for elements the catalog ignores. A `FuncDef`
/// without a `decl` child still qualifies (its fields all degrade to
/// sentinels), matching the never-abort policy for node-local damage.
fn classify(element: &Value) -> Option<(Option<&Value>, bool)> {
    match kind_of(element) {
        NodeKind::FuncDef => Some((element.get("decl"), true)),
        NodeKind::Decl => {
            let ty = element.get("type")?;
            if kind_of(ty) == NodeKind::FuncDecl {
                Some((Some(element), false))
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Build the record for a classified element.
fn function_record<'t>(
    element: &'t Value,
    decl: Option<&'t Value>,
    is_definition: bool,
) -> FunctionRecord<'t> {
    let decl_type = decl.and_then(|d| d.get("type"));
    let if_count = if is_definition {
        Some(element.get("body").map_or(0, |body| count_nodes(body, IF_TAG)))
    } else {
        None
    };
    FunctionRecord {
        name: decl.and_then(|d| str_field(d, "name")).unwrap_or(UNKNOWN_NAME),
        return_type: decl_type.map_or(Cow::Borrowed(UNKNOWN_TYPE), resolve_type),
        params: extract_params(decl_type.and_then(|t| t.get("args"))),
        is_definition,
        if_count,
    }
}

fn ext_array(root: &Value) -> Result<&Vec<Value>, CatalogError> {
    root.get("ext")
        .and_then(Value::as_array)
        .ok_or(CatalogError::Schema(
            "top-level `ext` field is missing or not an array",
        ))
}

/// Collect every function record in the translation unit, in source order.
///
/// The tree is never mutated; calling this twice yields identical results.
pub fn build_catalog(root: &Value) -> Result<Vec<FunctionRecord<'_>>, CatalogError> {
    Ok(ext_array(root)?
        .iter()
        .filter_map(|element| {
            classify(element)
                .map(|(decl, is_definition)| function_record(element, decl, is_definition))
        })
        .collect())
}

/// Render one record in the report layout.
pub fn write_record<W: Write>(out: &mut W, record: &FunctionRecord<'_>) -> io::Result<()> {
    writeln!(out, "Function: {}", record.name)?;
    writeln!(out, "Return Type: {}", record.return_type)?;
    writeln!(out, "Parameters:")?;
    match &record.params {
        Some(params) => {
            for param in params {
                writeln!(out, "    {} {}", param.ty, param.name)?;
            }
        }
        None => writeln!(out, "None")?,
    }
    if let Some(n) = record.if_count {
        writeln!(out, "if-condition count: {n}")?;
    }
    writeln!(out)
}

/// Stream the whole catalog to `out`.
///
/// Each record is rendered as soon as its element is classified, followed
/// by the summary line. Returns the function total.
pub fn write_catalog<W: Write>(out: &mut W, root: &Value) -> Result<usize, CatalogError> {
    let mut total = 0;
    for element in ext_array(root)? {
        let Some((decl, is_definition)) = classify(element) else {
            debug!("skipping top-level {:?} node", kind_of(element));
            continue;
        };
        total += 1;
        let record = function_record(element, decl, is_definition);
        write_record(out, &record)?;
    }
    writeln!(out, "Total number of functions: {total}")?;
    Ok(total)
}

/// Write the collected catalog as pretty-printed JSON.
pub fn write_catalog_json<W: Write>(out: &mut W, root: &Value) -> Result<(), CatalogError> {
    let records = build_catalog(root)?;
    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out)?;
    Ok(())
}
