//! Parameter list extraction.

use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;

use crate::node::str_field;
use crate::types::{resolve_type, UNKNOWN_TYPE};

/// Placeholder name for parameters declared without one, e.g. `void f(int);`.
pub const ANONYMOUS: &str = "anonymous";

/// One declared parameter: resolved type plus declared name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter<'t> {
    #[serde(rename = "type")]
    pub ty: Cow<'t, str>,
    pub name: &'t str,
}

/// Extract the ordered parameter list from a declarator's `args` child.
///
/// `None` means the declarator carries no argument list at all (the report
/// renders the literal `None`); `Some` preserves the `params` array order.
/// An empty `params` array is `Some(vec![])` and renders as zero lines.
/// Parameters missing a name or type degrade to [`ANONYMOUS`] and
/// [`UNKNOWN_TYPE`] rather than being dropped.
pub fn extract_params(args: Option<&Value>) -> Option<Vec<Parameter<'_>>> {
    let params = args?.get("params")?.as_array()?;
    Some(
        params
            .iter()
            .map(|param| Parameter {
                ty: param
                    .get("type")
                    .map_or(Cow::Borrowed(UNKNOWN_TYPE), resolve_type),
                name: str_field(param, "name").unwrap_or(ANONYMOUS),
            })
            .collect(),
    )
}
