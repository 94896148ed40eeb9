//! Declarator type resolution.
//!
//! A declaration's type is spread over a chain of wrapper nodes
//! (`TypeDecl`/`Typename`/`FuncDecl` delegate, `PtrDecl` adds a `*`) ending
//! in an `IdentifierType` that carries the actual type name. Resolution
//! walks that chain and produces the textual C type.

use std::borrow::Cow;

use log::debug;
use serde_json::Value;

use crate::node::{kind_of, NodeKind};

/// Sentinel for anything the resolver cannot interpret.
pub const UNKNOWN_TYPE: &str = "unknown";

// Realistic pycparser output nests declarators a handful of levels deep;
// past this limit resolution degrades to `unknown` instead of risking the
// call stack on adversarial input.
const MAX_DECL_DEPTH: usize = 128;

/// Resolve a declarator subtree to its textual C type.
///
/// `IdentifierType` yields the first entry of its `names` array, borrowed
/// straight out of the tree. `PtrDecl` resolves its inner declarator and
/// returns a freshly owned `*`-prefixed string, so `int **p` comes out as
/// `**int`. Unrecognized or malformed nodes resolve to [`UNKNOWN_TYPE`];
/// resolution never fails.
///
/// The borrowed/owned split is carried in the `Cow` return type: callers
/// never need to inspect the text to know whether it aliases the tree.
pub fn resolve_type(node: &Value) -> Cow<'_, str> {
    resolve_at_depth(node, 0)
}

fn resolve_at_depth(node: &Value, depth: usize) -> Cow<'_, str> {
    if depth > MAX_DECL_DEPTH {
        debug!("declarator nesting deeper than {MAX_DECL_DEPTH}, giving up");
        return Cow::Borrowed(UNKNOWN_TYPE);
    }
    match kind_of(node) {
        NodeKind::IdentifierType => node
            .get("names")
            .and_then(Value::as_array)
            .and_then(|names| names.first())
            .and_then(Value::as_str)
            .map_or(Cow::Borrowed(UNKNOWN_TYPE), Cow::Borrowed),
        // Wrapper kinds contribute no text of their own.
        NodeKind::TypeDecl | NodeKind::Typename | NodeKind::FuncDecl => {
            resolve_inner(node, depth)
        }
        NodeKind::PtrDecl => {
            let inner = resolve_inner(node, depth);
            Cow::Owned(format!("*{inner}"))
        }
        _ => Cow::Borrowed(UNKNOWN_TYPE),
    }
}

fn resolve_inner(node: &Value, depth: usize) -> Cow<'_, str> {
    match node.get("type") {
        Some(inner) => resolve_at_depth(inner, depth + 1),
        None => Cow::Borrowed(UNKNOWN_TYPE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn identifier(name: &str) -> Value {
        json!({"_nodetype": "IdentifierType", "names": [name]})
    }

    fn type_decl(inner: Value) -> Value {
        json!({"_nodetype": "TypeDecl", "declname": "x", "type": inner})
    }

    fn ptr_decl(inner: Value) -> Value {
        json!({"_nodetype": "PtrDecl", "quals": [], "type": inner})
    }

    #[test]
    fn plain_type_is_borrowed_from_the_tree() {
        let node = type_decl(identifier("int"));
        let ty = resolve_type(&node);
        assert_eq!(ty, "int");
        assert!(matches!(ty, Cow::Borrowed(_)));
    }

    #[test]
    fn pointer_type_is_a_fresh_owned_string() {
        let node = ptr_decl(type_decl(identifier("int")));
        let ty = resolve_type(&node);
        assert_eq!(ty, "*int");
        assert!(matches!(ty, Cow::Owned(_)));
    }

    #[test]
    fn double_pointer_stacks_both_stars() {
        let node = ptr_decl(ptr_decl(type_decl(identifier("int"))));
        assert_eq!(resolve_type(&node), "**int");
    }

    #[test]
    fn func_decl_resolves_to_its_return_type() {
        let node = json!({
            "_nodetype": "FuncDecl",
            "args": null,
            "type": type_decl(identifier("void")),
        });
        assert_eq!(resolve_type(&node), "void");
    }

    #[test]
    fn typename_delegates_like_type_decl() {
        let node = json!({"_nodetype": "Typename", "type": identifier("char")});
        assert_eq!(resolve_type(&node), "char");
    }

    #[test]
    fn multiword_identifier_takes_the_first_name() {
        // pycparser splits "unsigned int" into two entries
        let node = json!({"_nodetype": "IdentifierType", "names": ["unsigned", "int"]});
        assert_eq!(resolve_type(&node), "unsigned");
    }

    #[test]
    fn degraded_inputs_resolve_to_unknown() {
        assert_eq!(resolve_type(&json!(null)), UNKNOWN_TYPE);
        assert_eq!(resolve_type(&json!([1, 2])), UNKNOWN_TYPE);
        assert_eq!(resolve_type(&json!({"no_tag": true})), UNKNOWN_TYPE);
        assert_eq!(resolve_type(&json!({"_nodetype": "Struct"})), UNKNOWN_TYPE);
        assert_eq!(
            resolve_type(&json!({"_nodetype": "IdentifierType", "names": []})),
            UNKNOWN_TYPE
        );
        assert_eq!(
            resolve_type(&json!({"_nodetype": "TypeDecl"})),
            UNKNOWN_TYPE
        );
    }

    #[test]
    fn pathological_nesting_degrades_instead_of_overflowing() {
        let mut node = identifier("int");
        for _ in 0..2000 {
            node = ptr_decl(node);
        }
        let ty = resolve_type(&node);
        assert!(ty.ends_with(UNKNOWN_TYPE));
    }
}
