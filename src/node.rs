//! Access helpers for the tagged JSON tree.
//!
//! A pycparser dump encodes every AST node as a JSON object carrying a
//! `_nodetype` string that names the node's kind. Objects without the
//! discriminant, and values that are not objects at all, are opaque to the
//! catalog: they are never an error, they just contribute nothing.

use serde_json::Value;

/// Object field naming a node's kind.
pub const NODETYPE_KEY: &str = "_nodetype";

/// Node kinds the catalog core recognizes.
///
/// Every other tag in the dump maps to [`NodeKind::Other`]; the set of tags
/// pycparser can emit is open-ended and the catalog only cares about the
/// declarator grammar plus the two top-level function shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    FuncDef,
    Decl,
    FuncDecl,
    TypeDecl,
    Typename,
    IdentifierType,
    PtrDecl,
    If,
    /// Unrecognized tag, or no discriminant at all.
    Other,
}

impl NodeKind {
    fn from_tag(tag: &str) -> NodeKind {
        match tag {
            "FuncDef" => NodeKind::FuncDef,
            "Decl" => NodeKind::Decl,
            "FuncDecl" => NodeKind::FuncDecl,
            "TypeDecl" => NodeKind::TypeDecl,
            "Typename" => NodeKind::Typename,
            "IdentifierType" => NodeKind::IdentifierType,
            "PtrDecl" => NodeKind::PtrDecl,
            "If" => NodeKind::If,
            _ => NodeKind::Other,
        }
    }
}

/// Kind of `node`. `Other` when the value is not an object or its
/// `_nodetype` field is missing or not a string.
pub fn kind_of(node: &Value) -> NodeKind {
    match node.get(NODETYPE_KEY).and_then(Value::as_str) {
        Some(tag) => NodeKind::from_tag(tag),
        None => NodeKind::Other,
    }
}

/// String-valued child of `node`, if present.
pub fn str_field<'t>(node: &'t Value, key: &str) -> Option<&'t str> {
    node.get(key).and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn recognized_tags_map_to_their_kind() {
        assert_eq!(kind_of(&json!({"_nodetype": "FuncDef"})), NodeKind::FuncDef);
        assert_eq!(kind_of(&json!({"_nodetype": "PtrDecl"})), NodeKind::PtrDecl);
        assert_eq!(kind_of(&json!({"_nodetype": "If"})), NodeKind::If);
    }

    #[test]
    fn unrecognized_tag_is_other() {
        assert_eq!(kind_of(&json!({"_nodetype": "Typedef"})), NodeKind::Other);
    }

    #[test]
    fn missing_or_non_string_discriminant_is_other() {
        assert_eq!(kind_of(&json!({"name": "x"})), NodeKind::Other);
        assert_eq!(kind_of(&json!({"_nodetype": 7})), NodeKind::Other);
        assert_eq!(kind_of(&json!(null)), NodeKind::Other);
        assert_eq!(kind_of(&json!([1, 2])), NodeKind::Other);
    }

    #[test]
    fn str_field_only_returns_strings() {
        let node = json!({"name": "main", "coord": 3});
        assert_eq!(str_field(&node, "name"), Some("main"));
        assert_eq!(str_field(&node, "coord"), None);
        assert_eq!(str_field(&node, "missing"), None);
    }
}
