//! Structural node counting.

use serde_json::Value;

use crate::node::NODETYPE_KEY;

/// Tag carried by C `if` statements in a pycparser dump.
pub const IF_TAG: &str = "If";

/// Count the objects anywhere under `root` whose `_nodetype` equals `tag`.
///
/// This is a structural count over the whole subtree: every object is
/// visited no matter what construct embeds it, so an `if` nested inside
/// loops, blocks or expression arms still counts. Traversal uses an
/// explicit stack; document depth never translates into call-stack depth.
pub fn count_nodes(root: &Value, tag: &str) -> usize {
    let mut count = 0;
    let mut stack = vec![root];
    while let Some(value) = stack.pop() {
        match value {
            Value::Object(fields) => {
                for (key, child) in fields {
                    if key == NODETYPE_KEY && child.as_str() == Some(tag) {
                        count += 1;
                    }
                    stack.push(child);
                }
            }
            Value::Array(items) => stack.extend(items),
            _ => {}
        }
    }
    count
}
