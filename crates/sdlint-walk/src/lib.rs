//! # sdlint-walk — Object-Tree Traversal
//!
//! Depth-first traversal of a `serde_json::Value` tree that invokes a
//! visitor once per key/value pair at every nesting depth. The visitor
//! receives the key, the value, the path from the root (ending in the key
//! itself), and the enclosing object, so it can read sibling keys.
//!
//! Two conventions matter to callers:
//!
//! - Visit order is deterministic document insertion order (`serde_json`'s
//!   `preserve_order` feature is enabled workspace-wide).
//! - Arrays are transparent: their elements are descended into without
//!   adding a path segment. Expanded JSON-LD wraps every value in an array,
//!   and indices must not leak into reported paths.

use serde_json::{Map, Value};

/// Walks `root` depth-first, calling `visitor` once per key/value pair.
///
/// The visitor arguments are `(key, value, path, enclosing)` where `path`
/// is the sequence of keys from the root down to and including `key`, and
/// `enclosing` is the object `key` lives in. Scalars and arrays at the root
/// produce no visits of their own.
pub fn walk<'a, F>(root: &'a Value, visitor: &mut F)
where
    F: FnMut(&'a str, &'a Value, &[&'a str], &'a Map<String, Value>),
{
    let mut path = Vec::new();
    visit(root, &mut path, visitor);
}

fn visit<'a, F>(value: &'a Value, path: &mut Vec<&'a str>, visitor: &mut F)
where
    F: FnMut(&'a str, &'a Value, &[&'a str], &'a Map<String, Value>),
{
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                path.push(key.as_str());
                visitor(key, child, path, map);
                visit(child, path, visitor);
                path.pop();
            }
        }
        Value::Array(items) => {
            for item in items {
                visit(item, path, visitor);
            }
        }
        _ => {}
    }
}
