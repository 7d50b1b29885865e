//! # Per-Node Key Validation
//!
//! Validates the literal keys present on one object against the types it
//! declares. Two outcomes are mutually exclusive by design: if any declared
//! type is unknown, only type-level messages are returned and no property
//! check runs; property messages appear only when every declared type
//! resolved.

use std::collections::BTreeSet;

use sdlint_graph::{clean_name, is_schema_org_url, SchemaGraph};
use serde_json::Value;

use crate::resolve;

/// A node's declared type(s), as parsed from the type keyword's value.
///
/// schema.org allows multi-typing a node, so the JSON value is either a
/// single string or an array of strings. Everything else is malformed and
/// rejected at this boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDecl {
    /// A single declared type.
    One(String),
    /// An ordered list of declared types.
    Many(Vec<String>),
}

impl TypeDecl {
    /// Parses the type keyword's JSON value; `None` for any shape that is
    /// not a string or an array of strings.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(name) => Some(Self::One(name.clone())),
            Value::Array(items) => {
                let names: Option<Vec<String>> = items
                    .iter()
                    .map(|item| item.as_str().map(str::to_string))
                    .collect();
                names.map(Self::Many)
            }
            _ => None,
        }
    }

    /// The declared type names, normalized to a slice.
    #[must_use]
    pub fn names(&self) -> &[String] {
        match self {
            Self::One(name) => std::slice::from_ref(name),
            Self::Many(names) => names,
        }
    }
}

/// Validates the keys of one object against its declared type(s).
///
/// `declared` is the raw JSON value of the type keyword; `keys` is every
/// literal key present on the enclosing object, in document order. Returns
/// human-readable messages, empty when the node conforms.
///
/// The checks, in order:
///
/// 1. A `declared` value that is neither a string nor an array of strings
///    yields the single message `Unknown value type`.
/// 2. If any declared type is unknown to the graph, return only
///    `Unrecognized schema.org type {value}` messages for the unknown ones
///    spelled as schema.org URLs. Unknown types in foreign vocabularies are
///    skipped silently. No property check runs in this case.
/// 3. Otherwise each key is checked against the union of the declared
///    types' property closures. JSON-LD keywords (`@`-prefixed) are
///    exempt; keys are cleaned of the schema.org URL prefix and of one
///    trailing `-input`/`-output` Action-constraint suffix before the
///    membership test. Misses yield `Unexpected property "{key}"`.
pub fn validate_object_keys<'a, I>(graph: &SchemaGraph, declared: &Value, keys: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let Some(decl) = TypeDecl::from_value(declared) else {
        return vec!["Unknown value type".to_string()];
    };

    let mut unrecognized = Vec::new();
    let mut any_unknown = false;
    for name in decl.names() {
        if graph.find_type(name).is_none() {
            any_unknown = true;
            if is_schema_org_url(name) {
                unrecognized.push(format!("Unrecognized schema.org type {name}"));
            }
        }
    }
    if any_unknown {
        return unrecognized;
    }

    let mut allowed = BTreeSet::new();
    for name in decl.names() {
        // Existence was checked above, so resolution cannot fail here; an
        // Err would mean the two steps disagree on what "known" means.
        if let Ok(props) = resolve::props_for_type(graph, name) {
            allowed.extend(props);
        }
    }

    let mut messages = Vec::new();
    for key in keys {
        if key.starts_with('@') {
            continue;
        }
        let cleaned = clean_name(key);
        let normalized = cleaned
            .strip_suffix("-input")
            .or_else(|| cleaned.strip_suffix("-output"))
            .unwrap_or(cleaned);
        if !allowed.contains(normalized) {
            messages.push(format!("Unexpected property \"{normalized}\""));
        }
    }
    messages
}
