//! # Document Validation
//!
//! Drives the tree walker over an expanded JSON-LD document, runs the key
//! validator at every node that declares a type, and attaches the tree path
//! to each resulting message.

use std::fmt;

use sdlint_graph::{clean_name, SchemaGraph};
use serde::Serialize;
use serde_json::Value;

use crate::keys::validate_object_keys;

/// The reserved key declaring a node's schema.org type(s) in expanded
/// JSON-LD.
pub const TYPE_KEYWORD: &str = "@type";

/// One schema-conformance finding, qualified by where in the document it
/// was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Slash-delimited path from the document root to the offending node,
    /// with schema.org URL prefixes stripped from each segment. Root-level
    /// findings report `/`.
    pub path: String,
    /// Human-readable description of the finding.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Validates an expanded JSON-LD document against the vocabulary graph.
///
/// `None` (or a JSON `null`) yields no findings without traversing. A
/// single-element top-level array is unwrapped first — expanded JSON-LD
/// commonly wraps the root object that way.
///
/// Findings accumulate in traversal order. Nothing here fails: a malformed
/// type declaration or unknown type becomes a finding, not an error return.
#[must_use]
pub fn validate_document(graph: &SchemaGraph, doc: Option<&Value>) -> Vec<ValidationError> {
    let Some(mut root) = doc else {
        return Vec::new();
    };
    if root.is_null() {
        return Vec::new();
    }
    if let Value::Array(items) = root {
        if items.len() == 1 {
            root = &items[0];
        }
    }

    let mut errors = Vec::new();
    sdlint_walk::walk(root, &mut |key, value, path, enclosing| {
        if key != TYPE_KEYWORD {
            return;
        }
        let messages = validate_object_keys(graph, value, enclosing.keys().map(String::as_str));
        if messages.is_empty() {
            return;
        }
        let at = error_path(path);
        for message in messages {
            errors.push(ValidationError {
                path: at.clone(),
                message,
            });
        }
    });
    errors
}

/// Renders the error path for a finding at `path`, whose final segment is
/// the type keyword itself: drop that segment, strip URL prefixes from the
/// rest, join with `/` under a leading `/`.
fn error_path(path: &[&str]) -> String {
    let segments: Vec<&str> = path[..path.len() - 1]
        .iter()
        .map(|segment| clean_name(segment))
        .collect();
    format!("/{}", segments.join("/"))
}
