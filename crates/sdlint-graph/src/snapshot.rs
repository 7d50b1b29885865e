//! # Snapshot Loading
//!
//! The graph ships as a JSON snapshot of the schema.org vocabulary:
//!
//! ```json
//! {
//!   "types":      [ { "name": "Person", "parent": ["Thing"] }, ... ],
//!   "properties": [ { "name": "name",   "parent": ["Thing"] }, ... ]
//! }
//! ```
//!
//! Loading happens once, at process (or test) start; the resulting
//! [`SchemaGraph`] is shared read-only afterwards.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::graph::SchemaGraph;
use crate::node::{PropertyNode, TypeNode};

/// Error loading or indexing a vocabulary snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// The snapshot file could not be read.
    #[error("io error reading snapshot: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot was not valid JSON or did not match the wire format.
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// Two type entries share a name.
    #[error("duplicate type in snapshot: {name}")]
    DuplicateType {
        /// The repeated type name.
        name: String,
    },

    /// Two property entries share a name.
    #[error("duplicate property in snapshot: {name}")]
    DuplicateProperty {
        /// The repeated property name.
        name: String,
    },
}

/// Wire format of a vocabulary snapshot.
#[derive(Debug, Deserialize)]
struct Snapshot {
    #[serde(default)]
    types: Vec<TypeNode>,
    #[serde(default)]
    properties: Vec<PropertyNode>,
}

impl SchemaGraph {
    /// Loads a graph from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] if the value does not match the wire
    /// format, or a duplicate-name error from indexing.
    pub fn from_value(value: serde_json::Value) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_value(value)?;
        Self::new(snapshot.types, snapshot.properties)
    }

    /// Loads a graph from snapshot JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] on malformed input, or a
    /// duplicate-name error from indexing.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        Self::new(snapshot.types, snapshot.properties)
    }

    /// Loads a graph from a snapshot file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Io`] if the file cannot be read, plus the
    /// parse and indexing errors of [`SchemaGraph::from_json`].
    pub fn from_path(path: &Path) -> Result<Self, SnapshotError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
