//! # Indexed Vocabulary Lookup
//!
//! `SchemaGraph` is the read-only lookup the validator runs against. It is
//! built once from the snapshot's node lists and never mutated: types are
//! indexed by bare name, and properties are inverted into a
//! type-name → direct-property-names index so the resolver never scans the
//! full property list while climbing an inheritance chain.

use std::collections::{HashMap, HashSet};

use crate::name::clean_name;
use crate::node::{PropertyNode, TypeNode};
use crate::snapshot::SnapshotError;

/// The full schema.org type/property graph, indexed by bare name.
///
/// Immutable after construction. One instance is expected to serve every
/// validation call for the process lifetime; concurrent reads need no
/// coordination.
#[derive(Debug, Clone)]
pub struct SchemaGraph {
    /// Types by bare name.
    types: HashMap<String, TypeNode>,
    /// All property nodes, in snapshot order.
    properties: Vec<PropertyNode>,
    /// Bare type name → names of properties declared directly on it.
    direct_props: HashMap<String, Vec<String>>,
}

impl SchemaGraph {
    /// Builds the indexed graph from node lists.
    ///
    /// Duplicate type or property names are rejected: the snapshot is
    /// supposed to define each term exactly once, and silently keeping one
    /// of the two definitions would make lookups depend on input order.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::DuplicateType`] or
    /// [`SnapshotError::DuplicateProperty`] on a repeated name.
    pub fn new(
        type_nodes: Vec<TypeNode>,
        property_nodes: Vec<PropertyNode>,
    ) -> Result<Self, SnapshotError> {
        let mut types = HashMap::with_capacity(type_nodes.len());
        for node in type_nodes {
            if let Some(existing) = types.insert(node.name.clone(), node) {
                return Err(SnapshotError::DuplicateType {
                    name: existing.name,
                });
            }
        }

        let mut direct_props: HashMap<String, Vec<String>> = HashMap::new();
        let mut seen = HashSet::with_capacity(property_nodes.len());
        for node in &property_nodes {
            if !seen.insert(node.name.clone()) {
                return Err(SnapshotError::DuplicateProperty {
                    name: node.name.clone(),
                });
            }
            for declared_on in &node.parent {
                direct_props
                    .entry(declared_on.clone())
                    .or_default()
                    .push(node.name.clone());
            }
        }

        Ok(Self {
            types,
            properties: property_nodes,
            direct_props,
        })
    }

    /// Looks up a type by bare name or schema.org URL.
    ///
    /// The input is cleaned of its URL prefix first; lookup is then an exact
    /// match on bare name. Absence is `None` — callers decide whether an
    /// unknown type is an error, a reportable finding, or tolerated.
    #[must_use]
    pub fn find_type(&self, name_or_uri: &str) -> Option<&TypeNode> {
        self.types.get(clean_name(name_or_uri))
    }

    /// Names of the properties declared *directly* on a type (no
    /// inheritance). Unknown types and types with no declared properties
    /// both yield an empty slice.
    #[must_use]
    pub fn direct_props(&self, name_or_uri: &str) -> &[String] {
        self.direct_props
            .get(clean_name(name_or_uri))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of types in the graph.
    #[must_use]
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Number of properties in the graph.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }
}
