//! # Property Resolution
//!
//! Computes the allow-list for a type: every property declared directly on
//! it plus everything inherited from every transitive ancestor.
//!
//! The schema.org hierarchy is finite and acyclic as published, but the
//! climb carries an explicit visited set anyway — a revisited type
//! contributes no additional properties, so a cyclic snapshot degrades to a
//! no-op instead of unbounded recursion.

use std::collections::{BTreeSet, HashSet};

use sdlint_graph::{clean_name, SchemaGraph};
use thiserror::Error;

/// A type name used in property resolution does not exist in the graph.
///
/// Callers that validate documents check type existence *before* resolving
/// properties, so this reaching a document-validation caller indicates a
/// contract violation between those steps, not a bad document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown schema.org type: {name}")]
pub struct UnknownType {
    /// The cleaned type name that failed lookup.
    pub name: String,
}

/// Returns every property name valid for a type, including inherited ones.
///
/// The input may be a bare name or a schema.org URL. An empty result is
/// normal for a leaf type with no declared properties and no parents.
/// Ancestors referenced by the type but absent from the graph contribute
/// nothing; only the root type of the call is required to exist.
///
/// # Errors
///
/// Returns [`UnknownType`] when the type itself is not in the graph.
pub fn props_for_type(
    graph: &SchemaGraph,
    name_or_uri: &str,
) -> Result<BTreeSet<String>, UnknownType> {
    let bare = clean_name(name_or_uri);
    if graph.find_type(bare).is_none() {
        return Err(UnknownType {
            name: bare.to_string(),
        });
    }

    let mut props = BTreeSet::new();
    let mut visited = HashSet::new();
    collect(graph, bare, &mut visited, &mut props);
    Ok(props)
}

fn collect(
    graph: &SchemaGraph,
    name: &str,
    visited: &mut HashSet<String>,
    props: &mut BTreeSet<String>,
) {
    if !visited.insert(name.to_string()) {
        return;
    }
    for prop in graph.direct_props(name) {
        props.insert(prop.clone());
    }
    if let Some(node) = graph.find_type(name) {
        for parent in &node.parent {
            collect(graph, parent, visited, props);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn graph() -> SchemaGraph {
        SchemaGraph::from_value(json!({
            "types": [
                { "name": "Thing", "parent": [] },
                { "name": "Person", "parent": ["Thing"] },
                { "name": "Place", "parent": ["Thing"] },
                { "name": "Organization", "parent": ["Thing"] },
                { "name": "LocalBusiness", "parent": ["Organization", "Place"] },
                { "name": "Bare", "parent": [] },
                { "name": "Orphaned", "parent": ["DoesNotExist"] }
            ],
            "properties": [
                { "name": "name", "parent": ["Thing"] },
                { "name": "birthDate", "parent": ["Person"] },
                { "name": "address", "parent": ["Organization", "Place", "Person"] },
                { "name": "openingHours", "parent": ["LocalBusiness"] }
            ]
        }))
        .unwrap()
    }

    fn props(graph: &SchemaGraph, name: &str) -> BTreeSet<String> {
        props_for_type(graph, name).unwrap()
    }

    #[test]
    fn leaf_type_with_nothing_declared_is_empty() {
        assert!(props(&graph(), "Bare").is_empty());
    }

    #[test]
    fn direct_properties_are_included() {
        assert!(props(&graph(), "Thing").contains("name"));
    }

    #[test]
    fn inherited_properties_are_included() {
        let person = props(&graph(), "Person");
        assert!(person.contains("name"));
        assert!(person.contains("birthDate"));
        assert!(!person.contains("openingHours"));
    }

    #[test]
    fn closure_is_monotonic_over_parents() {
        let g = graph();
        let child = props(&g, "LocalBusiness");
        for parent in ["Organization", "Place", "Thing"] {
            assert!(
                child.is_superset(&props(&g, parent)),
                "props(LocalBusiness) should include all of props({parent})"
            );
        }
    }

    #[test]
    fn multiple_inheritance_unions_both_chains() {
        let business = props(&graph(), "LocalBusiness");
        assert!(business.contains("openingHours"));
        assert!(business.contains("address"));
        assert!(business.contains("name"));
    }

    #[test]
    fn resolves_url_spelled_types() {
        assert_eq!(
            props_for_type(&graph(), "http://schema.org/Person").unwrap(),
            props(&graph(), "Person")
        );
    }

    #[test]
    fn unknown_root_type_is_an_error() {
        let err = props_for_type(&graph(), "DoesNotExist").unwrap_err();
        assert_eq!(err.name, "DoesNotExist");
    }

    #[test]
    fn unknown_ancestor_contributes_nothing() {
        // "Orphaned" exists but points at a missing supertype; resolution
        // succeeds with only what the graph actually knows.
        assert!(props(&graph(), "Orphaned").is_empty());
    }

    #[test]
    fn cyclic_snapshot_terminates() {
        let cyclic = SchemaGraph::from_value(json!({
            "types": [
                { "name": "A", "parent": ["B"] },
                { "name": "B", "parent": ["A"] }
            ],
            "properties": [
                { "name": "x", "parent": ["A"] },
                { "name": "y", "parent": ["B"] }
            ]
        }))
        .unwrap();

        let a = props_for_type(&cyclic, "A").unwrap();
        assert!(a.contains("x"));
        assert!(a.contains("y"));
    }
}
