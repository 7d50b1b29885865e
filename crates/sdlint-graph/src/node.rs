//! # Graph Nodes
//!
//! The two node kinds of the schema.org vocabulary graph. Both carry a
//! `parent` list, but the lists mean different things: for a type it is the
//! class hierarchy (direct supertypes), for a property it is the usage-site
//! list (every type the property is declared valid on).

use serde::{Deserialize, Serialize};

/// A schema.org type (e.g., `Person`, `CreativeWork`).
///
/// `name` is the bare name with no URL prefix. `parent` lists the direct
/// supertypes — zero or more, since schema.org uses multiple inheritance
/// natively (e.g., `LocalBusiness` is both an `Organization` and a `Place`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeNode {
    /// Bare type name, no URL prefix.
    pub name: String,
    /// Bare names of the direct supertypes.
    #[serde(default)]
    pub parent: Vec<String>,
}

/// A schema.org property (e.g., `name`, `birthDate`).
///
/// `parent` here is *not* a hierarchy: it lists every type this property is
/// declared valid on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyNode {
    /// Bare property name, no URL prefix.
    pub name: String,
    /// Bare names of the types this property is declared on.
    #[serde(default)]
    pub parent: Vec<String>,
}
