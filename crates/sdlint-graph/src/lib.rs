//! # sdlint-graph — The schema.org Vocabulary Graph
//!
//! This crate holds the static type/property graph the linter validates
//! against. It is loaded once from a JSON snapshot of the schema.org
//! vocabulary and is read-only for the remainder of the process.
//!
//! - **Nodes** (`node.rs`): `TypeNode` (a schema.org type and its direct
//!   supertypes) and `PropertyNode` (a property and the types it is declared
//!   valid on).
//!
//! - **Names** (`name.rs`): schema.org URL prefix handling — `clean_name`
//!   and `is_schema_org_url`.
//!
//! - **Graph** (`graph.rs`): `SchemaGraph`, the indexed lookup over all
//!   nodes. Exact bare-name lookup; absence is `None`, never a panic.
//!
//! - **Snapshot** (`snapshot.rs`): the JSON wire format and loaders.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `sdlint-*` crates (leaf of the DAG).
//! - `SchemaGraph` is immutable after construction; sharing it across
//!   threads requires no locking.
//! - Parent references to types absent from the snapshot are tolerated:
//!   lookups report them as unknown rather than failing.

pub mod graph;
pub mod name;
pub mod node;
pub mod snapshot;

pub use graph::SchemaGraph;
pub use name::{clean_name, is_schema_org_url};
pub use node::{PropertyNode, TypeNode};
pub use snapshot::SnapshotError;
