//! # sdlint-validate — schema.org Conformance Checking
//!
//! The core of the structured-data linter. Given an expanded JSON-LD
//! document and the vocabulary graph from `sdlint-graph`, it reports every
//! object property that is not valid for the types its node declares,
//! accounting for inheritance between types.
//!
//! - **Resolver** (`resolve.rs`): transitive closure of allowed property
//!   names over the type hierarchy.
//!
//! - **Keys** (`keys.rs`): per-node key validation — the `@type` boundary
//!   parsing, the unknown-type short-circuit, and key normalization.
//!
//! - **Document** (`document.rs`): walker-driven traversal producing
//!   path-qualified [`ValidationError`]s.
//!
//! ## Crate Policy
//!
//! - Only property *names* are checked, never values; JSON-LD syntax is
//!   assumed already validated by the expansion step.
//! - Nothing is thrown to the document-validator caller: every reportable
//!   condition is an entry in the returned error list. A non-empty result
//!   means "the document has conformance issues", not "the linter failed".
//! - The graph is borrowed read-only; calls are stateless and may run
//!   concurrently against one shared graph.

pub mod document;
pub mod keys;
pub mod resolve;

pub use document::{validate_document, ValidationError, TYPE_KEYWORD};
pub use keys::{validate_object_keys, TypeDecl};
pub use resolve::{props_for_type, UnknownType};
