//! # sdlint-cli — Linter Command Line
//!
//! Library side of the `sdlint` binary: report rendering lives here so it
//! can be unit-tested without spawning the binary.

pub mod report;
