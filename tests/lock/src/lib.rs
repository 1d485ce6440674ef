//! Shared helpers for the cross-crate lock tests and fixture binaries.

pub mod graph_helpers;
