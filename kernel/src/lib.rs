//! mapcolor kernel: the data model of a map-coloring run.
//!
//! # API Surface
//!
//! - [`palette::Color`] -- the fixed four-color palette and display names
//! - [`graph::GraphBuilder`] / [`graph::ConstraintGraph`] -- symmetric adjacency,
//!   built once and frozen before search
//! - [`region::RegionState`] -- per-node assignment, domain, and cached degree
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 content hashing
//!
//! # Module Dependency Direction
//!
//! `palette` ← `graph` ← `region` ← `proof`
//!
//! One-way only. The kernel holds no search logic; the engine lives in
//! `mapcolor_search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod graph;
pub mod palette;
pub mod proof;
pub mod region;
