//! mapcolor search: backtracking map-coloring engine.
//!
//! Depends only on `mapcolor_kernel`.
//!
//! # Crate dependency graph
//!
//! ```text
//! mapcolor_kernel  ←  mapcolor_search  ←  mapcolor_harness
//! (graph, regions)    (engine, frontier)   (input, output, runner)
//! ```
//!
//! # Key types
//!
//! - [`HeuristicPolicy`](policy::HeuristicPolicy): forward checking / MRV / degree switches
//! - [`SelectionFrontier`](frontier::SelectionFrontier): indexable MRV priority heap
//! - [`ColoringEngine`](engine::ColoringEngine): iterative backtracking search
//! - [`SearchObserver`](observer::SearchObserver): read-only hooks into a running search
//! - [`InvariantAuditor`](audit::InvariantAuditor): observer that checks search invariants

#![forbid(unsafe_code)]

pub mod audit;
pub mod engine;
pub mod error;
pub mod frontier;
pub mod observer;
pub mod outcome;
pub mod policy;
