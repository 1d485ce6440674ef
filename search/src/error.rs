//! Typed search errors.
//!
//! `SearchError` covers pre-flight contract violations only. An instance
//! with no valid coloring is not an error; it is reported as
//! [`crate::outcome::ColoringOutcome::Unsatisfiable`].

use thiserror::Error;

/// Pre-flight failure: no search step has been taken when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The policy combines switches that have no defined meaning.
    #[error("unsupported policy mode: {detail}")]
    UnsupportedPolicyMode { detail: String },
    /// The region list does not line up with the graph's nodes.
    #[error("graph has {node_count} nodes but {region_count} regions were supplied")]
    RegionCountMismatch {
        node_count: usize,
        region_count: usize,
    },
    /// A region is already colored or has a narrowed domain, meaning the list
    /// belongs to another run or was not reset.
    #[error("region {index} ({name}) is not uncolored with a full domain")]
    RegionNotPristine { index: usize, name: String },
    /// A region carries a degree cached from a different graph.
    #[error("region {index} ({name}) caches degree {cached} but has degree {actual} in this graph")]
    StaleDegree {
        index: usize,
        name: String,
        cached: usize,
        actual: usize,
    },
}
