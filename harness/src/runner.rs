//! Harness runner: one timed, checked coloring run.
//!
//! # Pipeline
//!
//! ```text
//! fresh regions → ColoringEngine::color_observed() [InvariantAuditor if audit]
//!   → verify_coloring() → graph/coloring digests → RunReport
//! ```

use std::time::{Duration, Instant};

use mapcolor_kernel::proof::canon::{canonical_json_bytes, CanonError};
use mapcolor_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use mapcolor_kernel::region::RegionState;
use mapcolor_search::audit::{verify_coloring, ColoringDefect, InvariantAuditor, InvariantViolation};
use mapcolor_search::engine::ColoringEngine;
use mapcolor_search::error::SearchError;
use mapcolor_search::observer::{NoopObserver, SearchObserver};
use mapcolor_search::outcome::ColoringResult;
use mapcolor_search::policy::Algorithm;
use thiserror::Error;
use tracing::info;

use crate::input::MapInstance;
use crate::output::descending_by_name;

/// Runner switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Attach an [`InvariantAuditor`] and fail on any violation.
    pub audit: bool,
}

/// Error during a harness run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("{count} search invariant violation(s); first: {first}")]
    InvariantViolations {
        count: usize,
        first: InvariantViolation,
    },
    #[error("engine reported a coloring with {count} defect(s); first: {first}")]
    InvalidColoring { count: usize, first: ColoringDefect },
    #[error("canonical JSON failed: {0}")]
    Canon(#[from] CanonError),
}

/// Everything known about a finished run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub algorithm: Algorithm,
    pub result: ColoringResult,
    /// Final region states in node order.
    pub regions: Vec<RegionState>,
    pub node_count: usize,
    pub edge_count: usize,
    /// Wall-clock time of the search call alone. Observational.
    pub elapsed: Duration,
    /// Number of events the auditor inspected (0 when auditing is off).
    pub audited_events: u64,
    /// Hash of region names and edge list.
    pub graph_digest: ContentHash,
    /// Hash of the name → color map; `None` when unsatisfiable.
    pub coloring_digest: Option<ContentHash>,
}

/// Color `instance` with `algorithm`.
///
/// # Errors
///
/// [`RunError::Search`] for engine pre-flight failures,
/// [`RunError::InvariantViolations`] if auditing found a problem,
/// [`RunError::InvalidColoring`] if the final assignment fails verification.
pub fn run(
    instance: &MapInstance,
    algorithm: Algorithm,
    options: RunOptions,
) -> Result<RunReport, RunError> {
    let engine = ColoringEngine::new(algorithm.policy())?;
    let mut regions = instance.regions();
    let mut auditor = InvariantAuditor::new();
    let mut noop = NoopObserver;
    let observer: &mut dyn SearchObserver = if options.audit {
        &mut auditor
    } else {
        &mut noop
    };

    let started = Instant::now();
    let result = engine.color_observed(&instance.graph, &mut regions, observer)?;
    let elapsed = started.elapsed();

    if let Some(first) = auditor.violations().first() {
        return Err(RunError::InvariantViolations {
            count: auditor.violations().len(),
            first: first.clone(),
        });
    }
    if result.is_colored() {
        let defects = verify_coloring(&instance.graph, &regions);
        if let Some(first) = defects.first() {
            return Err(RunError::InvalidColoring {
                count: defects.len(),
                first: first.clone(),
            });
        }
    }

    let graph_digest = graph_digest(instance)?;
    let coloring_digest = if result.is_colored() {
        Some(coloring_digest(&regions)?)
    } else {
        None
    };

    info!(
        algorithm = %algorithm.selector(),
        outcome = result.outcome.as_str(),
        attempts = result.stats.attempts,
        elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
        "run complete"
    );

    Ok(RunReport {
        algorithm,
        result,
        regions,
        node_count: instance.graph.node_count(),
        edge_count: instance.graph.edge_count(),
        elapsed,
        audited_events: auditor.events(),
        graph_digest,
        coloring_digest,
    })
}

/// `canonical_hash(GraphStructure, {"edges": [[u, v], ...], "regions": [...]})`.
///
/// # Errors
///
/// [`RunError::Canon`] if canonical serialization fails.
pub fn graph_digest(instance: &MapInstance) -> Result<ContentHash, RunError> {
    let edges: Vec<serde_json::Value> = instance
        .graph
        .edges()
        .map(|(u, v)| serde_json::json!([u, v]))
        .collect();
    let value = serde_json::json!({
        "edges": edges,
        "regions": instance.names,
    });
    let bytes = canonical_json_bytes(&value)?;
    Ok(canonical_hash(HashDomain::GraphStructure, &bytes))
}

/// `canonical_hash(Coloring, {"<name>": "<color code>", ...})`.
///
/// Independent of node order: the map is keyed by region name.
///
/// # Errors
///
/// [`RunError::Canon`] if canonical serialization fails.
pub fn coloring_digest(regions: &[RegionState]) -> Result<ContentHash, RunError> {
    let map: serde_json::Map<String, serde_json::Value> = descending_by_name(regions)
        .into_iter()
        .map(|r| {
            let color = r
                .color()
                .map_or(serde_json::Value::Null, |c| c.code().into());
            (r.name().to_string(), color)
        })
        .collect();
    let bytes = canonical_json_bytes(&serde_json::Value::Object(map))?;
    Ok(canonical_hash(HashDomain::Coloring, &bytes))
}
