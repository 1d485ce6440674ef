//! Auditable run reports.
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   report.json          canonical JSON, normative
//!   report_digest.txt    "sha256:..." over report.json under RunReport domain
//!   timing.json          wall-clock timing, observational (never hashed)
//! ```
//!
//! `report.json` excludes every wall-clock quantity, so two runs of the same
//! instance with the same algorithm produce byte-identical reports and the
//! same digest on any machine.

use std::path::Path;

use mapcolor_kernel::palette::Color;
use mapcolor_kernel::proof::canon::{canonical_json_bytes, CanonError};
use mapcolor_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use serde_json::{json, Value};
use thiserror::Error;

use crate::output::descending_by_name;
use crate::runner::RunReport;

/// Schema tag written into every report.
pub const SCHEMA_VERSION: &str = "coloring_report.v1";

const REPORT_FILENAME: &str = "report.json";
const DIGEST_FILENAME: &str = "report_digest.txt";
const TIMING_FILENAME: &str = "timing.json";

/// Error writing or reading a report directory.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("canonical JSON error: {0}")]
    Canon(#[from] CanonError),
    #[error("report.json is not valid JSON: {detail}")]
    Parse { detail: String },
    #[error("report.json is not in canonical form")]
    NonCanonical,
    #[error("unsupported schema_version: {found}")]
    SchemaMismatch { found: String },
    #[error("malformed digest: {raw}")]
    MalformedDigest { raw: String },
    #[error("digest mismatch: stored={stored}, recomputed={recomputed}")]
    DigestMismatch { stored: String, recomputed: String },
}

impl RunReport {
    /// Normative projection of the report as a JSON value.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        let policy = self.algorithm.policy();
        let assignments: Vec<Value> = descending_by_name(&self.regions)
            .into_iter()
            .map(|r| {
                json!({
                    "name": r.name(),
                    "color": r.color().map(Color::code),
                })
            })
            .collect();
        let stats = &self.result.stats;
        json!({
            "schema_version": SCHEMA_VERSION,
            "algorithm": self.algorithm.selector().to_string(),
            "policy": {
                "forward_check": policy.forward_check,
                "mrv": policy.mrv,
                "degree_tie_break": policy.degree_tie_break,
            },
            "outcome": self.result.outcome.as_str(),
            "assignments": assignments,
            "stats": {
                "attempts": stats.attempts,
                "backtracks": stats.backtracks,
                "wipeouts": stats.wipeouts,
                "max_depth": stats.max_depth,
                "frontier_high_water": stats.frontier_high_water,
            },
            "node_count": self.node_count,
            "edge_count": self.edge_count,
            "graph_digest": self.graph_digest.as_str(),
            "coloring_digest": self.coloring_digest.as_ref().map(ContentHash::as_str),
        })
    }

    /// Canonical bytes of [`RunReport::to_json_value`].
    ///
    /// # Errors
    ///
    /// [`CanonError`] if a value is not canonicalizable.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Digest of the canonical report bytes.
    ///
    /// # Errors
    ///
    /// [`CanonError`] if a value is not canonicalizable.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(
            HashDomain::RunReport,
            &self.to_canonical_json_bytes()?,
        ))
    }
}

/// Write `report` into `dir`, creating it if needed. Returns the digest.
///
/// # Errors
///
/// [`ReportError::Io`] on filesystem failure, [`ReportError::Canon`] if the
/// report cannot be canonicalized.
pub fn write_report_dir(report: &RunReport, dir: &Path) -> Result<ContentHash, ReportError> {
    std::fs::create_dir_all(dir).map_err(|source| ReportError::Io {
        path: dir.display().to_string(),
        source,
    })?;

    let bytes = report.to_canonical_json_bytes()?;
    let digest = canonical_hash(HashDomain::RunReport, &bytes);
    let timing = canonical_json_bytes(&json!({
        "elapsed_ns": u64::try_from(report.elapsed.as_nanos()).unwrap_or(u64::MAX),
    }))?;

    write_atomic(&dir.join(REPORT_FILENAME), &bytes)?;
    write_atomic(&dir.join(DIGEST_FILENAME), digest.as_str().as_bytes())?;
    write_atomic(&dir.join(TIMING_FILENAME), &timing)?;
    Ok(digest)
}

/// Read `report.json` and `report_digest.txt` from `dir` and verify them.
///
/// Fails closed: the report must be canonical, carry the expected schema
/// tag, and hash to the stored digest.
///
/// # Errors
///
/// Any [`ReportError`] variant describing the first check that failed.
pub fn read_report_digest(dir: &Path) -> Result<ContentHash, ReportError> {
    let bytes = read_file(&dir.join(REPORT_FILENAME))?;
    let stored_raw = read_file(&dir.join(DIGEST_FILENAME))?;
    let stored_str = String::from_utf8_lossy(&stored_raw).trim().to_string();
    let stored = ContentHash::parse(&stored_str).ok_or_else(|| ReportError::MalformedDigest {
        raw: stored_str.clone(),
    })?;

    let value: Value = serde_json::from_slice(&bytes).map_err(|e| ReportError::Parse {
        detail: e.to_string(),
    })?;
    if canonical_json_bytes(&value)? != bytes {
        return Err(ReportError::NonCanonical);
    }
    let schema = value["schema_version"].as_str().unwrap_or("");
    if schema != SCHEMA_VERSION {
        return Err(ReportError::SchemaMismatch {
            found: schema.to_string(),
        });
    }

    let recomputed = canonical_hash(HashDomain::RunReport, &bytes);
    if recomputed != stored {
        return Err(ReportError::DigestMismatch {
            stored: stored.as_str().to_string(),
            recomputed: recomputed.as_str().to_string(),
        });
    }
    Ok(recomputed)
}

/// Write via temp file + rename so readers never see a partial file.
fn write_atomic(path: &Path, content: &[u8]) -> Result<(), ReportError> {
    let io_err = |source| ReportError::Io {
        path: path.display().to_string(),
        source,
    };
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = path.with_file_name(format!(".tmp_{file_name}"));
    std::fs::write(&temp_path, content).map_err(io_err)?;
    std::fs::rename(&temp_path, path).map_err(io_err)
}

fn read_file(path: &Path) -> Result<Vec<u8>, ReportError> {
    std::fs::read(path).map_err(|source| ReportError::Io {
        path: path.display().to_string(),
        source,
    })
}
