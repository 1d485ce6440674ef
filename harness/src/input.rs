//! Parser for the line-oriented map description.
//!
//! ```text
//! 3 a
//! A: B, C.
//! B: A, C.
//! C: A, B.
//! ```
//!
//! The header holds the number of declaration lines and a one-character
//! algorithm selector. Each declaration names a region followed by its
//! neighbors; fields are separated by runs of `:`, `,` and `.`. Names are
//! deduplicated by exact string identity and numbered in order of first
//! appearance.

use std::collections::HashMap;

use mapcolor_kernel::graph::{ConstraintGraph, GraphBuilder};
use mapcolor_kernel::region::{regions_from_names, RegionState};
use mapcolor_search::policy::Algorithm;
use thiserror::Error;

const SEPARATORS: [char; 3] = [':', ',', '.'];

/// A parsed map: region names in node order plus their adjacency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapInstance {
    /// Algorithm requested by the header selector.
    pub algorithm: Algorithm,
    /// Region names; position is the node index.
    pub names: Vec<String>,
    pub graph: ConstraintGraph,
}

impl MapInstance {
    /// Fresh region states for a run over this instance.
    #[must_use]
    pub fn regions(&self) -> Vec<RegionState> {
        regions_from_names(&self.names)
    }
}

/// Malformed map description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("input is empty")]
    Empty,
    #[error("line {line}: invalid region count {raw:?}")]
    InvalidCount { line: usize, raw: String },
    #[error("expected {expected} region declarations, found {found}")]
    MissingDeclarations { expected: usize, found: usize },
    #[error("line {line}: declaration has no region name")]
    MissingRegionName { line: usize },
    #[error("line {line}: region {name:?} lists itself as a neighbor")]
    SelfNeighbor { line: usize, name: String },
}

/// Parse a full map description.
///
/// # Errors
///
/// Returns [`InputError`] for a missing or malformed header, too few
/// declarations, a declaration without a name, or a self-adjacent region.
///
/// # Panics
///
/// Never in practice; every edge joins two distinct interned names.
pub fn parse_instance(text: &str) -> Result<MapInstance, InputError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (header_line, header) = lines.next().ok_or(InputError::Empty)?;
    let mut tokens = header.split_whitespace();
    let raw_count = tokens.next().unwrap_or_default();
    let declared: usize = raw_count.parse().map_err(|_| InputError::InvalidCount {
        line: header_line,
        raw: raw_count.to_string(),
    })?;
    let algorithm = tokens
        .next()
        .and_then(|t| t.chars().next())
        .map_or_else(Algorithm::default, Algorithm::from_selector);

    let mut names = NameTable::default();
    let mut edges: Vec<(usize, usize)> = Vec::new();
    let mut found = 0;
    for (line_no, line) in lines.take(declared) {
        found += 1;
        let (head, rest) = line.split_once(SEPARATORS).unwrap_or((line, ""));
        let region_name = head.trim();
        if region_name.is_empty() {
            return Err(InputError::MissingRegionName { line: line_no });
        }
        let region = names.intern(region_name);
        let neighbors = rest
            .split(SEPARATORS)
            .map(str::trim)
            .filter(|f| !f.is_empty());
        for neighbor_name in neighbors {
            if neighbor_name == region_name {
                return Err(InputError::SelfNeighbor {
                    line: line_no,
                    name: region_name.to_string(),
                });
            }
            edges.push((region, names.intern(neighbor_name)));
        }
    }
    if found < declared {
        return Err(InputError::MissingDeclarations {
            expected: declared,
            found,
        });
    }

    let mut builder = GraphBuilder::new(names.len());
    for (u, v) in edges {
        // Indices come from the name table and self-edges were rejected above.
        builder
            .add_edge(u, v)
            .expect("indices interned and distinct");
    }
    Ok(MapInstance {
        algorithm,
        names: names.into_names(),
        graph: builder.build(),
    })
}

/// First-appearance numbering of region names.
#[derive(Debug, Default)]
struct NameTable {
    index: HashMap<String, usize>,
    names: Vec<String>,
}

impl NameTable {
    fn intern(&mut self, name: &str) -> usize {
        if let Some(&i) = self.index.get(name) {
            return i;
        }
        let i = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), i);
        i
    }

    fn len(&self) -> usize {
        self.names.len()
    }

    fn into_names(self) -> Vec<String> {
        self.names
    }
}
