//! Invariant checks for a running search and for a finished coloring.
//!
//! [`InvariantAuditor`] is a [`SearchObserver`] that re-derives, at each
//! event, what the engine's incremental bookkeeping should contain and
//! records every disagreement. It costs O(N · degree) per event and is meant
//! for tests and `--audit` runs, not for production searches.

use std::cmp::Reverse;

use mapcolor_kernel::graph::ConstraintGraph;
use mapcolor_kernel::palette::Color;
use mapcolor_kernel::region::{Domain, RegionState};
use thiserror::Error;

use crate::observer::{SearchObserver, SearchView};

/// A broken search invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// An assignment matches the color of a neighbor.
    #[error("region {node} assigned {color} while neighbor {neighbor} holds it")]
    AdjacentConflict {
        node: usize,
        neighbor: usize,
        color: Color,
    },
    /// An uncolored region's domain differs from palette minus colored
    /// neighbors.
    #[error("region {node} domain {actual:?} differs from expected {expected:?}")]
    DomainDrift {
        node: usize,
        expected: Domain,
        actual: Domain,
    },
    /// The selected region was not minimal among uncolored regions.
    #[error("frontier selected region {selected} but region {better} ranks lower")]
    FrontierOrder { selected: usize, better: usize },
    /// Frontier membership disagrees with assignment state.
    #[error("frontier membership of region {node} is wrong (present: {present})")]
    FrontierMembership { node: usize, present: bool },
}

/// Observer that checks domain and frontier consistency at every event.
#[derive(Debug, Clone, Default)]
pub struct InvariantAuditor {
    violations: Vec<InvariantViolation>,
    events: u64,
}

impl InvariantAuditor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Violations recorded so far, in event order.
    #[must_use]
    pub fn violations(&self) -> &[InvariantViolation] {
        &self.violations
    }

    /// Number of events inspected.
    #[must_use]
    pub fn events(&self) -> u64 {
        self.events
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    fn check_domains(&mut self, view: &SearchView<'_>) {
        if !view.policy.forward_check {
            return;
        }
        for (node, region) in view.regions.iter().enumerate() {
            if region.is_assigned() {
                continue;
            }
            let expected = expected_domain(view.graph, view.regions, node);
            if region.domain() != expected {
                self.violations.push(InvariantViolation::DomainDrift {
                    node,
                    expected,
                    actual: region.domain(),
                });
            }
        }
    }

    fn check_selection(&mut self, view: &SearchView<'_>, selected: usize) {
        let Some(frontier) = view.frontier else {
            return;
        };
        let rank = |node: usize| {
            let region = &view.regions[node];
            let degree = if view.policy.degree_tie_break {
                view.graph.degree(node)
            } else {
                0
            };
            (region.remaining_domain_count(), Reverse(degree))
        };
        let selected_rank = rank(selected);
        for (node, region) in view.regions.iter().enumerate() {
            if node == selected {
                if frontier.contains(node) {
                    self.violations.push(InvariantViolation::FrontierMembership {
                        node,
                        present: true,
                    });
                }
                continue;
            }
            let should_be_present = !region.is_assigned();
            if frontier.contains(node) != should_be_present {
                self.violations.push(InvariantViolation::FrontierMembership {
                    node,
                    present: frontier.contains(node),
                });
            }
            if should_be_present && rank(node) < selected_rank {
                self.violations.push(InvariantViolation::FrontierOrder {
                    selected,
                    better: node,
                });
            }
        }
    }
}

impl SearchObserver for InvariantAuditor {
    fn on_select(&mut self, view: &SearchView<'_>, node: usize) {
        self.events += 1;
        self.check_domains(view);
        self.check_selection(view, node);
    }

    fn on_assign(&mut self, view: &SearchView<'_>, node: usize, color: Color) {
        self.events += 1;
        if let Some(&neighbor) = view
            .graph
            .neighbors(node)
            .iter()
            .find(|&&n| view.regions[n].color() == Some(color))
        {
            self.violations.push(InvariantViolation::AdjacentConflict {
                node,
                neighbor,
                color,
            });
        }
    }

    fn on_wipeout(&mut self, view: &SearchView<'_>, _node: usize, _color: Color) {
        self.events += 1;
        self.check_domains(view);
    }

    fn on_backtrack(&mut self, view: &SearchView<'_>, _node: usize, _color: Color) {
        self.events += 1;
        self.check_domains(view);
    }
}

/// Palette minus the colors held by `node`'s colored neighbors.
#[must_use]
pub fn expected_domain(graph: &ConstraintGraph, regions: &[RegionState], node: usize) -> Domain {
    Color::ALL
        .into_iter()
        .filter(|&c| {
            graph
                .neighbors(node)
                .iter()
                .all(|&n| regions[n].color() != Some(c))
        })
        .collect()
}

/// A defect in a finished coloring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColoringDefect {
    #[error("region {node} is uncolored")]
    Uncolored { node: usize },
    #[error("adjacent regions {u} and {v} both hold {color}")]
    Conflict { u: usize, v: usize, color: Color },
}

/// Check that every region is colored and every edge joins distinct colors.
///
/// Returns all defects found, in node then edge order. Empty means valid.
#[must_use]
pub fn verify_coloring(graph: &ConstraintGraph, regions: &[RegionState]) -> Vec<ColoringDefect> {
    let mut defects: Vec<ColoringDefect> = regions
        .iter()
        .enumerate()
        .filter(|(_, r)| !r.is_assigned())
        .map(|(node, _)| ColoringDefect::Uncolored { node })
        .collect();
    for (u, v) in graph.edges() {
        if let (Some(cu), Some(cv)) = (regions[u].color(), regions[v].color()) {
            if cu == cv {
                defects.push(ColoringDefect::Conflict { u, v, color: cu });
            }
        }
    }
    defects
}
