//! Per-node search state: assignment, color domain, cached degree.
//!
//! A region's position in the region slice is its node index in the
//! [`ConstraintGraph`]. The search engine is the only code that mutates
//! assignments and domains during a run.

use crate::graph::ConstraintGraph;
use crate::palette::{Color, PALETTE_SIZE};

const FULL_MASK: u8 = (1u8 << PALETTE_SIZE) - 1;

/// Set of palette colors, one bit per [`Color::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Domain(u8);

impl Domain {
    /// Every palette color.
    pub const FULL: Domain = Domain(FULL_MASK);
    /// No colors.
    pub const EMPTY: Domain = Domain(0);

    #[must_use]
    pub fn contains(self, color: Color) -> bool {
        self.0 & (1 << color.index()) != 0
    }

    /// Add `color`. Returns `true` if it was absent.
    pub fn insert(&mut self, color: Color) -> bool {
        let absent = !self.contains(color);
        self.0 |= 1 << color.index();
        absent
    }

    /// Remove `color`. Returns `true` if it was present.
    pub fn remove(&mut self, color: Color) -> bool {
        let present = self.contains(color);
        self.0 &= !(1 << color.index());
        present
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in palette order.
    pub fn iter(self) -> impl Iterator<Item = Color> {
        Color::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::FULL
    }
}

impl FromIterator<Color> for Domain {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut domain = Domain::EMPTY;
        for c in iter {
            domain.insert(c);
        }
        domain
    }
}

/// Mutable state of one region (graph node).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionState {
    name: String,
    color: Option<Color>,
    domain: Domain,
    degree: Option<usize>,
}

impl RegionState {
    /// A fresh region: uncolored, full domain, degree not yet computed.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
            domain: Domain::FULL,
            degree: None,
        }
    }

    /// Identity key of the region.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    #[must_use]
    pub fn is_assigned(&self) -> bool {
        self.color.is_some()
    }

    /// Set the assignment. Engine-only.
    pub fn assign(&mut self, color: Color) {
        self.color = Some(color);
    }

    /// Clear the assignment. Engine-only.
    pub fn unassign(&mut self) {
        self.color = None;
    }

    #[must_use]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Mark `color` unavailable. No-op if already unavailable.
    ///
    /// Returns `true` if the domain changed.
    pub fn remove_color_from_domain(&mut self, color: Color) -> bool {
        self.domain.remove(color)
    }

    /// Mark `color` available again.
    ///
    /// The caller must already have checked that no colored neighbor still
    /// holds `color`. Returns `true` if the domain changed.
    pub fn restore_color_to_domain(&mut self, color: Color) -> bool {
        self.domain.insert(color)
    }

    #[must_use]
    pub fn remaining_domain_count(&self) -> usize {
        self.domain.len()
    }

    #[must_use]
    pub fn domain_is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    /// Neighbor count of `node`, computed from `graph` on first call and
    /// cached afterwards.
    pub fn degree(&mut self, node: usize, graph: &ConstraintGraph) -> usize {
        *self.degree.get_or_insert_with(|| graph.degree(node))
    }

    /// The cached degree, if it has been computed.
    #[must_use]
    pub fn cached_degree(&self) -> Option<usize> {
        self.degree
    }

    /// Uncolored with a full domain.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self.color.is_none() && self.domain == Domain::FULL
    }

    /// Return to the pristine state. The cached degree is dropped, so the
    /// region can be reused on a different graph.
    pub fn reset(&mut self) {
        self.color = None;
        self.domain = Domain::FULL;
        self.degree = None;
    }
}

/// Build one pristine region per name, in order.
#[must_use]
pub fn regions_from_names<S: AsRef<str>>(names: &[S]) -> Vec<RegionState> {
    names.iter().map(|n| RegionState::new(n.as_ref())).collect()
}
