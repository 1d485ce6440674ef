//! MRV selection frontier: an indexable min-heap over uncolored regions.
//!
//! Ordering key is `(remaining domain size, larger degree first, node index)`.
//! The degree component is neutral unless degree tie-break is enabled; the
//! node index makes the order total so pops are deterministic.
//!
//! Every heap slot is mirrored in `slots` (node → heap position), so a key
//! update is a sift in place instead of a scan-and-remove.

use std::cmp::Reverse;

use mapcolor_kernel::graph::ConstraintGraph;
use mapcolor_kernel::region::RegionState;

/// Ordering key of a region in the frontier. Lower pops first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub remaining: usize,
    pub degree_rank: Reverse<usize>,
    pub node: usize,
}

/// Priority structure over not-yet-colored regions.
#[derive(Debug, Clone)]
pub struct SelectionFrontier {
    heap: Vec<usize>,
    slots: Vec<Option<usize>>,
    keys: Vec<FrontierKey>,
    degree_tie_break: bool,
    high_water: usize,
}

impl SelectionFrontier {
    /// Build a frontier holding every uncolored region.
    ///
    /// With `degree_tie_break` the degree of every region is computed (and
    /// cached in the region) up front.
    #[must_use]
    pub fn build(
        graph: &ConstraintGraph,
        regions: &mut [RegionState],
        degree_tie_break: bool,
    ) -> Self {
        let n = regions.len();
        let mut keys = Vec::with_capacity(n);
        for (node, region) in regions.iter_mut().enumerate() {
            if degree_tie_break {
                region.degree(node, graph);
            }
            keys.push(Self::make_key(node, region, degree_tie_break));
        }
        let mut frontier = Self {
            heap: Vec::with_capacity(n),
            slots: vec![None; n],
            keys,
            degree_tie_break,
            high_water: 0,
        };
        for (node, region) in regions.iter().enumerate() {
            if !region.is_assigned() {
                frontier.push(node);
            }
        }
        frontier
    }

    fn make_key(node: usize, region: &RegionState, degree_tie_break: bool) -> FrontierKey {
        let degree = if degree_tie_break {
            region.cached_degree().unwrap_or_default()
        } else {
            0
        };
        FrontierKey {
            remaining: region.remaining_domain_count(),
            degree_rank: Reverse(degree),
            node,
        }
    }

    /// Remove and return the region with the smallest key.
    pub fn pop_next(&mut self) -> Option<usize> {
        let top = *self.heap.first()?;
        let last = self.heap.pop()?;
        self.slots[top] = None;
        if last != top {
            self.heap[0] = last;
            self.slots[last] = Some(0);
            self.sift_down(0);
        }
        Some(top)
    }

    /// The region [`pop_next`](Self::pop_next) would return.
    #[must_use]
    pub fn peek(&self) -> Option<usize> {
        self.heap.first().copied()
    }

    /// Refresh the key of `node` after its domain changed.
    ///
    /// Returns `false` (and does nothing) if `node` is not in the frontier.
    pub fn notify_domain_changed(&mut self, node: usize, region: &RegionState) -> bool {
        let Some(slot) = self.slots[node] else {
            return false;
        };
        let old = self.keys[node];
        let new = Self::make_key(node, region, self.degree_tie_break);
        self.keys[node] = new;
        if new < old {
            self.sift_up(slot);
        } else if new > old {
            self.sift_down(slot);
        }
        true
    }

    /// Put a previously popped region back, keyed on its current domain.
    pub fn reinsert(&mut self, node: usize, region: &RegionState) {
        if self.notify_domain_changed(node, region) {
            return;
        }
        self.keys[node] = Self::make_key(node, region, self.degree_tie_break);
        self.push(node);
    }

    #[must_use]
    pub fn contains(&self, node: usize) -> bool {
        self.slots.get(node).is_some_and(Option::is_some)
    }

    /// Current key of `node`, if present.
    #[must_use]
    pub fn key(&self, node: usize) -> Option<FrontierKey> {
        self.contains(node).then(|| self.keys[node])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier has reached.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Present regions in heap order (not pop order).
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.heap.iter().copied()
    }

    fn push(&mut self, node: usize) {
        let slot = self.heap.len();
        self.heap.push(node);
        self.slots[node] = Some(slot);
        self.sift_up(slot);
        self.high_water = self.high_water.max(self.heap.len());
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.keys[self.heap[a]] < self.keys[self.heap[b]]
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slots[self.heap[a]] = Some(a);
        self.slots[self.heap[b]] = Some(b);
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(i, parent) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }
}
