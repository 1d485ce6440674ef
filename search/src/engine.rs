//! Backtracking search over region colors.
//!
//! The search is iterative: each level of the tree is a [`DecisionFrame`] on
//! an explicit stack, and undo happens strictly in LIFO order. Per-run state
//! lives in a [`SearchContext`] owned by one [`ColoringEngine::color`] call;
//! the engine itself only holds the policy, so it can be shared freely.
//!
//! # Step for one variable
//!
//! ```text
//! for color in palette order:
//!     skip if a neighbor holds color
//!     assign; attempts += 1
//!     all regions colored? -> Colored
//!     propagate color out of uncolored neighbor domains   (fc or mrv)
//!     a neighbor domain emptied? -> undo, fail variable    (fc only)
//!     choose child (frontier pop, or node + 1); descend
//!     child failed -> undo, reinsert child into frontier, next color
//! no color left -> fail variable
//! ```
//!
//! A wipeout abandons the variable outright; remaining colors are not tried.

use mapcolor_kernel::graph::ConstraintGraph;
use mapcolor_kernel::palette::{Color, PALETTE_SIZE};
use mapcolor_kernel::region::RegionState;
use tracing::{debug, trace};

use crate::error::SearchError;
use crate::frontier::SelectionFrontier;
use crate::observer::{NoopObserver, SearchObserver, SearchView};
use crate::outcome::{ColoringOutcome, ColoringResult, SearchStats};
use crate::policy::HeuristicPolicy;

/// Map-coloring search engine configured with a validated policy.
#[derive(Debug, Clone, Copy)]
pub struct ColoringEngine {
    policy: HeuristicPolicy,
}

impl ColoringEngine {
    /// Create an engine for `policy`.
    ///
    /// # Errors
    ///
    /// [`SearchError::UnsupportedPolicyMode`] if the policy fails validation.
    pub fn new(policy: HeuristicPolicy) -> Result<Self, SearchError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    #[must_use]
    pub fn policy(&self) -> HeuristicPolicy {
        self.policy
    }

    /// Color `regions` (one per node of `graph`, in node order).
    ///
    /// On [`ColoringOutcome::Colored`] the assignment is left in `regions`.
    /// On [`ColoringOutcome::Unsatisfiable`] every region is back to
    /// uncolored with a full domain.
    ///
    /// # Errors
    ///
    /// [`SearchError::RegionCountMismatch`], [`SearchError::RegionNotPristine`]
    /// or [`SearchError::StaleDegree`] if `regions` does not describe a fresh
    /// run over `graph`.
    pub fn color(
        &self,
        graph: &ConstraintGraph,
        regions: &mut [RegionState],
    ) -> Result<ColoringResult, SearchError> {
        self.color_observed(graph, regions, &mut NoopObserver)
    }

    /// [`color`](Self::color) with an observer attached.
    ///
    /// # Errors
    ///
    /// Same as [`color`](Self::color).
    pub fn color_observed(
        &self,
        graph: &ConstraintGraph,
        regions: &mut [RegionState],
        observer: &mut dyn SearchObserver,
    ) -> Result<ColoringResult, SearchError> {
        check_regions(graph, regions)?;
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            forward_check = self.policy.forward_check,
            mrv = self.policy.mrv,
            degree_tie_break = self.policy.degree_tie_break,
            "coloring started"
        );

        let frontier = self
            .policy
            .mrv
            .then(|| SelectionFrontier::build(graph, regions, self.policy.degree_tie_break));
        let mut ctx = SearchContext {
            graph,
            regions,
            frontier,
            policy: self.policy,
            colored: 0,
            stats: SearchStats::default(),
        };
        let outcome = ctx.run(observer);
        ctx.stats.frontier_high_water = ctx
            .frontier
            .as_ref()
            .map_or(0, SelectionFrontier::high_water);

        debug!(
            outcome = outcome.as_str(),
            attempts = ctx.stats.attempts,
            backtracks = ctx.stats.backtracks,
            wipeouts = ctx.stats.wipeouts,
            max_depth = ctx.stats.max_depth,
            "coloring finished"
        );
        Ok(ColoringResult {
            outcome,
            stats: ctx.stats,
        })
    }
}

fn check_regions(graph: &ConstraintGraph, regions: &[RegionState]) -> Result<(), SearchError> {
    if regions.len() != graph.node_count() {
        return Err(SearchError::RegionCountMismatch {
            node_count: graph.node_count(),
            region_count: regions.len(),
        });
    }
    if let Some((index, region)) = regions.iter().enumerate().find(|(_, r)| !r.is_pristine()) {
        return Err(SearchError::RegionNotPristine {
            index,
            name: region.name().to_string(),
        });
    }
    for (index, region) in regions.iter().enumerate() {
        if let Some(cached) = region.cached_degree() {
            let actual = graph.degree(index);
            if cached != actual {
                return Err(SearchError::StaleDegree {
                    index,
                    name: region.name().to_string(),
                    cached,
                    actual,
                });
            }
        }
    }
    Ok(())
}

/// One level of the search tree.
#[derive(Debug, Clone, Copy)]
struct DecisionFrame {
    node: usize,
    /// Palette index of the next color to try.
    next_candidate: usize,
    /// Color currently placed on `node` while a child subtree is explored.
    assigned: Option<Color>,
    /// Region popped from the frontier for the child (MRV only).
    child: Option<usize>,
}

impl DecisionFrame {
    fn new(node: usize) -> Self {
        Self {
            node,
            next_candidate: 0,
            assigned: None,
            child: None,
        }
    }
}

/// Mutable state of one coloring run.
struct SearchContext<'a> {
    graph: &'a ConstraintGraph,
    regions: &'a mut [RegionState],
    frontier: Option<SelectionFrontier>,
    policy: HeuristicPolicy,
    colored: usize,
    stats: SearchStats,
}

impl SearchContext<'_> {
    fn run(&mut self, observer: &mut dyn SearchObserver) -> ColoringOutcome {
        let node_count = self.graph.node_count();
        if node_count == 0 {
            return ColoringOutcome::Colored;
        }
        let Some(first) = self.first_variable() else {
            return ColoringOutcome::Unsatisfiable;
        };
        observer.on_select(&self.view(), first);

        let mut stack = vec![DecisionFrame::new(first)];
        self.stats.max_depth = 1;

        while let Some(frame) = stack.last_mut() {
            let node = frame.node;

            // Returning from a failed child: undo this level's assignment.
            if let Some(color) = frame.assigned.take() {
                let child = frame.child.take();
                self.retract(node, color);
                if let (Some(child), Some(frontier)) = (child, self.frontier.as_mut()) {
                    frontier.reinsert(child, &self.regions[child]);
                }
                self.stats.backtracks += 1;
                trace!(node, color = color.code(), "backtrack");
                observer.on_backtrack(&self.view(), node, color);
            }

            let Some(color) = self.next_valid_color(node, &mut frame.next_candidate) else {
                stack.pop();
                continue;
            };

            self.regions[node].assign(color);
            self.colored += 1;
            self.stats.attempts += 1;
            observer.on_assign(&self.view(), node, color);

            if self.colored == node_count {
                return ColoringOutcome::Colored;
            }

            let wiped = self.policy.propagates() && self.propagate(node, color);
            if self.policy.forward_check && wiped {
                self.stats.wipeouts += 1;
                trace!(node, color = color.code(), "domain wipeout");
                observer.on_wipeout(&self.view(), node, color);
                self.retract(node, color);
                stack.pop();
                continue;
            }

            let Some(next) = self.next_variable(node) else {
                // Unreachable while colored < node_count; treat as a dead end.
                self.retract(node, color);
                stack.pop();
                continue;
            };
            frame.assigned = Some(color);
            frame.child = self.policy.mrv.then_some(next);

            observer.on_select(&self.view(), next);
            stack.push(DecisionFrame::new(next));
            self.stats.max_depth = self.stats.max_depth.max(stack.len());
        }

        ColoringOutcome::Unsatisfiable
    }

    fn view(&self) -> SearchView<'_> {
        SearchView {
            graph: self.graph,
            regions: self.regions,
            frontier: self.frontier.as_ref(),
            policy: self.policy,
        }
    }

    fn first_variable(&mut self) -> Option<usize> {
        match self.frontier.as_mut() {
            Some(frontier) => frontier.pop_next(),
            None => Some(0),
        }
    }

    fn next_variable(&mut self, node: usize) -> Option<usize> {
        match self.frontier.as_mut() {
            Some(frontier) => frontier.pop_next(),
            None => Some(node + 1).filter(|&n| n < self.graph.node_count()),
        }
    }

    /// First color at or after `*cursor` that no neighbor holds. Advances
    /// the cursor past the returned color.
    fn next_valid_color(&self, node: usize, cursor: &mut usize) -> Option<Color> {
        while *cursor < PALETTE_SIZE {
            let color = Color::ALL[*cursor];
            *cursor += 1;
            if self.is_color_valid(node, color) {
                return Some(color);
            }
        }
        None
    }

    fn is_color_valid(&self, node: usize, color: Color) -> bool {
        self.graph
            .neighbors(node)
            .iter()
            .all(|&n| self.regions[n].color() != Some(color))
    }

    /// Remove `color` from every uncolored neighbor of `node`.
    ///
    /// Returns `true` if any of those domains is now empty. Domains of
    /// regions that are not neighbors cannot change here, and none was empty
    /// before this assignment under forward checking, so inspecting the
    /// neighbors covers every uncolored region.
    fn propagate(&mut self, node: usize, color: Color) -> bool {
        let graph = self.graph;
        let mut wiped = false;
        for &n in graph.neighbors(node) {
            let region = &mut self.regions[n];
            if region.is_assigned() {
                continue;
            }
            if region.remove_color_from_domain(color) {
                if let Some(frontier) = self.frontier.as_mut() {
                    frontier.notify_domain_changed(n, region);
                }
            }
            wiped |= region.domain_is_empty();
        }
        wiped
    }

    /// Undo an assignment and, if propagation is on, its domain pruning.
    ///
    /// `color` goes back into a neighbor's domain only if no colored
    /// neighbor of that neighbor still holds it.
    fn retract(&mut self, node: usize, color: Color) {
        self.regions[node].unassign();
        self.colored -= 1;
        if !self.policy.propagates() {
            return;
        }
        let graph = self.graph;
        for &n in graph.neighbors(node) {
            if self.regions[n].is_assigned() || !self.is_color_valid(n, color) {
                continue;
            }
            let region = &mut self.regions[n];
            if region.restore_color_to_domain(color) {
                if let Some(frontier) = self.frontier.as_mut() {
                    frontier.notify_domain_changed(n, region);
                }
            }
        }
    }
}
