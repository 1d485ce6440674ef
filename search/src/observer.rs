//! Read-only hooks into a running search.

use mapcolor_kernel::graph::ConstraintGraph;
use mapcolor_kernel::palette::Color;
use mapcolor_kernel::region::RegionState;

use crate::frontier::SelectionFrontier;
use crate::policy::HeuristicPolicy;

/// Snapshot of search state handed to observers.
#[derive(Debug, Clone, Copy)]
pub struct SearchView<'a> {
    pub graph: &'a ConstraintGraph,
    pub regions: &'a [RegionState],
    /// Present only when MRV is enabled.
    pub frontier: Option<&'a SelectionFrontier>,
    pub policy: HeuristicPolicy,
}

/// Callbacks fired by the engine. All default to no-ops.
///
/// # Contract
///
/// - `on_select` fires after a region has been chosen as the next variable
///   (and popped from the frontier under MRV), before any color is tried.
/// - `on_assign` fires right after a color is placed, before propagation.
/// - `on_wipeout` fires after propagation emptied a domain, before undo.
/// - `on_backtrack` fires after an assignment and its propagation have been
///   undone because the subtree below it failed.
pub trait SearchObserver {
    fn on_select(&mut self, _view: &SearchView<'_>, _node: usize) {}

    fn on_assign(&mut self, _view: &SearchView<'_>, _node: usize, _color: Color) {}

    fn on_wipeout(&mut self, _view: &SearchView<'_>, _node: usize, _color: Color) {}

    fn on_backtrack(&mut self, _view: &SearchView<'_>, _node: usize, _color: Color) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}
