//! Search result types.

/// Terminal state of a coloring run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColoringOutcome {
    /// Every region holds a color and no two neighbors share one.
    Colored,
    /// Exhaustive search found no valid coloring. Every region is left
    /// uncolored with a full domain.
    Unsatisfiable,
}

impl ColoringOutcome {
    /// Stable identifier for reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Colored => "colored",
            Self::Unsatisfiable => "unsatisfiable",
        }
    }
}

/// Observational counters. They never influence the search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Color attributions made (every tentative assignment counts).
    pub attempts: u64,
    /// Assignments undone because the subtree below them failed.
    pub backtracks: u64,
    /// Assignments abandoned because forward checking emptied a domain.
    pub wipeouts: u64,
    /// Deepest decision stack reached.
    pub max_depth: usize,
    /// Largest MRV frontier size (0 when MRV is off).
    pub frontier_high_water: usize,
}

/// Result of [`crate::engine::ColoringEngine::color`].
///
/// The assignment itself lives in the region slice passed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColoringResult {
    pub outcome: ColoringOutcome,
    pub stats: SearchStats,
}

impl ColoringResult {
    #[must_use]
    pub fn is_colored(&self) -> bool {
        self.outcome == ColoringOutcome::Colored
    }
}
