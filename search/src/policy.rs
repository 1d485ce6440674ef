//! Heuristic switches and the one-character algorithm selector.

use crate::error::SearchError;

/// Which heuristics the engine applies.
///
/// `Default` is plain backtracking (selector `a`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeuristicPolicy {
    /// Prune neighbor domains on assignment; abandon the variable on wipeout.
    pub forward_check: bool,
    /// Pick the next region with the fewest remaining colors.
    pub mrv: bool,
    /// Among MRV ties prefer the region with more neighbors.
    pub degree_tie_break: bool,
}

impl HeuristicPolicy {
    /// Reject switch combinations with no defined meaning.
    ///
    /// # Errors
    ///
    /// [`SearchError::UnsupportedPolicyMode`] if `degree_tie_break` is set
    /// without `mrv`.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.degree_tie_break && !self.mrv {
            return Err(SearchError::UnsupportedPolicyMode {
                detail: "degree_tie_break requires mrv".into(),
            });
        }
        Ok(())
    }

    /// Whether assignments are propagated into neighbor domains.
    ///
    /// MRV needs live domain sizes even without forward checking.
    #[must_use]
    pub fn propagates(&self) -> bool {
        self.forward_check || self.mrv
    }
}

/// The four published heuristic combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Algorithm {
    /// `a`: plain backtracking.
    #[default]
    Backtracking,
    /// `b`: backtracking with forward checking.
    ForwardChecking,
    /// `c`: forward checking with MRV ordering.
    Mrv,
    /// `d`: forward checking with MRV ordering and degree tie-break.
    MrvDegree,
}

impl Algorithm {
    /// All algorithms in selector order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Backtracking,
        Algorithm::ForwardChecking,
        Algorithm::Mrv,
        Algorithm::MrvDegree,
    ];

    /// Map a selector character. Anything other than `b`, `c`, `d` selects
    /// plain backtracking.
    #[must_use]
    pub fn from_selector(selector: char) -> Self {
        match selector {
            'b' => Self::ForwardChecking,
            'c' => Self::Mrv,
            'd' => Self::MrvDegree,
            _ => Self::Backtracking,
        }
    }

    #[must_use]
    pub fn selector(self) -> char {
        match self {
            Self::Backtracking => 'a',
            Self::ForwardChecking => 'b',
            Self::Mrv => 'c',
            Self::MrvDegree => 'd',
        }
    }

    #[must_use]
    pub fn policy(self) -> HeuristicPolicy {
        let (forward_check, mrv, degree_tie_break) = match self {
            Self::Backtracking => (false, false, false),
            Self::ForwardChecking => (true, false, false),
            Self::Mrv => (true, true, false),
            Self::MrvDegree => (true, true, true),
        };
        HeuristicPolicy {
            forward_check,
            mrv,
            degree_tie_break,
        }
    }
}

impl From<Algorithm> for HeuristicPolicy {
    fn from(algorithm: Algorithm) -> Self {
        algorithm.policy()
    }
}
