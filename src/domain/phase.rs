//! Construction phases with a fixed forward transition table.

use std::fmt;

/// Phases of tree construction: Splitting -> Pruning -> Stopping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// Choosing attributes and splitting nodes.
    Splitting,
    /// Removing branches that do not pay for their complexity.
    Pruning,
    /// Terminal: construction finished.
    Stopping,
}

impl Phase {
    pub const INITIAL: Phase = Phase::Splitting;

    /// Next phase in the table, `None` for the terminal phase.
    #[must_use]
    pub const fn next(self) -> Option<Phase> {
        match self {
            Phase::Splitting => Some(Phase::Pruning),
            Phase::Pruning => Some(Phase::Stopping),
            Phase::Stopping => None,
        }
    }

    /// All phases reachable from this one, nearest first.
    #[must_use]
    pub fn valid_transitions(&self) -> &'static [Phase] {
        match self {
            Phase::Splitting => &[Phase::Pruning, Phase::Stopping],
            Phase::Pruning => &[Phase::Stopping],
            // Stopping is terminal
            Phase::Stopping => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(&self, target: &Phase) -> bool {
        self.valid_transitions().contains(target)
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Phase::Stopping)
    }

    /// Placeholder work performed while in this phase.
    #[must_use]
    pub const fn run(&self) -> &'static str {
        match self {
            Phase::Splitting => "Analyzing information gain and splitting nodes.",
            Phase::Pruning => "Evaluating complexity and pruning unnecessary branches.",
            Phase::Stopping => "Stopping criteria reached. Construction finished.",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Splitting => write!(f, "Splitting"),
            Phase::Pruning => write!(f, "Pruning"),
            Phase::Stopping => write!(f, "Stopping"),
        }
    }
}
