//! Tree builder driving the construction lifecycle.

use tracing::{debug, info, instrument};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::phase::Phase;

/// Outcome of a single [`TreeBuilder::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// `ran` was executed and the builder moved on to `to`.
    Moved { ran: Phase, to: Phase },
    /// `ran` is terminal; the builder stays where it is.
    Stayed { ran: Phase },
}

impl Advance {
    /// Phase the builder is in after the call.
    pub fn current(&self) -> Phase {
        match *self {
            Advance::Moved { to, .. } => to,
            Advance::Stayed { ran } => ran,
        }
    }
}

/// Context of the construction state machine.
///
/// Holds exactly one active [`Phase`]. Transitions come from the phase table and
/// only move forward; every step is narrated.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    phase: Phase,
    history: Vec<Phase>,
    narration: Vec<String>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::with_phase(Phase::INITIAL)
    }

    pub fn with_phase(phase: Phase) -> Self {
        let mut builder = Self {
            phase,
            history: Vec::new(),
            narration: Vec::new(),
        };
        builder.enter(phase);
        builder
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_stopped(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Phases entered so far, oldest first.
    pub fn history(&self) -> &[Phase] {
        &self.history
    }

    pub fn narration(&self) -> &[String] {
        &self.narration
    }

    pub fn take_narration(&mut self) -> Vec<String> {
        std::mem::take(&mut self.narration)
    }

    /// Moves to `phase` explicitly. Re-entering the current phase is allowed,
    /// going backwards is not.
    #[instrument(level = "debug", skip(self), fields(from = %self.phase))]
    pub fn set_phase(&mut self, phase: Phase) -> DomainResult<()> {
        if phase != self.phase && !self.phase.can_transition_to(&phase) {
            return Err(DomainError::InvalidTransition {
                from: self.phase,
                to: phase,
            });
        }
        self.enter(phase);
        Ok(())
    }

    /// Runs the current phase, then follows the transition table.
    ///
    /// On the terminal phase the action is narrated again and nothing changes.
    #[instrument(level = "debug", skip(self), fields(phase = %self.phase))]
    pub fn advance(&mut self) -> Advance {
        let ran = self.phase;
        self.narrate(format!("{ran} phase: {}", ran.run()));

        match ran.next() {
            Some(to) => {
                self.enter(to);
                Advance::Moved { ran, to }
            }
            None => {
                debug!("already in terminal phase {}", ran);
                Advance::Stayed { ran }
            }
        }
    }

    /// Advances until the terminal phase is reached.
    pub fn run_to_completion(&mut self) -> Vec<Advance> {
        let mut steps = Vec::new();
        while !self.is_stopped() {
            steps.push(self.advance());
        }
        steps.push(self.advance());
        steps
    }

    fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        self.history.push(phase);
        self.narrate(format!("TreeBuilder: phase transition -> {phase}."));
    }

    fn narrate(&mut self, line: String) {
        info!("{}", line);
        self.narration.push(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builder_starts_splitting() {
        let builder = TreeBuilder::new();
        assert_eq!(builder.phase(), Phase::Splitting);
        assert_eq!(builder.history(), [Phase::Splitting]);
        assert_eq!(
            builder.narration(),
            ["TreeBuilder: phase transition -> Splitting."]
        );
    }

    #[test]
    fn test_advance_narrates_action_then_transition() {
        let mut builder = TreeBuilder::new();
        builder.take_narration();

        let step = builder.advance();

        assert_eq!(
            step,
            Advance::Moved {
                ran: Phase::Splitting,
                to: Phase::Pruning
            }
        );
        assert_eq!(
            builder.take_narration(),
            vec![
                "Splitting phase: Analyzing information gain and splitting nodes.".to_string(),
                "TreeBuilder: phase transition -> Pruning.".to_string(),
            ]
        );
    }

    #[test]
    fn test_set_phase_backwards_fails() {
        let mut builder = TreeBuilder::with_phase(Phase::Pruning);
        let err = builder.set_phase(Phase::Splitting).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidTransition {
                from: Phase::Pruning,
                to: Phase::Splitting
            }
        );
        assert_eq!(builder.phase(), Phase::Pruning);
    }

    #[test]
    fn test_set_phase_forward_and_same() {
        let mut builder = TreeBuilder::new();
        builder.set_phase(Phase::Splitting).unwrap();
        builder.set_phase(Phase::Stopping).unwrap();
        assert!(builder.is_stopped());
        assert_eq!(
            builder.history(),
            [Phase::Splitting, Phase::Splitting, Phase::Stopping]
        );
    }

    #[test]
    fn test_run_to_completion() {
        let mut builder = TreeBuilder::new();
        let steps = builder.run_to_completion();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps.last().map(Advance::current), Some(Phase::Stopping));
        assert!(matches!(steps[2], Advance::Stayed { ran: Phase::Stopping }));
    }
}
