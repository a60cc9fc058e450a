//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::node::NodeKind;
use crate::domain::phase::Phase;

/// Domain errors represent misuse of the tree or of the builder lifecycle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid operation: {operation} is not supported on {kind}")]
    InvalidOperation {
        operation: &'static str,
        kind: NodeKind,
    },

    #[error("invalid phase transition: {from} -> {to}")]
    InvalidTransition { from: Phase, to: Phase },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
