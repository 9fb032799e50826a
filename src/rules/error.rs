//! Errors produced by the permission check.

use crate::core::GuardError;
use thiserror::Error;

/// Why a `(start, goal)` attempt was refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PermissionError {
    /// No rule is registered for the attempted edge.
    #[error("No rules found for {start} to {goal}")]
    NoRules { start: String, goal: String },

    /// A registered guard vetoed the attempt.
    #[error("Guard failed from {start} to {goal}: {source}")]
    GuardFailed {
        start: String,
        goal: String,
        #[source]
        source: GuardError,
    },
}

impl PermissionError {
    /// True for the structural rejection (missing rule).
    pub fn is_no_rules(&self) -> bool {
        matches!(self, Self::NoRules { .. })
    }

    /// True when a guard refused the transition.
    pub fn is_guard_failure(&self) -> bool {
        matches!(self, Self::GuardFailed { .. })
    }

    /// The guard's own error, if a guard caused the rejection.
    pub fn guard_error(&self) -> Option<&GuardError> {
        match self {
            Self::GuardFailed { source, .. } => Some(source),
            Self::NoRules { .. } => None,
        }
    }
}
