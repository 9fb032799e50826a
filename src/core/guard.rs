//! Guard predicates for controlling state transitions.
//!
//! A guard inspects a live `(start, goal)` attempt and either lets it through
//! or vetoes it with a reason. Guards registered on the same transition are
//! evaluated concurrently and must not depend on each other.

use super::state::State;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Reasons a guard can veto a transition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GuardError {
    /// The default guard saw a start state other than the transition's origin.
    #[error("Cannot transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// A user guard refused the transition.
    #[error("{0}")]
    Rejected(String),

    /// The guard panicked before reporting an outcome.
    #[error("guard panicked before reporting an outcome")]
    Panicked,

    /// No thread could be started to evaluate the guard.
    #[error("could not start guard thread: {0}")]
    SpawnFailed(String),
}

impl GuardError {
    /// Shorthand for [`GuardError::Rejected`].
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }
}

type GuardFn = dyn Fn(&State, &State) -> Result<(), GuardError> + Send + Sync;

/// Predicate that can veto a specific transition attempt.
///
/// Guards are cheap to clone; clones share the same closure, so one guard can
/// be registered on several transitions.
///
/// # Example
///
/// ```rust
/// use guarded_fsm::core::{Guard, GuardError, State};
///
/// let not_to_archived = Guard::new(|_start: &State, goal: &State| {
///     if goal.id() == "archived" {
///         Err(GuardError::rejected("archiving is disabled"))
///     } else {
///         Ok(())
///     }
/// });
///
/// let idle = State::new("idle");
/// assert!(not_to_archived.check(&idle, &State::new("running")).is_ok());
/// assert!(not_to_archived.check(&idle, &State::new("archived")).is_err());
/// ```
#[derive(Clone)]
pub struct Guard {
    predicate: Arc<GuardFn>,
}

impl Guard {
    /// Create a guard from a closure over `(start, goal)`.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&State, &State) -> Result<(), GuardError> + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
        }
    }

    /// Create a guard from a boolean predicate, rejecting with `reason`
    /// whenever it returns `false`.
    ///
    /// ```rust
    /// use guarded_fsm::core::{Guard, State};
    ///
    /// let only_weekdays = Guard::when(|_, _| true, "closed on weekends");
    /// assert!(only_weekdays.check(&State::new("a"), &State::new("b")).is_ok());
    /// ```
    pub fn when<F>(predicate: F, reason: impl Into<String>) -> Self
    where
        F: Fn(&State, &State) -> bool + Send + Sync + 'static,
    {
        let reason = reason.into();
        Self::new(move |start, goal| {
            if predicate(start, goal) {
                Ok(())
            } else {
                Err(GuardError::Rejected(reason.clone()))
            }
        })
    }

    /// Guard that only admits attempts starting at `origin`.
    ///
    /// This is the guard [`Ruleset::add_transition`](crate::rules::Ruleset::add_transition)
    /// installs. The goal is not inspected.
    pub fn origin_is(origin: State) -> Self {
        Self::new(move |start, goal| {
            if start.id() != origin.id() {
                return Err(GuardError::InvalidTransition {
                    from: start.id().to_string(),
                    to: goal.id().to_string(),
                });
            }
            Ok(())
        })
    }

    /// Evaluate the guard for one attempt.
    pub fn check(&self, start: &State, goal: &State) -> Result<(), GuardError> {
        (self.predicate)(start, goal)
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn guard_passes_through_closure_result() {
        let guard = Guard::new(|start: &State, _goal: &State| {
            if start.id() == "idle" {
                Ok(())
            } else {
                Err(GuardError::rejected("not idle"))
            }
        });

        let goal = State::new("running");
        assert!(guard.check(&State::new("idle"), &goal).is_ok());
        assert_eq!(
            guard.check(&State::new("done"), &goal),
            Err(GuardError::Rejected("not idle".to_string()))
        );
    }

    #[test]
    fn when_rejects_with_reason() {
        let guard = Guard::when(|_, goal| goal.id() != "done", "done is closed");

        let err = guard
            .check(&State::new("running"), &State::new("done"))
            .unwrap_err();
        assert_eq!(err.to_string(), "done is closed");
    }

    #[test]
    fn origin_is_checks_start_only() {
        let guard = Guard::origin_is(State::new("idle"));

        assert!(guard.check(&State::new("idle"), &State::new("anything")).is_ok());

        let err = guard
            .check(&State::new("done"), &State::new("running"))
            .unwrap_err();
        assert_eq!(
            err,
            GuardError::InvalidTransition {
                from: "done".to_string(),
                to: "running".to_string(),
            }
        );
        assert_eq!(err.to_string(), "Cannot transition from done to running");
    }

    #[test]
    fn spawn_failure_reports_io_reason() {
        let err = GuardError::SpawnFailed("Resource temporarily unavailable".to_string());
        assert_eq!(
            err.to_string(),
            "could not start guard thread: Resource temporarily unavailable"
        );
    }

    #[test]
    fn clones_share_the_same_closure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let guard = Guard::new(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });
        let copy = guard.clone();

        let (a, b) = (State::new("a"), State::new("b"));
        guard.check(&a, &b).unwrap();
        copy.check(&a, &b).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
