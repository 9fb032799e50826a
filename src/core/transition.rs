//! Transitions between states.
//!
//! [`Transition`] is the capability any edge type exposes. Rulesets never key
//! on the caller's type directly: every transition is first flattened into an
//! [`Edge`], which has value equality and hashing.

use super::state::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A directed change from an origin state to an exit state.
///
/// # Example
///
/// ```rust
/// use guarded_fsm::core::{Edge, State, Transition};
///
/// let edge = Edge::new("idle", "running");
/// assert_eq!(edge.origin(), State::new("idle"));
/// assert_eq!(edge.exit(), State::new("running"));
///
/// // Tuples of identities are transitions too.
/// assert_eq!(("idle", "running").origin(), State::new("idle"));
/// ```
pub trait Transition {
    /// The state the transition starts from.
    fn origin(&self) -> State;

    /// The state the transition ends in.
    fn exit(&self) -> State;
}

/// Default transition: a pair of raw identities.
///
/// `Edge` is also the key type of a [`Ruleset`](crate::rules::Ruleset).
/// Edges are directional, so `idle -> running` and `running -> idle` are
/// different keys.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Edge {
    origin: String,
    exit: String,
}

impl Edge {
    /// Create an edge from two raw identities.
    pub fn new(origin: impl Into<String>, exit: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            exit: exit.into(),
        }
    }

    /// Flatten any transition into its lookup key.
    pub fn of<T: Transition + ?Sized>(transition: &T) -> Self {
        Self::new(transition.origin().id(), transition.exit().id())
    }

    /// Key for a live `(start, goal)` attempt.
    pub fn between(start: &State, goal: &State) -> Self {
        Self::new(start.id(), goal.id())
    }

    /// Raw identity of the origin state.
    pub fn origin_id(&self) -> &str {
        &self.origin
    }

    /// Raw identity of the exit state.
    pub fn exit_id(&self) -> &str {
        &self.exit
    }
}

impl Transition for Edge {
    fn origin(&self) -> State {
        State::new(self.origin.as_str())
    }

    fn exit(&self) -> State {
        State::new(self.exit.as_str())
    }
}

impl<A, B> Transition for (A, B)
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    fn origin(&self) -> State {
        State::new(self.0.as_ref())
    }

    fn exit(&self) -> State {
        State::new(self.1.as_ref())
    }
}

impl<T: Transition + ?Sized> Transition for &T {
    fn origin(&self) -> State {
        (**self).origin()
    }

    fn exit(&self) -> State {
        (**self).exit()
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.exit)
    }
}
