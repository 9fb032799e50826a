//! State identity for machine states.
//!
//! A state is nothing more than an opaque, comparable name. Two states are
//! equal exactly when their identities are equal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named point in a workflow.
///
/// States are immutable once constructed. The identity is the only thing a
/// state carries, and [`State::id`] is the only way to read it.
///
/// # Example
///
/// ```rust
/// use guarded_fsm::core::State;
///
/// let idle = State::new("idle");
/// assert_eq!(idle.id(), "idle");
/// assert_eq!(idle, State::from("idle"));
/// assert_ne!(idle, State::new("running"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State {
    id: String,
}

impl State {
    /// Create a state from a raw identity value.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// The state's identity.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl From<&str> for State {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for State {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}
