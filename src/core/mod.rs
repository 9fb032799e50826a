//! Core identity and predicate types.
//!
//! This module contains the leaves of the engine:
//! - `State`, an opaque comparable name
//! - `Transition` and its default `Edge` implementation
//! - `Guard` predicates and the `GuardError` they report

mod guard;
mod state;
mod transition;

pub use guard::{Guard, GuardError};
pub use state::State;
pub use transition::{Edge, Transition};
