//! Guarded FSM: a finite state machine engine with concurrent guards
//!
//! A machine tracks a current state and a shared ruleset. The ruleset lists
//! which edges between states exist and which guards protect each edge. A
//! transition attempt is allowed only when its edge exists and every guard on
//! it passes; guards for one attempt are evaluated concurrently.
//!
//! # Core Concepts
//!
//! - **State**: an opaque, comparable name
//! - **Transition**: a directed edge between two states
//! - **Guard**: an independent predicate that can veto an attempt
//! - **Ruleset**: the registry mapping transitions to their guards
//! - **Machine**: current state plus the ruleset it obeys
//!
//! # Example
//!
//! ```rust
//! use guarded_fsm::core::{Guard, GuardError, State};
//! use guarded_fsm::rules::create_ruleset;
//! use guarded_fsm::Machine;
//!
//! let mut rules = create_ruleset([("idle", "running"), ("running", "done")]);
//! rules.add_rule(
//!     ("running", "done"),
//!     [Guard::new(|_, _| Err(GuardError::rejected("work remaining")))],
//! );
//!
//! let mut machine = Machine::new(rules.into_shared(), State::new("idle"));
//! machine.transition(State::new("running")).unwrap();
//!
//! let err = machine.transition(State::new("done")).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Guard failed from running to done: work remaining"
//! );
//! assert_eq!(machine.state().id(), "running");
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod rules;

// Re-export commonly used types
pub use crate::builder::{BuildError, MachineBuilder, MachineConfig};
pub use crate::core::{Edge, Guard, GuardError, State, Transition};
pub use crate::machine::Machine;
pub use crate::rules::{create_ruleset, PermissionError, Ruleset, SharedRuleset};
