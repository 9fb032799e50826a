//! Builder API for ergonomic machine construction.
//!
//! This module provides the machine configuration, a fluent builder over it,
//! and the `ruleset!` macro for declaring transition graphs.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::{MachineBuilder, MachineConfig};
