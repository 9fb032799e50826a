//! Configuration and builder for constructing machines.

use crate::builder::error::BuildError;
use crate::core::State;
use crate::machine::Machine;
use crate::rules::{Ruleset, SharedRuleset};

/// Everything a machine needs, handed over in one piece.
///
/// Both fields are required; [`Machine::with_config`] rejects a config with
/// either one missing.
#[derive(Debug, Default)]
pub struct MachineConfig {
    /// Ruleset the machine consults on every transition.
    pub rules: Option<SharedRuleset>,
    /// State the machine starts in.
    pub initial: Option<State>,
}

/// Builder for constructing machines with a fluent API.
pub struct MachineBuilder {
    config: MachineConfig,
}

impl MachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: MachineConfig::default(),
        }
    }

    /// Use an already shared ruleset (required, or use [`ruleset`](Self::ruleset)).
    pub fn rules(mut self, rules: SharedRuleset) -> Self {
        self.config.rules = Some(rules);
        self
    }

    /// Take ownership of a ruleset and share it with the machine.
    pub fn ruleset(self, rules: Ruleset) -> Self {
        self.rules(rules.into_shared())
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<State>) -> Self {
        self.config.initial = Some(state.into());
        self
    }

    /// Build the machine.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Machine, BuildError> {
        Machine::with_config(self.config)
    }
}

impl Default for MachineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
