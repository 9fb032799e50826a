//! Stateful machine that applies a ruleset to transition attempts.

use crate::builder::{BuildError, MachineConfig};
use crate::core::State;
use crate::rules::{evaluate, PermissionError, SharedRuleset};
use tracing::info;

/// Pairs a shared ruleset with a current state.
///
/// The ruleset is shared, not owned: rules can be changed through the same
/// [`SharedRuleset`] handle between transitions. The current state only
/// changes through a successful [`Machine::transition`].
///
/// # Example
///
/// ```rust
/// use guarded_fsm::builder::MachineBuilder;
/// use guarded_fsm::core::State;
/// use guarded_fsm::ruleset;
///
/// let mut machine = MachineBuilder::new()
///     .ruleset(ruleset!["idle" => "running", "running" => "done"])
///     .initial(State::new("idle"))
///     .build()
///     .unwrap();
///
/// machine.transition(State::new("running")).unwrap();
/// assert_eq!(machine.state().id(), "running");
///
/// let err = machine.transition(State::new("idle")).unwrap_err();
/// assert!(err.is_no_rules());
/// assert_eq!(machine.state().id(), "running");
/// ```
#[derive(Debug)]
pub struct Machine {
    rules: SharedRuleset,
    state: State,
}

impl Machine {
    /// Create a machine in `initial`, governed by `rules`.
    pub fn new(rules: SharedRuleset, initial: State) -> Self {
        Self {
            rules,
            state: initial,
        }
    }

    /// Create a machine from a configuration, validating required fields.
    pub fn with_config(config: MachineConfig) -> Result<Self, BuildError> {
        let rules = config.rules.ok_or(BuildError::MissingRuleset)?;
        let initial = config.initial.ok_or(BuildError::MissingInitialState)?;
        Ok(Self::new(rules, initial))
    }

    /// Current state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Handle to the ruleset this machine consults.
    pub fn rules(&self) -> &SharedRuleset {
        &self.rules
    }

    /// Ask whether moving to `goal` would be permitted, without moving.
    ///
    /// The ruleset lock is released before any guard runs, so a slow guard
    /// does not hold up writers or other machines sharing the rules.
    pub fn check(&self, goal: &State) -> Result<(), PermissionError> {
        let guards = self.rules.read().lookup(&self.state, goal)?;
        evaluate(&self.state, goal, &guards)
    }

    /// Attempt to move to `goal`.
    ///
    /// On success the current state becomes `goal`. On failure the state is
    /// left as it was and the permission error is returned unchanged.
    pub fn transition(&mut self, goal: State) -> Result<(), PermissionError> {
        self.check(&goal)?;
        info!(from = %self.state, to = %goal, "state transitioned");
        self.state = goal;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Guard, GuardError};
    use crate::rules::{create_ruleset, Ruleset};

    fn lifecycle() -> SharedRuleset {
        create_ruleset([("idle", "running"), ("running", "done")]).into_shared()
    }

    #[test]
    fn transition_moves_through_lifecycle() {
        let mut machine = Machine::new(lifecycle(), State::new("idle"));

        assert_eq!(machine.transition(State::new("running")), Ok(()));
        assert_eq!(machine.state(), &State::new("running"));

        assert_eq!(machine.transition(State::new("done")), Ok(()));
        assert_eq!(machine.state(), &State::new("done"));
    }

    #[test]
    fn missing_rule_leaves_state_untouched() {
        let mut machine = Machine::new(lifecycle(), State::new("done"));
        let before = machine.state().clone();

        let err = machine.transition(State::new("idle")).unwrap_err();

        assert!(err.is_no_rules());
        assert_eq!(machine.state(), &before);
    }

    #[test]
    fn guard_failure_is_returned_unchanged() {
        let rules = lifecycle();
        rules.write().add_rule(
            ("idle", "running"),
            [Guard::new(|_, _| Err(GuardError::rejected("maintenance window")))],
        );
        let mut machine = Machine::new(rules, State::new("idle"));

        let err = machine.transition(State::new("running")).unwrap_err();

        assert_eq!(
            err,
            PermissionError::GuardFailed {
                start: "idle".to_string(),
                goal: "running".to_string(),
                source: GuardError::rejected("maintenance window"),
            }
        );
        assert_eq!(machine.state(), &State::new("idle"));
    }

    #[test]
    fn rules_changed_between_calls_take_effect() {
        let rules = Ruleset::new().into_shared();
        let mut machine = Machine::new(rules.clone(), State::new("idle"));

        assert!(machine.transition(State::new("running")).is_err());

        rules.write().add_transition(("idle", "running"));
        assert!(machine.transition(State::new("running")).is_ok());
    }

    #[test]
    fn check_does_not_mutate() {
        let machine = Machine::new(lifecycle(), State::new("idle"));

        assert!(machine.check(&State::new("running")).is_ok());
        assert_eq!(machine.state(), &State::new("idle"));
    }

    #[test]
    fn with_config_requires_rules_and_initial_state() {
        let missing_rules = Machine::with_config(MachineConfig {
            rules: None,
            initial: Some(State::new("idle")),
        });
        assert!(matches!(missing_rules, Err(BuildError::MissingRuleset)));

        let missing_initial = Machine::with_config(MachineConfig {
            rules: Some(lifecycle()),
            initial: None,
        });
        assert!(matches!(
            missing_initial,
            Err(BuildError::MissingInitialState)
        ));
    }
}
