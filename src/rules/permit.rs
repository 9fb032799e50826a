//! Concurrent guard evaluation.
//!
//! Every guard registered on the attempted edge runs on its own thread. The
//! caller collects outcomes as they arrive and returns on the first rejection.
//! Guards that lose that race are not cancelled: they run to completion in the
//! background and their outcomes are dropped. Callers must not assume every
//! guard has executed when a rejection is returned.

use super::error::PermissionError;
use super::ruleset::Ruleset;
use crate::core::{Guard, GuardError, State};
use std::sync::mpsc;
use std::thread;
use tracing::{debug, warn};

impl Ruleset {
    /// Decide whether moving from `start` to `goal` is allowed.
    ///
    /// Fails with [`PermissionError::NoRules`] when the edge has no entry,
    /// and with [`PermissionError::GuardFailed`] carrying the first observed
    /// guard rejection otherwise. There is no timeout: a guard that never
    /// returns stalls the call.
    ///
    /// # Example
    ///
    /// ```rust
    /// use guarded_fsm::core::State;
    /// use guarded_fsm::rules::create_ruleset;
    ///
    /// let rules = create_ruleset([("idle", "running")]);
    ///
    /// assert!(rules.permitted(&State::new("idle"), &State::new("running")).is_ok());
    /// assert!(rules
    ///     .permitted(&State::new("running"), &State::new("idle"))
    ///     .unwrap_err()
    ///     .is_no_rules());
    /// ```
    pub fn permitted(&self, start: &State, goal: &State) -> Result<(), PermissionError> {
        let guards = self.lookup(start, goal)?;
        evaluate(start, goal, &guards)
    }

    /// Clone out the guards registered for `(start, goal)`.
    ///
    /// Callers holding a [`SharedRuleset`](super::SharedRuleset) lock only
    /// for this step, so a slow guard never blocks writers or other machines.
    pub(crate) fn lookup(
        &self,
        start: &State,
        goal: &State,
    ) -> Result<Vec<Guard>, PermissionError> {
        match self.guards_for(start, goal) {
            Some(guards) => Ok(guards.to_vec()),
            None => {
                debug!(start = %start, goal = %goal, "no rules for transition");
                Err(PermissionError::NoRules {
                    start: start.id().to_string(),
                    goal: goal.id().to_string(),
                })
            }
        }
    }
}

/// Run `guards` concurrently for one attempt, failing on the first rejection.
pub(crate) fn evaluate(
    start: &State,
    goal: &State,
    guards: &[Guard],
) -> Result<(), PermissionError> {
    debug!(
        start = %start,
        goal = %goal,
        guards = guards.len(),
        "evaluating guards"
    );

    let (tx, rx) = mpsc::channel();
    for guard in guards {
        let guard = guard.clone();
        let tx = tx.clone();
        let (start_snapshot, goal_snapshot) = (start.clone(), goal.clone());
        let spawned = thread::Builder::new()
            .name("fsm-guard".to_string())
            .spawn(move || {
                // The receiver is gone once the check has already failed.
                let _ = tx.send(guard.check(&start_snapshot, &goal_snapshot));
            });
        if let Err(err) = spawned {
            let source = GuardError::SpawnFailed(err.to_string());
            return Err(rejection(start, goal, source));
        }
    }
    drop(tx);

    for _ in guards {
        // Every sender dropping early means a guard panicked.
        let outcome = rx.recv().unwrap_or(Err(GuardError::Panicked));
        if let Err(source) = outcome {
            return Err(rejection(start, goal, source));
        }
    }

    debug!(start = %start, goal = %goal, "transition permitted");
    Ok(())
}

fn rejection(start: &State, goal: &State, source: GuardError) -> PermissionError {
    warn!(start = %start, goal = %goal, reason = %source, "guard rejected transition");
    PermissionError::GuardFailed {
        start: start.id().to_string(),
        goal: goal.id().to_string(),
        source,
    }
}
