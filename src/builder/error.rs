//! Build errors for machine construction.

use thiserror::Error;

/// Errors that can occur when building a machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Ruleset not specified. Call .rules(shared) or .ruleset(rules) before .build()")]
    MissingRuleset,

    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,
}
