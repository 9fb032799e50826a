//! Rulesets and the permission check.
//!
//! A [`Ruleset`] maps each permitted edge to the guards protecting it.
//! [`Ruleset::permitted`] evaluates those guards concurrently for a live
//! attempt.

mod error;
mod permit;
mod ruleset;

pub use error::PermissionError;
pub(crate) use permit::evaluate;
pub use ruleset::{create_ruleset, Ruleset, SharedRuleset};
