//! Macros for ergonomic ruleset construction.

/// Build a [`Ruleset`](crate::rules::Ruleset) from `origin => exit` pairs,
/// installing the default guard on each.
///
/// # Example
///
/// ```
/// use guarded_fsm::ruleset;
/// use guarded_fsm::core::State;
///
/// let rules = ruleset![
///     "idle" => "running",
///     "running" => "done",
/// ];
///
/// assert_eq!(rules.len(), 2);
/// assert!(rules.permitted(&State::new("idle"), &State::new("running")).is_ok());
/// ```
#[macro_export]
macro_rules! ruleset {
    () => {
        $crate::rules::Ruleset::new()
    };
    ($($origin:expr => $exit:expr),+ $(,)?) => {
        $crate::rules::Ruleset::from_transitions([
            $($crate::core::Edge::new($origin, $exit)),+
        ])
    };
}
