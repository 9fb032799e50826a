//! Registry mapping transitions to their guards.

use crate::core::{Edge, Guard, State, Transition};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Ruleset handle shared between machines and whoever maintains the rules.
pub type SharedRuleset = Arc<RwLock<Ruleset>>;

/// The rules of a state machine.
///
/// Every permitted edge has an entry holding the guards that must all pass
/// for the edge to be taken. An edge without an entry is never permitted.
///
/// # Example
///
/// ```rust
/// use guarded_fsm::core::{Edge, Guard, State};
/// use guarded_fsm::rules::Ruleset;
///
/// let mut rules = Ruleset::from_transitions([
///     Edge::new("idle", "running"),
///     Edge::new("running", "done"),
/// ]);
/// rules.add_rule(
///     Edge::new("running", "done"),
///     [Guard::when(|_, _| true, "never fails")],
/// );
///
/// assert_eq!(rules.guard_count(&Edge::new("running", "done")), 2);
/// assert!(rules.permitted(&State::new("idle"), &State::new("running")).is_ok());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Ruleset {
    pub(crate) rules: HashMap<Edge, Vec<Guard>>,
}

impl Ruleset {
    /// Create an empty ruleset. Nothing is permitted until rules are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ruleset with the default guard installed for each transition.
    pub fn from_transitions<I, T>(transitions: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Transition,
    {
        let mut ruleset = Self::new();
        for transition in transitions {
            ruleset.add_transition(transition);
        }
        ruleset
    }

    /// Append guards to a transition, creating its entry if needed.
    ///
    /// Guards are not deduplicated: adding the same guard twice runs it
    /// twice. An empty guard list leaves the ruleset unchanged.
    pub fn add_rule<T, I>(&mut self, transition: T, guards: I)
    where
        T: Transition,
        I: IntoIterator<Item = Guard>,
    {
        let key = Edge::of(&transition);
        for guard in guards {
            self.rules.entry(key.clone()).or_default().push(guard);
        }
    }

    /// Register a transition with the default guard.
    ///
    /// The default guard rejects any attempt whose start state is not the
    /// transition's origin. It does not look at the goal.
    pub fn add_transition<T: Transition>(&mut self, transition: T) {
        let origin = transition.origin();
        self.add_rule(transition, [Guard::origin_is(origin)]);
    }

    /// Whether any rule exists for the transition.
    pub fn contains<T: Transition>(&self, transition: &T) -> bool {
        self.rules.contains_key(&Edge::of(transition))
    }

    /// Number of guards registered on a transition (0 when absent).
    pub fn guard_count<T: Transition>(&self, transition: &T) -> usize {
        self.rules
            .get(&Edge::of(transition))
            .map_or(0, Vec::len)
    }

    /// Number of transitions with rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no transition has rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Wrap the ruleset for sharing with machines.
    pub fn into_shared(self) -> SharedRuleset {
        Arc::new(RwLock::new(self))
    }

    pub(crate) fn guards_for(&self, start: &State, goal: &State) -> Option<&[Guard]> {
        self.rules
            .get(&Edge::between(start, goal))
            .map(Vec::as_slice)
    }
}

/// Build a ruleset from transitions, each with the default guard.
pub fn create_ruleset<I, T>(transitions: I) -> Ruleset
where
    I: IntoIterator<Item = T>,
    T: Transition,
{
    Ruleset::from_transitions(transitions)
}
