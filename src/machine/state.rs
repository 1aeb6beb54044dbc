//! Arena-resident state nodes.

use std::collections::HashMap;

/// Stable handle to a state in the machine's arena.
///
/// Transition tables hold `StateId`s instead of references, so the graph can
/// contain cycles (including self-transitions) without ownership cycles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StateId(pub(crate) usize);

impl StateId {
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// A named node in the transition graph.
///
/// Nodes are created during configuration parsing and are immutable once the
/// machine is built; they are owned exclusively by the machine's arena.
#[derive(Clone, Debug)]
pub struct StateNode {
    name: String,
    transitions: HashMap<String, StateId>,
}

impl StateNode {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transitions: HashMap::new(),
        }
    }

    /// The state's immutable identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register (or overwrite) the destination for a named transition.
    pub(crate) fn set_transition(&mut self, name: impl Into<String>, target: StateId) {
        self.transitions.insert(name.into(), target);
    }

    /// True iff a transition with that name is registered.
    pub fn has_transition(&self, name: &str) -> bool {
        self.transitions.contains_key(name)
    }

    /// Destination of a named transition; `None` when none is registered.
    pub fn next_state(&self, name: &str) -> Option<StateId> {
        self.transitions.get(name).copied()
    }

    /// Names of the registered transitions, in no particular order.
    pub fn transition_names(&self) -> impl Iterator<Item = &str> {
        self.transitions.keys().map(String::as_str)
    }
}
