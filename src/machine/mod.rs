//! The finite state machine engine.
//!
//! A [`FiniteStateMachine`] owns an arena of [`StateNode`]s built from a
//! [`MachineConfig`], tracks the current state through a traversal history
//! with undo/redo, and keeps an append-only journal of every state change.

pub mod error;
mod history;
pub mod journal;
pub mod state;

pub use error::MachineError;
pub use journal::{Cause, TransitionRecord};
pub use state::{StateId, StateNode};

use crate::config::{ConfigError, MachineConfig};
use history::Traversal;
use std::collections::HashMap;

/// A state machine built from a declarative configuration.
///
/// The machine is a plain owned value: fully synchronous, no interior
/// mutability. Callers in multi-threaded hosts must serialize access
/// externally.
///
/// # Example
///
/// ```rust
/// use waypoint::{machine_config, FiniteStateMachine};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = machine_config! {
///     initial: hungry,
///     states: {
///         hungry => { eat => fed },
///         fed => { rest => hungry },
///     }
/// }?;
///
/// let mut machine = FiniteStateMachine::new(config)?;
/// assert_eq!(machine.current_state(), "hungry");
///
/// machine.trigger("eat")?;
/// assert_eq!(machine.current_state(), "fed");
///
/// assert!(machine.undo());
/// assert_eq!(machine.current_state(), "hungry");
/// assert!(machine.redo());
/// assert_eq!(machine.current_state(), "fed");
/// # Ok(())
/// # }
/// ```
pub struct FiniteStateMachine {
    states: Vec<StateNode>,
    index: HashMap<String, StateId>,
    initial: StateId,
    traversal: Traversal,
    journal: Vec<TransitionRecord>,
}

impl FiniteStateMachine {
    /// Build a machine from a configuration.
    ///
    /// The configuration is validated eagerly (see
    /// [`MachineConfig::validate`]), so a built machine never holds a
    /// transition to an undeclared state. Parsing runs in two passes because
    /// transitions may reference states declared later: pass one allocates
    /// an arena node per declared state, pass two resolves each transition
    /// target to its arena handle.
    pub fn new(config: MachineConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut states = Vec::with_capacity(config.states.len());
        let mut index = HashMap::with_capacity(config.states.len());
        for (position, (name, _)) in config.states.iter().enumerate() {
            states.push(StateNode::new(name.clone()));
            index.insert(name.clone(), StateId(position));
        }

        for (name, declaration) in &config.states {
            let id = index[name.as_str()];
            for (event, target) in &declaration.transitions {
                let target_id = index[target.as_str()];
                states[id.index()].set_transition(event.clone(), target_id);
            }
        }

        let initial = index[config.initial.as_str()];
        Ok(Self {
            states,
            index,
            initial,
            traversal: Traversal::new(initial),
            journal: Vec::new(),
        })
    }

    /// Build a machine straight from a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::new(MachineConfig::from_json(json)?)
    }

    /// Name of the current state.
    pub fn current_state(&self) -> &str {
        self.name_of(self.traversal.current())
    }

    /// Name of the configured starting state.
    pub fn initial_state(&self) -> &str {
        self.name_of(self.initial)
    }

    /// Jump unconditionally to a named state.
    ///
    /// Consults only state existence, not transition rules. A successful
    /// jump is recorded in the traversal history like any other move, so it
    /// can be undone; anything previously undone can no longer be redone.
    pub fn change_state(&mut self, name: &str) -> Result<(), MachineError> {
        let id = self
            .index
            .get(name)
            .copied()
            .ok_or_else(|| MachineError::UnknownState {
                name: name.to_string(),
            })?;

        self.record(self.traversal.current(), id, Cause::Jump);
        self.traversal.visit(id);
        Ok(())
    }

    /// Follow the named transition out of the current state.
    ///
    /// Fails, changing nothing, when the current state registers no such
    /// transition. A successful trigger invalidates anything undone.
    pub fn trigger(&mut self, event: &str) -> Result<(), MachineError> {
        let current = self.traversal.current();
        let next = self.node(current).next_state(event).ok_or_else(|| {
            MachineError::UnknownTransition {
                state: self.name_of(current).to_string(),
                event: event.to_string(),
            }
        })?;

        self.record(
            current,
            next,
            Cause::Trigger {
                event: event.to_string(),
            },
        );
        self.traversal.visit(next);
        Ok(())
    }

    /// Return to the initial state, discarding all traversal history.
    pub fn reset(&mut self) {
        let current = self.traversal.current();
        if current != self.initial {
            self.record(current, self.initial, Cause::Reset);
        }
        self.traversal.restart(self.initial);
    }

    /// Step back to the previous state in the traversal history.
    ///
    /// Returns `false`, changing nothing, when there is no earlier state.
    pub fn undo(&mut self) -> bool {
        let from = self.traversal.current();
        if !self.traversal.undo() {
            return false;
        }
        self.record(from, self.traversal.current(), Cause::Undo);
        true
    }

    /// Replay the most recently undone move.
    ///
    /// Returns `false`, changing nothing, when nothing has been undone since
    /// the last forward move.
    pub fn redo(&mut self) -> bool {
        let from = self.traversal.current();
        if !self.traversal.redo() {
            return false;
        }
        self.record(from, self.traversal.current(), Cause::Redo);
        true
    }

    /// Forget how the current state was reached.
    ///
    /// The current state is preserved; undo and redo become unavailable.
    pub fn clear_history(&mut self) {
        self.traversal.collapse();
    }

    /// Names of all states, in declaration order, once each.
    pub fn state_names(&self) -> Vec<&str> {
        self.states.iter().map(StateNode::name).collect()
    }

    /// Names of the states registering a transition for `event`, in
    /// declaration order. Useful for discovering which states can respond
    /// to a given event.
    pub fn states_handling(&self, event: &str) -> Vec<&str> {
        self.states
            .iter()
            .filter(|state| state.has_transition(event))
            .map(StateNode::name)
            .collect()
    }

    /// True iff the current state registers a transition for `event`.
    pub fn can_trigger(&self, event: &str) -> bool {
        self.node(self.traversal.current()).has_transition(event)
    }

    /// Whether `name` is a declared state.
    pub fn has_state(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Look up a state node by name.
    pub fn state(&self, name: &str) -> Option<&StateNode> {
        self.index.get(name).map(|id| self.node(*id))
    }

    /// Names along the retained traversal history, oldest first; the last
    /// element is the current state.
    pub fn path(&self) -> Vec<&str> {
        self.traversal.iter().map(|id| self.name_of(id)).collect()
    }

    /// Number of states in the traversal history, current state included.
    pub fn history_len(&self) -> usize {
        self.traversal.len()
    }

    /// Whether [`undo`](FiniteStateMachine::undo) would succeed.
    pub fn can_undo(&self) -> bool {
        self.traversal.len() > 1
    }

    /// Whether [`redo`](FiniteStateMachine::redo) would succeed.
    pub fn can_redo(&self) -> bool {
        self.traversal.can_redo()
    }

    /// Every state change since construction, oldest first.
    pub fn journal(&self) -> &[TransitionRecord] {
        &self.journal
    }

    fn node(&self, id: StateId) -> &StateNode {
        &self.states[id.index()]
    }

    fn name_of(&self, id: StateId) -> &str {
        self.states[id.index()].name()
    }

    fn record(&mut self, from: StateId, to: StateId, cause: Cause) {
        let record = TransitionRecord::now(self.name_of(from), self.name_of(to), cause);
        self.journal.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine_config;

    fn hungry_fed_machine() -> FiniteStateMachine {
        let config = machine_config! {
            initial: hungry,
            states: {
                hungry => { eat => fed },
                fed => { rest => hungry },
            }
        }
        .unwrap();
        FiniteStateMachine::new(config).unwrap()
    }

    #[test]
    fn machine_starts_in_the_initial_state() {
        let machine = hungry_fed_machine();
        assert_eq!(machine.current_state(), "hungry");
        assert_eq!(machine.initial_state(), "hungry");
        assert_eq!(machine.history_len(), 1);
    }

    #[test]
    fn construction_resolves_forward_references() {
        // "start" targets "end" before "end" is declared.
        let machine = FiniteStateMachine::from_json(
            r#"{
                "initial": "start",
                "states": {
                    "start": { "transitions": { "finish": "end" } },
                    "end": {}
                }
            }"#,
        )
        .unwrap();

        assert!(machine.state("start").unwrap().has_transition("finish"));
    }

    #[test]
    fn construction_rejects_invalid_configuration() {
        let result = FiniteStateMachine::from_json(
            r#"{
                "initial": "start",
                "states": {
                    "start": { "transitions": { "go": "ghost" } }
                }
            }"#,
        );

        assert!(matches!(
            result,
            Err(ConfigError::UnknownTransitionTarget { .. })
        ));
    }

    #[test]
    fn trigger_follows_the_named_edge() {
        let mut machine = hungry_fed_machine();

        machine.trigger("eat").unwrap();
        assert_eq!(machine.current_state(), "fed");

        machine.trigger("rest").unwrap();
        assert_eq!(machine.current_state(), "hungry");
    }

    #[test]
    fn trigger_with_unknown_event_fails_and_changes_nothing() {
        let mut machine = hungry_fed_machine();

        let err = machine.trigger("rest").unwrap_err();
        assert_eq!(
            err,
            MachineError::UnknownTransition {
                state: "hungry".to_string(),
                event: "rest".to_string(),
            }
        );
        assert_eq!(machine.current_state(), "hungry");
        assert_eq!(machine.history_len(), 1);
        assert!(machine.journal().is_empty());
    }

    #[test]
    fn change_state_jumps_without_consulting_transitions() {
        let mut machine = hungry_fed_machine();

        // No edge from hungry to fed named this way; jumps ignore edges.
        machine.change_state("fed").unwrap();
        assert_eq!(machine.current_state(), "fed");
        assert_eq!(machine.history_len(), 2);
    }

    #[test]
    fn change_state_to_unknown_state_fails_and_changes_nothing() {
        let mut machine = hungry_fed_machine();

        let err = machine.change_state("sleepy").unwrap_err();
        assert_eq!(
            err,
            MachineError::UnknownState {
                name: "sleepy".to_string(),
            }
        );
        assert_eq!(machine.current_state(), "hungry");
        assert_eq!(machine.history_len(), 1);
    }

    #[test]
    fn self_transition_pushes_history() {
        let config = machine_config! {
            initial: spin,
            states: {
                spin => { again => spin },
            }
        }
        .unwrap();
        let mut machine = FiniteStateMachine::new(config).unwrap();

        machine.trigger("again").unwrap();
        assert_eq!(machine.current_state(), "spin");
        assert_eq!(machine.history_len(), 2);
        assert!(machine.undo());
    }

    #[test]
    fn undo_walks_back_and_redo_replays() {
        let mut machine = hungry_fed_machine();
        machine.trigger("eat").unwrap();

        assert!(machine.undo());
        assert_eq!(machine.current_state(), "hungry");

        assert!(machine.redo());
        assert_eq!(machine.current_state(), "fed");
    }

    #[test]
    fn undo_returns_false_at_the_start_of_history() {
        let mut machine = hungry_fed_machine();
        machine.trigger("eat").unwrap();
        machine.trigger("rest").unwrap();

        assert!(machine.undo());
        assert!(machine.undo());
        assert!(!machine.undo());
        assert_eq!(machine.current_state(), "hungry");
    }

    #[test]
    fn redo_returns_false_with_nothing_undone() {
        let mut machine = hungry_fed_machine();
        assert!(!machine.redo());

        machine.trigger("eat").unwrap();
        assert!(!machine.redo());
    }

    #[test]
    fn undo_steps_over_jumps_and_triggers_alike() {
        let mut machine = hungry_fed_machine();
        machine.trigger("eat").unwrap();
        machine.change_state("hungry").unwrap();

        assert!(machine.undo());
        assert_eq!(machine.current_state(), "fed");
        assert!(machine.undo());
        assert_eq!(machine.current_state(), "hungry");
    }

    #[test]
    fn forward_moves_clear_the_redo_buffer() {
        let mut machine = hungry_fed_machine();
        machine.trigger("eat").unwrap();
        assert!(machine.undo());
        assert!(machine.can_redo());

        machine.change_state("fed").unwrap();
        assert!(!machine.can_redo());
        assert!(!machine.redo());
    }

    #[test]
    fn reset_returns_to_initial_and_clears_both_stacks() {
        let mut machine = hungry_fed_machine();
        machine.trigger("eat").unwrap();
        assert!(machine.undo());

        machine.reset();
        assert_eq!(machine.current_state(), "hungry");
        assert!(!machine.undo());
        assert!(!machine.redo());
    }

    #[test]
    fn clear_history_preserves_position_but_drops_the_past() {
        let mut machine = hungry_fed_machine();
        machine.trigger("eat").unwrap();

        machine.clear_history();
        assert_eq!(machine.current_state(), "fed");
        assert_eq!(machine.history_len(), 1);
        assert!(!machine.undo());
        assert!(!machine.redo());
    }

    #[test]
    fn state_names_lists_declaration_order() {
        let machine = FiniteStateMachine::from_json(
            r#"{
                "initial": "c",
                "states": { "c": {}, "a": {}, "b": {} }
            }"#,
        )
        .unwrap();

        assert_eq!(machine.state_names(), vec!["c", "a", "b"]);
    }

    #[test]
    fn states_handling_filters_by_event() {
        let config = machine_config! {
            initial: hungry,
            states: {
                hungry => { eat => fed, nap => sleepy },
                fed => { nap => sleepy },
                sleepy => { wake => hungry },
            }
        }
        .unwrap();
        let machine = FiniteStateMachine::new(config).unwrap();

        assert_eq!(machine.states_handling("nap"), vec!["hungry", "fed"]);
        assert_eq!(machine.states_handling("wake"), vec!["sleepy"]);
        assert!(machine.states_handling("fly").is_empty());
    }

    #[test]
    fn can_trigger_reflects_the_current_state() {
        let mut machine = hungry_fed_machine();
        assert!(machine.can_trigger("eat"));
        assert!(!machine.can_trigger("rest"));

        machine.trigger("eat").unwrap();
        assert!(machine.can_trigger("rest"));
        assert!(!machine.can_trigger("eat"));
    }

    #[test]
    fn path_tracks_the_retained_history() {
        let mut machine = hungry_fed_machine();
        machine.trigger("eat").unwrap();
        machine.trigger("rest").unwrap();

        assert_eq!(machine.path(), vec!["hungry", "fed", "hungry"]);

        machine.undo();
        assert_eq!(machine.path(), vec!["hungry", "fed"]);
    }

    #[test]
    fn journal_records_every_state_change() {
        let mut machine = hungry_fed_machine();
        machine.trigger("eat").unwrap();
        machine.undo();
        machine.redo();
        machine.change_state("hungry").unwrap();
        machine.reset();

        let causes: Vec<&Cause> = machine.journal().iter().map(|r| &r.cause).collect();
        assert_eq!(
            causes,
            vec![
                &Cause::Trigger {
                    event: "eat".to_string()
                },
                &Cause::Undo,
                &Cause::Redo,
                &Cause::Jump,
            ]
        );
        // reset from "hungry" did not move the current state, so no record.
        assert_eq!(machine.journal().last().unwrap().to, "hungry");
    }

    #[test]
    fn journal_survives_reset_and_clear_history() {
        let mut machine = hungry_fed_machine();
        machine.trigger("eat").unwrap();
        machine.reset();
        machine.clear_history();

        assert_eq!(machine.journal().len(), 2);
        assert_eq!(machine.journal()[1].cause, Cause::Reset);
    }

    // The walkthrough from the crate documentation, end to end.
    #[test]
    fn hungry_fed_scenario() {
        let mut machine = hungry_fed_machine();
        assert_eq!(machine.current_state(), "hungry");

        machine.trigger("eat").unwrap();
        assert_eq!(machine.current_state(), "fed");

        assert!(machine.undo());
        assert_eq!(machine.current_state(), "hungry");

        assert!(machine.redo());
        assert_eq!(machine.current_state(), "fed");

        machine.change_state("hungry").unwrap();
        assert!(!machine.redo());

        assert!(machine.trigger("rest").is_err());
        assert_eq!(machine.current_state(), "hungry");
    }
}
