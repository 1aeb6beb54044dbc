//! Traversal history: the undo/redo stacks layered over the graph.

use super::state::StateId;

/// The path taken through the machine, plus states available for redo.
///
/// `visited` is never empty; its last element is the current state. Any
/// forward move invalidates `undone`.
#[derive(Clone, Debug)]
pub(crate) struct Traversal {
    visited: Vec<StateId>,
    undone: Vec<StateId>,
}

impl Traversal {
    pub(crate) fn new(initial: StateId) -> Self {
        Self {
            visited: vec![initial],
            undone: Vec::new(),
        }
    }

    pub(crate) fn current(&self) -> StateId {
        *self
            .visited
            .last()
            .expect("traversal history is never empty")
    }

    /// Record a forward move.
    pub(crate) fn visit(&mut self, state: StateId) {
        self.visited.push(state);
        self.undone.clear();
    }

    /// Step back one state. Returns false, changing nothing, when the path
    /// holds only the current state.
    pub(crate) fn undo(&mut self) -> bool {
        if self.visited.len() < 2 {
            return false;
        }
        if let Some(state) = self.visited.pop() {
            self.undone.push(state);
        }
        true
    }

    /// Replay the most recently undone state. Returns false when there is
    /// nothing to replay.
    pub(crate) fn redo(&mut self) -> bool {
        match self.undone.pop() {
            Some(state) => {
                self.visited.push(state);
                true
            }
            None => false,
        }
    }

    /// Truncate the path to the given state only.
    pub(crate) fn restart(&mut self, state: StateId) {
        self.visited.clear();
        self.visited.push(state);
        self.undone.clear();
    }

    /// Keep the current state, forget how it was reached.
    pub(crate) fn collapse(&mut self) {
        let current = self.current();
        self.restart(current);
    }

    pub(crate) fn len(&self) -> usize {
        self.visited.len()
    }

    pub(crate) fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// States along the retained path, oldest first.
    pub(crate) fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.visited.iter().copied()
    }
}
