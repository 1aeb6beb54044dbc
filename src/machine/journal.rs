//! Append-only audit trail of state changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What caused a state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cause {
    /// A named transition was followed out of the previous state.
    Trigger { event: String },
    /// An unconditional jump via `change_state`.
    Jump,
    /// A step back through the traversal history.
    Undo,
    /// A replayed step that had been undone.
    Redo,
    /// A return to the initial state.
    Reset,
}

/// Record of a single change of the current state.
///
/// The journal is orthogonal to the undo/redo stacks: `reset` and
/// `clear_history` rewrite the traversal but never erase journal entries.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state the machine was in.
    pub from: String,
    /// The state the machine moved to.
    pub to: String,
    /// What caused the move.
    pub cause: Cause,
    /// When the move happened.
    pub timestamp: DateTime<Utc>,
}

impl TransitionRecord {
    pub(crate) fn now(from: &str, to: &str, cause: Cause) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            cause,
            timestamp: Utc::now(),
        }
    }
}
