//! Runtime errors raised by machine operations.

use thiserror::Error;

/// Errors raised by state machine operations.
///
/// These are synchronous usage errors, never transient conditions. The
/// machine is left unchanged when one is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("No state named '{name}' exists in this machine")]
    UnknownState { name: String },

    #[error("No transition '{event}' available from state '{state}'")]
    UnknownTransition { state: String, event: String },
}
