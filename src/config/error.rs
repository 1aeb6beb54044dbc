//! Configuration errors.

use thiserror::Error;

/// Errors that can occur when building or validating a machine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Initial state not specified. Call .initial(name) before .build()")]
    MissingInitialState,

    #[error("Configuration declares no states")]
    NoStates,

    #[error("State '{name}' is declared more than once")]
    DuplicateState { name: String },

    #[error("Initial state '{name}' is not declared in the state set")]
    UnknownInitialState { name: String },

    #[error("Transition '{event}' on state '{state}' targets undeclared state '{target}'")]
    UnknownTransitionTarget {
        state: String,
        event: String,
        target: String,
    },

    #[error("Configuration failed to parse: {0}")]
    Parse(#[from] serde_json::Error),
}
