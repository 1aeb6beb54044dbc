//! Machine configuration: the declarative description a machine is built from.
//!
//! A [`MachineConfig`] names the starting state and declares each state with
//! its outgoing transitions. Configurations can be written as JSON, assembled
//! with [`ConfigBuilder`], or produced by the [`machine_config!`] macro.
//!
//! The JSON shape is:
//!
//! ```json
//! {
//!   "initial": "hungry",
//!   "states": {
//!     "hungry": { "transitions": { "eat": "fed" } },
//!     "fed": { "transitions": { "rest": "hungry" } }
//!   }
//! }
//! ```
//!
//! [`machine_config!`]: crate::machine_config

pub mod builder;
pub mod error;
pub mod macros;

pub use builder::ConfigBuilder;
pub use error::ConfigError;

use serde::de::{MapAccess, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Declarative description of a state machine.
///
/// # Example
///
/// ```rust
/// use waypoint::MachineConfig;
///
/// let config = MachineConfig::from_json(
///     r#"{
///         "initial": "idle",
///         "states": {
///             "idle": { "transitions": { "start": "running" } },
///             "running": { "transitions": { "stop": "idle" } }
///         }
///     }"#,
/// ).unwrap();
///
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.states.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Name of the starting state. Must be declared in `states`.
    pub initial: String,
    /// Declared states with their outgoing transitions.
    ///
    /// Kept as an ordered sequence rather than a map: declaration order
    /// determines the order of state listings on the built machine.
    #[serde(
        serialize_with = "serialize_states",
        deserialize_with = "deserialize_states"
    )]
    pub states: Vec<(String, StateConfig)>,
}

/// Declaration of a single state: its outgoing transitions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateConfig {
    /// Event name to target state name. Keys are unique.
    #[serde(default)]
    pub transitions: HashMap<String, String>,
}

impl MachineConfig {
    /// Start building a configuration with a fluent API.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Parse a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the configuration as a JSON document.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check structural consistency.
    ///
    /// Rejects an empty state set, duplicate state declarations, an initial
    /// state missing from the set, and transitions targeting undeclared
    /// states. Run by [`FiniteStateMachine::new`], so a machine never holds
    /// a dangling transition target.
    ///
    /// [`FiniteStateMachine::new`]: crate::FiniteStateMachine::new
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.states.is_empty() {
            return Err(ConfigError::NoStates);
        }

        let mut names = HashSet::with_capacity(self.states.len());
        for (name, _) in &self.states {
            if !names.insert(name.as_str()) {
                return Err(ConfigError::DuplicateState { name: name.clone() });
            }
        }

        if !names.contains(self.initial.as_str()) {
            return Err(ConfigError::UnknownInitialState {
                name: self.initial.clone(),
            });
        }

        for (state, declaration) in &self.states {
            for (event, target) in &declaration.transitions {
                if !names.contains(target.as_str()) {
                    return Err(ConfigError::UnknownTransitionTarget {
                        state: state.clone(),
                        event: event.clone(),
                        target: target.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

fn serialize_states<S>(states: &[(String, StateConfig)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(states.iter().map(|(name, state)| (name, state)))
}

fn deserialize_states<'de, D>(deserializer: D) -> Result<Vec<(String, StateConfig)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct StatesVisitor;

    impl<'de> Visitor<'de> for StatesVisitor {
        type Value = Vec<(String, StateConfig)>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a map of state declarations")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut states = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry()? {
                states.push(entry);
            }
            Ok(states)
        }
    }

    deserializer.deserialize_map(StatesVisitor)
}
