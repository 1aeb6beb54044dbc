//! Builder for machine configurations.

use crate::config::{ConfigError, MachineConfig, StateConfig};

/// Builds a [`MachineConfig`] with a fluent API.
///
/// States are listed in the order they are first mentioned, which carries
/// through to state listings on the built machine.
///
/// # Example
///
/// ```rust
/// use waypoint::MachineConfig;
///
/// let config = MachineConfig::builder()
///     .initial("hungry")
///     .transition("hungry", "eat", "fed")
///     .transition("fed", "rest", "hungry")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.initial, "hungry");
/// ```
pub struct ConfigBuilder {
    initial: Option<String>,
    states: Vec<(String, StateConfig)>,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Vec::new(),
        }
    }

    /// Set the starting state (required).
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Declare a state with no outgoing transitions (yet).
    ///
    /// Redeclaring a known state is a no-op, so states can be listed up
    /// front for ordering and filled in with [`transition`] later.
    ///
    /// [`transition`]: ConfigBuilder::transition
    pub fn state(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.states.iter().any(|(existing, _)| *existing == name) {
            self.states.push((name, StateConfig::default()));
        }
        self
    }

    /// Register a transition, declaring the source state if needed.
    ///
    /// Registering an event name twice on the same state overwrites the
    /// earlier target. The target state must still be declared somewhere
    /// before [`build`] succeeds.
    ///
    /// [`build`]: ConfigBuilder::build
    pub fn transition(
        mut self,
        from: &str,
        event: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        if !self.states.iter().any(|(existing, _)| existing == from) {
            self.states.push((from.to_string(), StateConfig::default()));
        }
        if let Some((_, state)) = self.states.iter_mut().find(|(existing, _)| existing == from) {
            state.transitions.insert(event.into(), target.into());
        }
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<MachineConfig, ConfigError> {
        let initial = self.initial.ok_or(ConfigError::MissingInitialState)?;
        let config = MachineConfig {
            initial,
            states: self.states,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
