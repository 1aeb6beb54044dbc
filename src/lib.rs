//! Waypoint: a declarative finite state machine engine.
//!
//! A machine is described by a [`MachineConfig`] (named states with named
//! transitions between them) and built into a [`FiniteStateMachine`] that
//! tracks the current state, follows transitions, and records the path taken
//! so moves can be undone and redone.
//!
//! # Core Concepts
//!
//! - **Config**: declarative state/transition table, written in code, with
//!   the [`machine_config!`] macro, or as JSON
//! - **Trigger**: follows a named edge out of the current state;
//!   `change_state` jumps anywhere without consulting edges
//! - **Traversal history**: every move is recorded, so `undo`/`redo` walk
//!   the path taken rather than the graph
//! - **Journal**: an append-only audit trail of every state change
//!
//! # Example
//!
//! ```rust
//! use waypoint::{machine_config, FiniteStateMachine};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = machine_config! {
//!     initial: hungry,
//!     states: {
//!         hungry => { eat => fed },
//!         fed => { rest => hungry },
//!     }
//! }?;
//!
//! let mut machine = FiniteStateMachine::new(config)?;
//! assert_eq!(machine.current_state(), "hungry");
//!
//! machine.trigger("eat")?;
//! assert_eq!(machine.current_state(), "fed");
//!
//! assert!(machine.undo());
//! assert_eq!(machine.current_state(), "hungry");
//! assert!(machine.redo());
//! assert_eq!(machine.current_state(), "fed");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod machine;

// Re-export commonly used types
pub use config::{ConfigBuilder, ConfigError, MachineConfig, StateConfig};
pub use machine::{Cause, FiniteStateMachine, MachineError, StateId, StateNode, TransitionRecord};
