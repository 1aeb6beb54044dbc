//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Declarative configuration via the machine_config! macro
//! - Cyclic state transitions (states repeat)
//! - Self-transitions and undo
//!
//! Run with: cargo run --example traffic_light

use waypoint::{machine_config, FiniteStateMachine};

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let config = machine_config! {
        initial: red,
        states: {
            red => { go => green },
            green => { caution => yellow },
            yellow => { stop => red },
        }
    }
    .unwrap();

    let mut machine = FiniteStateMachine::new(config).unwrap();
    println!("Initial state: {}\n", machine.current_state());

    println!("Cycling through the light sequence:");
    for event in ["go", "caution", "stop", "go"] {
        machine.trigger(event).unwrap();
        println!("  {} -> {}", event, machine.current_state());
    }

    println!("\nRewinding two steps with undo:");
    machine.undo();
    machine.undo();
    println!("  now at: {}", machine.current_state());

    println!("\nStates that respond to 'go': {:?}", machine.states_handling("go"));
    println!("Path taken so far: {:?}", machine.path());

    println!("\n=== Example Complete ===");
}
