//! Document Editor Workflow
//!
//! This example demonstrates undo/redo over a review workflow, including an
//! out-of-band jump and the journal audit trail.
//!
//! Key concepts:
//! - JSON configuration
//! - change_state as a teleport that ignores transition rules
//! - Redo invalidation after a new move
//! - Inspecting the journal
//!
//! Run with: cargo run --example document_editor

use waypoint::FiniteStateMachine;

const CONFIG: &str = r#"{
    "initial": "draft",
    "states": {
        "draft": { "transitions": { "submit": "review" } },
        "review": { "transitions": { "approve": "published", "reject": "draft" } },
        "published": { "transitions": { "retract": "draft" } }
    }
}"#;

fn main() {
    println!("=== Document Editor Workflow ===\n");

    let mut machine = FiniteStateMachine::from_json(CONFIG).unwrap();
    println!("Starting in: {}", machine.current_state());

    machine.trigger("submit").unwrap();
    machine.trigger("approve").unwrap();
    println!("After submit + approve: {}", machine.current_state());

    println!("\nOops, undo the approval:");
    machine.undo();
    println!("  back to: {} (redo available: {})", machine.current_state(), machine.can_redo());

    println!("Editor jumps straight to draft instead:");
    machine.change_state("draft").unwrap();
    println!("  now at: {} (redo available: {})", machine.current_state(), machine.can_redo());

    println!("\nStates that can 'reject': {:?}", machine.states_handling("reject"));

    println!("\nJournal:");
    for record in machine.journal() {
        println!("  {} -> {} ({:?})", record.from, record.to, record.cause);
    }

    println!("\n=== Example Complete ===");
}
