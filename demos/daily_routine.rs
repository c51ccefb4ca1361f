//! Daily Routine
//!
//! This example walks the daily-routine engine through a day, then rewinds
//! it with undo and replays part of it with redo.
//!
//! Key concepts:
//! - Event-driven transitions from a fixed table
//! - Rejected events leave the machine untouched
//! - Undo/redo history, and redo invalidation on new changes
//!
//! Run with: cargo run --example daily_routine

use daycycle::routine::RoutineFsm;

const CONFIG: &str = r#"{
    "initial": "normal",
    "states": {
        "normal": { "label": "Doing nothing in particular" },
        "busy": { "label": "Studying" },
        "hungry": { "label": "Looking for food" },
        "sleeping": { "label": "Asleep" }
    }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Daily Routine Example ===\n");

    let mut fsm = RoutineFsm::from_json(CONFIG)?;
    println!("Configured states: {:?}", fsm.states(None));
    println!("Initial state: {}\n", fsm.state());

    for event in ["study", "get_tired", "get_hungry", "eat"] {
        fsm.trigger(event)?;
        println!("{event:>10} -> {}", fsm.state());
    }

    match fsm.trigger("get_up") {
        Ok(()) => println!("unexpected: get_up accepted"),
        Err(e) => println!("\nRejected: {e}"),
    }
    println!("'get_up' is accepted from: {:?}", fsm.states(Some("get_up")));

    println!("\nRewinding:");
    while fsm.undo() {
        println!("  undo -> {}", fsm.state());
    }

    println!("\nReplaying:");
    fsm.redo();
    fsm.redo();
    println!("  redo x2 -> {}", fsm.state());

    fsm.change_state("hungry")?;
    println!("  change -> {} (redo available: {})", fsm.state(), fsm.can_redo());

    println!("\n=== Example Complete ===");
    Ok(())
}
