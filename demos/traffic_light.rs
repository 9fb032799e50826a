//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Declaring the graph with `ruleset!`
//! - Structural rejection of edges that do not exist
//!
//! Run with: cargo run --example traffic_light

use guarded_fsm::core::State;
use guarded_fsm::{ruleset, MachineBuilder};

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let mut machine = MachineBuilder::new()
        .ruleset(ruleset![
            "red" => "green",
            "green" => "yellow",
            "yellow" => "red",
        ])
        .initial("red")
        .build()
        .expect("ruleset and initial state are set");

    println!("Initial state: {}\n", machine.state());

    for next in ["green", "yellow", "red", "green"] {
        match machine.transition(State::new(next)) {
            Ok(()) => println!("  -> {}", machine.state()),
            Err(err) => println!("  rejected: {err}"),
        }
    }

    println!("\nSkipping yellow is not an edge:");
    if let Err(err) = machine.transition(State::new("red")) {
        println!("  rejected: {err}");
    }
    println!("  still {}", machine.state());

    println!("\n=== Example Complete ===");
}
