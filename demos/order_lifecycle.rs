//! Order Lifecycle
//!
//! An order moves placed -> paid -> shipped -> delivered. Shipping is
//! protected by two independent guards that are evaluated concurrently:
//! stock must be reserved and the address must be verified.
//!
//! Run with: RUST_LOG=debug cargo run --example order_lifecycle

use guarded_fsm::core::{Guard, GuardError, State};
use guarded_fsm::rules::create_ruleset;
use guarded_fsm::MachineBuilder;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Order Lifecycle ===\n");

    let stock_reserved = Arc::new(AtomicBool::new(true));
    let address_verified = Arc::new(AtomicBool::new(false));

    let rules = create_ruleset([
        ("placed", "paid"),
        ("paid", "shipped"),
        ("shipped", "delivered"),
        ("placed", "cancelled"),
        ("paid", "cancelled"),
    ])
    .into_shared();

    {
        let stock = Arc::clone(&stock_reserved);
        let address = Arc::clone(&address_verified);
        rules.write().add_rule(
            ("paid", "shipped"),
            [
                Guard::new(move |_, _| {
                    // Simulate an inventory lookup.
                    thread::sleep(Duration::from_millis(50));
                    if stock.load(Ordering::SeqCst) {
                        Ok(())
                    } else {
                        Err(GuardError::rejected("stock not reserved"))
                    }
                }),
                Guard::when(
                    move |_, _| address.load(Ordering::SeqCst),
                    "shipping address not verified",
                ),
            ],
        );
    }

    let mut order = MachineBuilder::new()
        .rules(rules)
        .initial("placed")
        .build()
        .expect("ruleset and initial state are set");

    let attempt = |order: &mut guarded_fsm::Machine, goal: &str| {
        match order.transition(State::new(goal)) {
            Ok(()) => println!("  {goal:<10} ok, now {}", order.state()),
            Err(err) => println!("  {goal:<10} refused: {err}"),
        }
    };

    attempt(&mut order, "paid");
    attempt(&mut order, "shipped");

    println!("\nVerifying address...");
    address_verified.store(true, Ordering::SeqCst);

    attempt(&mut order, "shipped");
    attempt(&mut order, "cancelled");
    attempt(&mut order, "delivered");

    println!("\nFinal state: {}", order.state());
    println!("\n=== Example Complete ===");
}
