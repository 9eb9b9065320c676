//! Light Switch
//!
//! Loads a machine from JSON, toggles it, and walks the undo/redo history.
//!
//! Run with: RUST_LOG=debug cargo run --example light_switch

use retrace::{MachineError, StateMachine};
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"{
    "initial": "off",
    "states": {
        "off": {"transitions": {"power": "on"}},
        "on": {"transitions": {"power": "off"}}
    }
}"#;

fn main() -> Result<(), MachineError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Light Switch Example ===\n");

    let mut machine = StateMachine::from_json(CONFIG)?;
    println!("Initial state: {}", machine.state());

    machine.trigger("power")?;
    println!("After power: {}", machine.state());

    println!("Undo: {} -> {}", machine.undo(), machine.state());
    println!("Redo: {} -> {}", machine.redo(), machine.state());
    println!("Redo again: {}", machine.redo());

    match machine.trigger("bogus") {
        Err(err) => println!("Rejected: {err} ({})", err.error_code()),
        Ok(()) => println!("Unexpectedly accepted 'bogus'"),
    }
    println!("Still in: {}", machine.state());

    let path: Vec<&str> = machine.path().into_iter().map(|s| s.as_str()).collect();
    println!("History: {}", path.join(" -> "));

    println!("\n=== Example Complete ===");
    Ok(())
}
