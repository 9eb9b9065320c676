//! Document Workflow
//!
//! Declares a review workflow with the `machine!` macro, then branches
//! off an undone timeline.
//!
//! Run with: cargo run --example document_workflow

use retrace::{machine, MachineError};

fn main() -> Result<(), MachineError> {
    println!("=== Document Workflow Example ===\n");

    let mut doc = machine! {
        initial: draft,
        draft => { submit => review },
        review => { approve => published, reject => draft },
        published => { archive => archived, retract => draft },
        archived => {},
    }?;

    for event in ["submit", "approve"] {
        doc.trigger(event)?;
        println!("{event:>8} -> {}", doc.state());
    }

    println!("\nStates that accept 'reject': {:?}", doc.states(Some("reject")));
    println!("Events from '{}': {:?}", doc.state(), doc.events());

    doc.undo();
    println!("\nUndo to: {} (redo budget {})", doc.state(), doc.redo_budget());

    doc.trigger("reject")?;
    println!("Rejected instead: {} (can redo: {})", doc.state(), doc.can_redo());

    doc.clear_history();
    println!("History cleared, can undo: {}", doc.can_undo());

    doc.reset()?;
    println!("Reset to: {}", doc.state());

    println!("\n=== Example Complete ===");
    Ok(())
}
