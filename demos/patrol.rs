//! Patrolling Guard
//!
//! This example drives a small behavior tree from a host tick loop.
//!
//! Key concepts:
//! - A top-level decision choosing between urgent and routine behavior
//! - A patrol sequence that walks waypoints in order
//! - Multi-tick actions that report completion through `Completion`
//! - Lifecycle events logged through `tracing`
//!
//! Run with: RUST_LOG=strata=debug cargo run --example patrol

use strata::builder::{action, StateMachineBuilder};
use strata::{decision, sequence};

#[derive(Debug, Default)]
struct Guard {
    position: &'static str,
    stamina: u32,
    intruder: bool,
    tick: u32,
}

fn walk_to(waypoint: &'static str) -> impl strata::State<Guard> {
    let mut steps = 0;
    action(format!("GoTo{waypoint}"), move |guard: &mut Guard, done| {
        steps += 1;
        guard.stamina = guard.stamina.saturating_sub(1);
        if steps == 2 {
            steps = 0;
            guard.position = waypoint;
            println!("  [{:>2}] reached {waypoint}", guard.tick);
            done.mark_complete();
        }
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("=== Patrolling Guard ===\n");

    let mut machine = StateMachineBuilder::new()
        .name("guard")
        .state(decision!("Behavior";
            action("Chase", |guard: &mut Guard, done| {
                println!("  [{:>2}] chasing intruder", guard.tick);
                guard.intruder = false;
                done.mark_complete();
            })
            .when(|guard: &Guard| guard.intruder),
            action("Rest", |guard: &mut Guard, done| {
                guard.stamina += 2;
                if guard.stamina >= 6 {
                    println!("  [{:>2}] rested", guard.tick);
                    done.mark_complete();
                }
            })
            .when(|guard: &Guard| guard.stamina < 2),
            sequence!("Patrol"; walk_to("A"), walk_to("B"), walk_to("C")),
        ))
        .build()
        .unwrap();

    let mut guard = Guard {
        position: "Gate",
        stamina: 6,
        ..Guard::default()
    };

    let _ = machine.start(&mut guard).unwrap();
    let mut last = machine.active_path().join(" > ");
    println!("Active path: {last}\n");

    for tick in 1..=24 {
        guard.tick = tick;
        if tick == 9 {
            println!("  [{tick:>2}] intruder spotted!");
            guard.intruder = true;
        }

        let _ = machine.update(&mut guard).unwrap();

        let path = machine.active_path().join(" > ");
        if path != last {
            println!("  [{tick:>2}] now {path}");
            last = path;
        }
    }

    machine.stop(&mut guard);

    println!("\nFinal position: {}", guard.position);
    println!("Top-level transitions: {:?}", machine.history().get_path());

    println!("\nKey Characteristics:");
    println!("- Priority is re-evaluated only when the running child finishes");
    println!("- The intruder waits for the current waypoint to be reached");
    println!("- Stopping exits every state on the active path");

    println!("\n=== Example Complete ===");
}
