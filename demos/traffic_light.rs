//! Traffic Light Sequencer
//!
//! This example mirrors a polled control loop: a controller raises a flag,
//! polls the machine once, and clears the flag again. The lamps live in the
//! lifecycle hooks.
//!
//! Key concepts:
//! - Lifecycle hooks driving side effects (lamp on, lamp off)
//! - External steering flags read by guard conditions
//! - Cyclic state transitions (states repeat)
//!
//! Run with: cargo run --example traffic_light

use escapement::state_enum;
use escapement::{StateHooks, StateMachine};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

state_enum! {
    enum TrafficLight {
        Green,
        Yellow,
        Red,
    }
}

fn lamp_on(name: &'static str, hold: Duration) -> impl Fn() + Send + Sync + 'static {
    move || {
        println!("  {} ON", name);
        thread::sleep(hold);
    }
}

fn lamp_off(name: &'static str) -> impl Fn() + Send + Sync + 'static {
    move || println!("  {} OFF", name)
}

fn steering_flag() -> (Arc<AtomicBool>, impl Fn() -> bool + Send + Sync + 'static) {
    let flag = Arc::new(AtomicBool::new(false));
    let watched = Arc::clone(&flag);
    (flag, move || watched.load(Ordering::SeqCst))
}

fn main() {
    println!("=== Traffic Light Sequencer ===\n");

    let mut lights = StateMachine::new();
    lights
        .register_state(
            TrafficLight::Green,
            StateHooks::new()
                .on_enter(lamp_on("Green", Duration::from_millis(300)))
                .on_leave(lamp_off("Green")),
        )
        .unwrap();
    lights
        .register_state(
            TrafficLight::Yellow,
            StateHooks::new()
                .on_enter(lamp_on("Yellow", Duration::from_millis(150)))
                .on_leave(lamp_off("Yellow")),
        )
        .unwrap();
    lights
        .register_state(
            TrafficLight::Red,
            StateHooks::new()
                .on_enter(lamp_on("Red", Duration::from_millis(250)))
                .on_leave(lamp_off("Red")),
        )
        .unwrap();

    let (go_yellow, yellow_cond) = steering_flag();
    let (go_red, red_cond) = steering_flag();
    let (go_green, green_cond) = steering_flag();

    lights
        .register_transition(TrafficLight::Green, TrafficLight::Yellow, yellow_cond)
        .unwrap();
    lights
        .register_transition(TrafficLight::Yellow, TrafficLight::Red, red_cond)
        .unwrap();
    lights
        .register_transition(TrafficLight::Red, TrafficLight::Green, green_cond)
        .unwrap();

    println!("Starting on Green:");
    lights.start(TrafficLight::Green).unwrap();

    let schedule = [
        (&go_yellow, "Requesting Yellow..."),
        (&go_red, "Requesting Red..."),
        (&go_green, "Requesting Green..."),
    ];

    for cycle in 1..=2 {
        println!("\nCycle {}:", cycle);
        for (flag, label) in &schedule {
            println!("{}", label);
            flag.store(true, Ordering::SeqCst);
            lights.update().unwrap();
            flag.store(false, Ordering::SeqCst);
        }
    }

    println!("\nFinal state: {:?}", lights.current_state());
    println!("\n=== Sequencer Complete ===");
}
