//! Coin-Operated Turnstile
//!
//! The classic turnstile: a coin unlocks it, a push rotates through and
//! locks it again. A push while locked bounces back into Locked, so the
//! latch hooks fire again.
//!
//! Key concepts:
//! - Builder API with declaration helpers
//! - First-match transition precedence
//! - Self-transitions re-running lifecycle hooks
//!
//! Run with: cargo run --example turnstile

use escapement::builder::{guarded_transition, StateMachineBuilder};
use escapement::state_enum;
use escapement::StateHooks;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

state_enum! {
    enum Turnstile {
        Locked,
        Unlocked,
    }
}

fn watcher(flag: &Arc<AtomicBool>) -> impl Fn() -> bool + Send + Sync + 'static {
    let flag = Arc::clone(flag);
    move || flag.load(Ordering::SeqCst)
}

fn main() {
    println!("=== Coin-Operated Turnstile ===\n");

    let coin = Arc::new(AtomicBool::new(false));
    let push = Arc::new(AtomicBool::new(false));

    let mut turnstile = StateMachineBuilder::new()
        .state(
            Turnstile::Locked,
            StateHooks::new().on_enter(|| println!("  [click] arms locked")),
        )
        .state(
            Turnstile::Unlocked,
            StateHooks::new().on_enter(|| println!("  [clunk] arms free")),
        )
        .transitions(vec![
            // A coin outranks a push when both arrive in the same poll.
            guarded_transition(Turnstile::Locked, Turnstile::Unlocked, watcher(&coin)),
            guarded_transition(Turnstile::Locked, Turnstile::Locked, watcher(&push)),
            guarded_transition(Turnstile::Unlocked, Turnstile::Locked, watcher(&push)),
            guarded_transition(Turnstile::Unlocked, Turnstile::Unlocked, watcher(&coin)),
        ])
        .unwrap()
        .build()
        .unwrap();

    turnstile.start(Turnstile::Locked).unwrap();

    let mut poll = |label: &str, drop_coin: bool, push_arms: bool| {
        println!("{}", label);
        coin.store(drop_coin, Ordering::SeqCst);
        push.store(push_arms, Ordering::SeqCst);
        let moved = turnstile.update().unwrap();
        coin.store(false, Ordering::SeqCst);
        push.store(false, Ordering::SeqCst);
        if !moved {
            println!("  (nothing happens)");
        }
    };

    poll("Push while locked:", false, true);
    poll("Insert a coin:", true, false);
    poll("Insert another coin:", true, false);
    poll("Push through:", false, true);
    poll("Coin and push together:", true, true);
    poll("Wait around:", false, false);

    println!("\nFinal state: {:?}", turnstile.current_state());
    println!("\n=== Turnstile Complete ===");
}
