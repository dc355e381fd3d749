//! Escapement: a polled finite state machine library
//!
//! An escapement advances a clock one tick at a time; this crate does the
//! same for a set of registered states. Callers register states with
//! optional lifecycle hooks, connect them with guarded transitions, start
//! the machine once, and then poll it. Nothing moves between polls, and each
//! poll performs at most one transition.
//!
//! # Core Concepts
//!
//! - **StateId**: type-safe state identifiers via the `StateId` trait
//! - **Hooks**: optional `on_enter` / `on_update` / `on_leave` callbacks per
//!   state
//! - **Guards**: condition closures that control transitions, re-evaluated
//!   on every poll
//! - **Update cycle**: `on_update`, then a first-match guard scan, then on a
//!   match `on_leave` -> `on_enter`
//!
//! # Example
//!
//! ```rust
//! use escapement::{StateHooks, StateMachine};
//! use escapement::state_enum;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//!
//! state_enum! {
//!     enum Door {
//!         Closed,
//!         Open,
//!     }
//! }
//!
//! let mut machine = StateMachine::new();
//! machine
//!     .register_state(Door::Closed, StateHooks::new().on_enter(|| println!("latched")))
//!     .unwrap();
//! machine.register_state(Door::Open, StateHooks::new()).unwrap();
//!
//! let handle_turned = Arc::new(AtomicBool::new(false));
//! let watched = Arc::clone(&handle_turned);
//! machine
//!     .register_transition(Door::Closed, Door::Open, move || {
//!         watched.load(Ordering::SeqCst)
//!     })
//!     .unwrap();
//!
//! machine.start(Door::Closed).unwrap();
//! assert_eq!(machine.current_state(), Some(&Door::Closed));
//!
//! // No guard holds yet, so the machine stays put.
//! assert!(!machine.update().unwrap());
//!
//! handle_turned.store(true, Ordering::SeqCst);
//! assert!(machine.update().unwrap());
//! assert_eq!(machine.current_state(), Some(&Door::Open));
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::builder::{BuildError, StateMachineBuilder, TransitionBuilder};
pub use crate::core::{Guard, Hook, StateHooks, StateId};
pub use crate::engine::{MachineError, State, StateMachine, Transition};
