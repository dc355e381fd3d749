//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and macros for declaring state
//! machines with minimal boilerplate while keeping every registration check
//! of the engine.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::StateId;

/// Declare a transition that fires on the next update cycle.
///
/// # Example
///
/// ```
/// use escapement::builder::simple_transition;
/// use escapement::state_enum;
///
/// state_enum! {
///     enum MyState {
///         Start,
///         End,
///     }
/// }
///
/// let declaration = simple_transition(MyState::Start, MyState::End);
/// # let _ = declaration;
/// ```
pub fn simple_transition<S: StateId>(from: S, to: S) -> TransitionBuilder<S> {
    TransitionBuilder::new().from(from).to(to).when(|| true)
}

/// Declare a transition guarded by a condition closure.
///
/// # Example
///
/// ```
/// use escapement::builder::guarded_transition;
/// use escapement::state_enum;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// state_enum! {
///     enum MyState {
///         Start,
///         End,
///     }
/// }
///
/// let ready = Arc::new(AtomicBool::new(false));
/// let watched = Arc::clone(&ready);
/// let declaration = guarded_transition(MyState::Start, MyState::End, move || {
///     watched.load(Ordering::SeqCst)
/// });
/// # let _ = declaration;
/// ```
pub fn guarded_transition<S, F>(from: S, to: S, condition: F) -> TransitionBuilder<S>
where
    S: StateId,
    F: Fn() -> bool + Send + Sync + 'static,
{
    TransitionBuilder::new().from(from).to(to).when(condition)
}
