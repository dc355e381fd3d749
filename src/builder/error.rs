//! Build errors for state machine and transition builders.

use thiserror::Error;

use crate::engine::MachineError;

/// Errors that can occur when declaring and assembling state machines.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("Transition condition not specified. Call .when(predicate)")]
    MissingCondition,

    /// Registration failed while replaying declarations into the engine.
    #[error(transparent)]
    Machine(#[from] MachineError),
}
