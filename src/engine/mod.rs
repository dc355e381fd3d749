//! The machine layer: registered states, guarded transitions, and the
//! start/update protocol built on the vocabulary types in [`crate::core`].

mod error;
mod machine;
mod state;
mod transition;

pub use error::MachineError;
pub use machine::StateMachine;
pub use state::State;
pub use transition::Transition;
