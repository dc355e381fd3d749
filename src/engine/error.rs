//! Errors reported by the machine engine.

use thiserror::Error;

/// Errors that can occur while registering, starting, or updating a machine.
#[derive(Debug, Error)]
pub enum MachineError {
    /// A state identifier was registered a second time.
    #[error("State '{0}' is already registered")]
    DuplicateState(String),

    /// An operation referenced a state identifier the machine does not know.
    #[error("State '{0}' is not registered")]
    UnregisteredState(String),

    /// `start` was called on a machine that is already running.
    #[error("Machine has already been started")]
    AlreadyStarted,

    /// `update` was called before `start`.
    #[error("Machine has not been started yet")]
    NotStarted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_state() {
        let duplicate = MachineError::DuplicateState("Green".to_string());
        let missing = MachineError::UnregisteredState("Red".to_string());

        assert_eq!(duplicate.to_string(), "State 'Green' is already registered");
        assert_eq!(missing.to_string(), "State 'Red' is not registered");
    }

    #[test]
    fn lifecycle_errors_have_stable_messages() {
        assert_eq!(
            MachineError::AlreadyStarted.to_string(),
            "Machine has already been started"
        );
        assert_eq!(
            MachineError::NotStarted.to_string(),
            "Machine has not been started yet"
        );
    }
}
