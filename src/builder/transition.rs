//! Builder for declaring state transitions.

use crate::builder::error::BuildError;
use crate::core::{Guard, StateId};

/// Builder for declaring transitions with a fluent API.
///
/// A finished declaration names its source, its target, and the guard
/// condition; it is attached to a machine through
/// [`StateMachineBuilder::transition`](crate::builder::StateMachineBuilder::transition).
pub struct TransitionBuilder<S: StateId> {
    from: Option<S>,
    to: Option<S>,
    guard: Option<Guard>,
}

impl<S: StateId> TransitionBuilder<S> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            to: None,
            guard: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Set the guard using a closure (required unless `guard` is called).
    pub fn when<F>(mut self, condition: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(condition));
        self
    }

    /// Set a prebuilt guard.
    pub fn guard(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    pub(crate) fn finish(self) -> Result<(S, S, Guard), BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;
        let guard = self.guard.ok_or(BuildError::MissingCondition)?;
        Ok((from, to, guard))
    }
}

impl<S: StateId> Default for TransitionBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Initial,
        Processing,
    }

    impl StateId for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Initial => "Initial",
                Self::Processing => "Processing",
            }
        }
    }

    #[test]
    fn builder_requires_a_source() {
        let result = TransitionBuilder::<TestState>::new()
            .to(TestState::Processing)
            .when(|| true)
            .finish();

        assert!(matches!(result, Err(BuildError::MissingFromState)));
    }

    #[test]
    fn builder_requires_a_target() {
        let result = TransitionBuilder::new()
            .from(TestState::Initial)
            .when(|| true)
            .finish();

        assert!(matches!(result, Err(BuildError::MissingToState)));
    }

    #[test]
    fn builder_requires_a_condition() {
        let result = TransitionBuilder::new()
            .from(TestState::Initial)
            .to(TestState::Processing)
            .finish();

        assert!(matches!(result, Err(BuildError::MissingCondition)));
    }

    #[test]
    fn complete_declarations_finish() {
        let (from, to, guard) = TransitionBuilder::new()
            .from(TestState::Initial)
            .to(TestState::Processing)
            .when(|| false)
            .finish()
            .unwrap();

        assert_eq!(from, TestState::Initial);
        assert_eq!(to, TestState::Processing);
        assert!(!guard.check());
    }

    #[test]
    fn prebuilt_guards_are_accepted() {
        let (_, _, guard) = TransitionBuilder::new()
            .from(TestState::Initial)
            .to(TestState::Processing)
            .guard(Guard::new(|| true))
            .finish()
            .unwrap();

        assert!(guard.check());
    }
}
