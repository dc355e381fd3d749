//! Builder for assembling state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Guard, StateHooks, StateId};
use crate::engine::StateMachine;

/// Builder for assembling state machines with a fluent API.
///
/// Declarations are collected first and replayed into the engine by
/// [`build`](Self::build), in order: states, then transitions. The returned
/// machine is not yet started.
pub struct StateMachineBuilder<S: StateId> {
    states: Vec<(S, StateHooks)>,
    transitions: Vec<(S, S, Guard)>,
}

impl<S: StateId> StateMachineBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            transitions: Vec::new(),
        }
    }

    /// Declare a state with its lifecycle hooks.
    pub fn state(mut self, id: S, hooks: StateHooks) -> Self {
        self.states.push((id, hooks));
        self
    }

    /// Declare a transition using a builder.
    /// Returns an error if the declaration is incomplete.
    pub fn transition(mut self, builder: TransitionBuilder<S>) -> Result<Self, BuildError> {
        let declared = builder.finish()?;
        self.transitions.push(declared);
        Ok(self)
    }

    /// Declare multiple transitions at once.
    pub fn transitions(
        mut self,
        builders: Vec<TransitionBuilder<S>>,
    ) -> Result<Self, BuildError> {
        for builder in builders {
            let declared = builder.finish()?;
            self.transitions.push(declared);
        }
        Ok(self)
    }

    /// Assemble the machine.
    ///
    /// Replays every declaration through the engine's registration checks, so
    /// duplicate states and unknown transition endpoints surface here as
    /// [`BuildError::Machine`].
    pub fn build(self) -> Result<StateMachine<S>, BuildError> {
        let mut machine = StateMachine::new();
        for (id, hooks) in self.states {
            machine.register_state(id, hooks)?;
        }
        for (from, to, guard) in self.transitions {
            machine.register_guarded(from, to, guard)?;
        }
        Ok(machine)
    }
}

impl<S: StateId> Default for StateMachineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MachineError;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    impl StateId for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Initial => "Initial",
                Self::Processing => "Processing",
                Self::Complete => "Complete",
            }
        }
    }

    #[test]
    fn empty_builder_builds_an_empty_machine() {
        let machine = StateMachineBuilder::<TestState>::new().build().unwrap();

        assert_eq!(machine.state_count(), 0);
        assert!(!machine.is_started());
    }

    #[test]
    fn incomplete_transition_is_rejected_at_declaration() {
        let result = StateMachineBuilder::new()
            .state(TestState::Initial, StateHooks::new())
            .transition(TransitionBuilder::new().from(TestState::Initial));

        assert!(matches!(result, Err(BuildError::MissingToState)));
    }

    #[test]
    fn duplicate_states_surface_at_build() {
        let result = StateMachineBuilder::new()
            .state(TestState::Initial, StateHooks::new())
            .state(TestState::Initial, StateHooks::new())
            .build();

        assert!(matches!(
            result,
            Err(BuildError::Machine(MachineError::DuplicateState(name))) if name == "Initial"
        ));
    }

    #[test]
    fn unknown_endpoints_surface_at_build() {
        let result = StateMachineBuilder::new()
            .state(TestState::Initial, StateHooks::new())
            .transition(
                TransitionBuilder::new()
                    .from(TestState::Initial)
                    .to(TestState::Complete)
                    .when(|| true),
            )
            .unwrap()
            .build();

        assert!(matches!(
            result,
            Err(BuildError::Machine(MachineError::UnregisteredState(name))) if name == "Complete"
        ));
    }

    #[test]
    fn fluent_api_builds_a_working_machine() {
        let advance = Arc::new(AtomicBool::new(false));
        let watched = Arc::clone(&advance);

        let mut machine = StateMachineBuilder::new()
            .state(TestState::Initial, StateHooks::new())
            .state(TestState::Processing, StateHooks::new())
            .transition(
                TransitionBuilder::new()
                    .from(TestState::Initial)
                    .to(TestState::Processing)
                    .when(move || watched.load(Ordering::SeqCst)),
            )
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(machine.state_count(), 2);
        assert!(!machine.is_started());

        machine.start(TestState::Initial).unwrap();
        assert!(!machine.update().unwrap());

        advance.store(true, Ordering::SeqCst);
        assert!(machine.update().unwrap());
        assert_eq!(machine.current_state(), Some(&TestState::Processing));
    }

    #[test]
    fn bulk_declarations_keep_their_order() {
        let mut machine = StateMachineBuilder::new()
            .state(TestState::Initial, StateHooks::new())
            .state(TestState::Processing, StateHooks::new())
            .state(TestState::Complete, StateHooks::new())
            .transitions(vec![
                TransitionBuilder::new()
                    .from(TestState::Initial)
                    .to(TestState::Processing)
                    .when(|| true),
                TransitionBuilder::new()
                    .from(TestState::Initial)
                    .to(TestState::Complete)
                    .when(|| true),
            ])
            .unwrap()
            .build()
            .unwrap();

        machine.start(TestState::Initial).unwrap();
        machine.update().unwrap();

        // Both guards hold; the first declaration wins.
        assert_eq!(machine.current_state(), Some(&TestState::Processing));
    }
}
