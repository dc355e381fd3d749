//! Registered state records.

use crate::core::{StateHooks, StateId};
use crate::engine::transition::Transition;

/// A node of the machine: identifier, lifecycle hooks, and the ordered list
/// of outgoing transitions.
pub struct State<S: StateId> {
    id: S,
    hooks: StateHooks,
    transitions: Vec<Transition<S>>,
}

impl<S: StateId> State<S> {
    pub(crate) fn new(id: S, hooks: StateHooks) -> Self {
        Self {
            id,
            hooks,
            transitions: Vec::new(),
        }
    }

    /// The identifier this state was registered under.
    pub fn id(&self) -> &S {
        &self.id
    }

    /// Outgoing transitions in registration order.
    pub fn transitions(&self) -> &[Transition<S>] {
        &self.transitions
    }

    pub(crate) fn hooks(&self) -> &StateHooks {
        &self.hooks
    }

    pub(crate) fn push_transition(&mut self, transition: Transition<S>) {
        self.transitions.push(transition);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Guard;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Draft,
        Review,
        Published,
    }

    impl StateId for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Draft => "Draft",
                Self::Review => "Review",
                Self::Published => "Published",
            }
        }
    }

    #[test]
    fn fresh_state_has_no_transitions() {
        let state = State::new(TestState::Draft, StateHooks::new());

        assert_eq!(state.id(), &TestState::Draft);
        assert!(state.transitions().is_empty());
    }

    #[test]
    fn transitions_keep_registration_order() {
        let mut state = State::new(TestState::Draft, StateHooks::new());
        state.push_transition(Transition::new(TestState::Review, Guard::new(|| false)));
        state.push_transition(Transition::new(TestState::Published, Guard::new(|| false)));
        state.push_transition(Transition::new(TestState::Draft, Guard::new(|| true)));

        let targets: Vec<&TestState> = state.transitions().iter().map(|t| t.target()).collect();
        assert_eq!(
            targets,
            vec![&TestState::Review, &TestState::Published, &TestState::Draft]
        );
    }
}
