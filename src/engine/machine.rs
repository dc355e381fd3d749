//! The machine engine: registration, start, and the update protocol.

use std::collections::HashMap;

use crate::core::{Guard, StateHooks, StateId};
use crate::engine::error::MachineError;
use crate::engine::state::State;
use crate::engine::transition::Transition;

/// A polled finite state machine over identifier type `S`.
///
/// The machine is driven from outside: nothing happens between calls to
/// [`update`](Self::update). Each update cycle runs the active state's
/// `on_update` hook, then scans that state's transitions in registration
/// order and fires the first one whose guard holds:
///
/// 1. `on_update` of the active state
/// 2. guard scan, stopping at the first `true`
/// 3. on a match: `on_leave` of the old state, reassign, `on_enter` of the
///    new state
///
/// At most one transition fires per update, and the newly entered state's
/// `on_update` does not run until the next cycle. When no guard holds the
/// machine stays put.
pub struct StateMachine<S: StateId> {
    states: HashMap<S, State<S>>,
    current: Option<S>,
}

impl<S: StateId> StateMachine<S> {
    /// Create an empty machine with no states and no current state.
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            current: None,
        }
    }

    /// Register a state under its identifier.
    ///
    /// Fails with [`MachineError::DuplicateState`] if the identifier is
    /// already taken; the original registration is kept untouched.
    pub fn register_state(&mut self, id: S, hooks: StateHooks) -> Result<(), MachineError> {
        if self.states.contains_key(&id) {
            return Err(MachineError::DuplicateState(id.name().to_string()));
        }
        self.states.insert(id.clone(), State::new(id, hooks));
        Ok(())
    }

    /// Register a transition from `from` to `to`, guarded by `condition`.
    ///
    /// Both endpoints must already be registered. Transitions out of a state
    /// are scanned in the order they were registered here, so earlier
    /// registrations take precedence when several guards hold at once.
    /// Nothing is evaluated at registration time.
    pub fn register_transition<F>(
        &mut self,
        from: S,
        to: S,
        condition: F,
    ) -> Result<(), MachineError>
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.register_guarded(from, to, Guard::new(condition))
    }

    pub(crate) fn register_guarded(
        &mut self,
        from: S,
        to: S,
        guard: Guard,
    ) -> Result<(), MachineError> {
        let target_known = self.states.contains_key(&to);
        let Some(source) = self.states.get_mut(&from) else {
            return Err(MachineError::UnregisteredState(from.name().to_string()));
        };
        if !target_known {
            return Err(MachineError::UnregisteredState(to.name().to_string()));
        }
        source.push_transition(Transition::new(to, guard));
        Ok(())
    }

    /// Start the machine in `initial`, firing that state's `on_enter` hook.
    ///
    /// A machine starts at most once; a second call fails with
    /// [`MachineError::AlreadyStarted`] no matter which state it names.
    /// No guards are evaluated during start.
    pub fn start(&mut self, initial: S) -> Result<(), MachineError> {
        if self.current.is_some() {
            return Err(MachineError::AlreadyStarted);
        }
        let Some(state) = self.states.get(&initial) else {
            return Err(MachineError::UnregisteredState(initial.name().to_string()));
        };
        self.current = Some(initial);
        state.hooks().enter();
        Ok(())
    }

    /// Drive one update cycle.
    ///
    /// Runs the active state's `on_update` hook, then fires the first
    /// transition whose guard holds. Returns `Ok(true)` when a transition
    /// fired and `Ok(false)` when the machine stayed in place. Guards are
    /// re-evaluated from scratch on every call.
    pub fn update(&mut self) -> Result<bool, MachineError> {
        let Some(current_id) = self.current.clone() else {
            return Err(MachineError::NotStarted);
        };
        let state = self
            .states
            .get(&current_id)
            .expect("current state is always registered");

        state.hooks().update();

        let fired = state
            .transitions()
            .iter()
            .find(|transition| transition.can_fire())
            .map(|transition| transition.target().clone());
        let Some(target) = fired else {
            return Ok(false);
        };

        state.hooks().leave();
        self.current = Some(target.clone());
        let entered = self
            .states
            .get(&target)
            .expect("transition targets are checked at registration");
        entered.hooks().enter();
        Ok(true)
    }

    /// Whether `start` has completed successfully.
    pub fn is_started(&self) -> bool {
        self.current.is_some()
    }

    /// Identifier of the active state, or `None` before start.
    pub fn current_state(&self) -> Option<&S> {
        self.current.as_ref()
    }

    /// Look up a registered state record.
    pub fn state(&self, id: &S) -> Option<&State<S>> {
        self.states.get(id)
    }

    /// Number of registered states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }
}

impl<S: StateId> Default for StateMachine<S> {
    fn default() -> Self {
        Self::new()
    }
}
