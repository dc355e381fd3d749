//! Guarded edges between registered states.

use crate::core::{Guard, StateId};

/// A directed edge to a target state, controlled by a guard.
///
/// The source is implicit: every transition lives in the outgoing list of the
/// state it was registered on, and those lists keep registration order. The
/// engine scans the active state's list on each update and fires the first
/// transition whose guard holds.
pub struct Transition<S: StateId> {
    target: S,
    guard: Guard,
}

impl<S: StateId> Transition<S> {
    pub(crate) fn new(target: S, guard: Guard) -> Self {
        Self { target, guard }
    }

    /// Identifier of the state this transition leads to.
    pub fn target(&self) -> &S {
        &self.target
    }

    /// Evaluate the guard once.
    ///
    /// The engine calls this during the update scan; callers may also use it
    /// to inspect a guard without driving the machine.
    pub fn can_fire(&self) -> bool {
        self.guard.check()
    }
}
