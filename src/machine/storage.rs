//! Owned state values and the active-state tracker.

use crate::core::{State, StateSet};

/// Owns every declared state value and tracks which one is active.
///
/// State values live here from construction until the machine is dropped;
/// transitions only move the tracker. [`transition_to`](Storage::transition_to)
/// is the sole way to move it and is only reached from
/// [`Action::execute`](crate::actions::Action::execute).
pub struct Storage<S: StateSet> {
    states: S,
    active: S::Id,
}

impl<S: StateSet> Storage<S> {
    pub(crate) fn new(states: S, initial: S::Id) -> Self {
        Self {
            states,
            active: initial,
        }
    }

    /// Id of the live state.
    pub fn active(&self) -> S::Id {
        self.active
    }

    /// Shared access to the live state.
    pub fn active_state(&self) -> &dyn State<S> {
        self.states.state(self.active)
    }

    pub fn state(&self, id: S::Id) -> &dyn State<S> {
        self.states.state(id)
    }

    pub fn states(&self) -> &S {
        &self.states
    }

    pub(crate) fn state_mut(&mut self, id: S::Id) -> &mut dyn State<S> {
        self.states.state_mut(id)
    }

    /// Make `target` the live state and hand back its value.
    pub(crate) fn transition_to(&mut self, target: S::Id) -> &mut dyn State<S> {
        self.active = target;
        self.states.state_mut(target)
    }

    pub(crate) fn into_states(self) -> S {
        self.states
    }
}
