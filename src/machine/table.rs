//! Dense (state, event) dispatch table resolved at assembly.

use crate::actions::{ActionKind, Will};
use crate::core::{EventKind, StateSet};
use std::collections::HashMap;

/// Every declared (state, event kind) pair resolved to its action kind.
///
/// Built once from each state's composition after the schema has been
/// validated. Lookups never allocate; an event kind outside the declared
/// set simply has no row.
pub(crate) struct DispatchTable<S: StateSet> {
    states: Vec<S::Id>,
    events: Vec<EventKind<S>>,
    state_index: HashMap<S::Id, usize>,
    event_index: HashMap<EventKind<S>, usize>,
    cells: Vec<ActionKind<S::Id>>,
}

impl<S: StateSet> DispatchTable<S> {
    /// `behaviors` must hold one composition per entry of `states`, in the
    /// same order.
    pub(crate) fn new(
        states: Vec<S::Id>,
        events: Vec<EventKind<S>>,
        behaviors: &[Will<S::Id, EventKind<S>>],
    ) -> Self {
        let state_index = states.iter().enumerate().map(|(i, id)| (*id, i)).collect();
        let event_index = events.iter().enumerate().map(|(i, k)| (*k, i)).collect();

        let mut cells = Vec::with_capacity(states.len() * events.len());
        for will in behaviors {
            for kind in &events {
                cells.push(will.resolve(*kind).clone());
            }
        }

        Self {
            states,
            events,
            state_index,
            event_index,
            cells,
        }
    }

    pub(crate) fn resolve(&self, state: S::Id, kind: EventKind<S>) -> Option<&ActionKind<S::Id>> {
        let row = *self.state_index.get(&state)?;
        let column = *self.event_index.get(&kind)?;
        self.cells.get(row * self.events.len() + column)
    }

    pub(crate) fn declares_state(&self, state: S::Id) -> bool {
        self.state_index.contains_key(&state)
    }

    pub(crate) fn states(&self) -> &[S::Id] {
        &self.states
    }

    pub(crate) fn events(&self) -> &[EventKind<S>] {
        &self.events
    }
}
