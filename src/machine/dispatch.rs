//! The machine: owned states, resolved dispatch table, and `handle`.

use crate::actions::{Action, ActionKind, Step};
use crate::config::MachineConfig;
use crate::core::{Event, EventKind, State, StateHistory, StateSet, StateTransition};
use crate::machine::error::{DispatchError, MachineError};
use crate::machine::report::TransitionTable;
use crate::machine::storage::Storage;
use crate::machine::table::DispatchTable;
use chrono::Utc;
use tracing::{debug, trace, warn};
use uuid::Uuid;

/// Finite state machine over a declared state set.
///
/// Assembled by [`MachineBuilder`](crate::builder::MachineBuilder), which
/// validates the schema before a machine can exist. `handle` takes
/// `&mut self`, so a handler or hook can never dispatch into the machine
/// that is running it; driving one machine from several threads needs
/// external locking.
pub struct Machine<S: StateSet> {
    id: Uuid,
    storage: Storage<S>,
    table: DispatchTable<S>,
    history: StateHistory<S::Id, EventKind<S>>,
    check_conformance: bool,
}

impl<S: StateSet> Machine<S> {
    pub(crate) fn assemble(
        states: S,
        initial: S::Id,
        table: DispatchTable<S>,
        config: &MachineConfig,
    ) -> Self {
        let id = Uuid::new_v4();
        debug!(
            machine = %id,
            initial = ?initial,
            states = table.states().len(),
            events = table.events().len(),
            "state machine assembled"
        );
        Self {
            id,
            storage: Storage::new(states, initial),
            table,
            history: StateHistory::with_capacity(config.history_capacity),
            check_conformance: config.check_conformance,
        }
    }

    /// Instance id attached to this machine's log records.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Id of the currently active state.
    pub fn active(&self) -> S::Id {
        self.storage.active()
    }

    pub fn active_state(&self) -> &dyn State<S> {
        self.storage.active_state()
    }

    pub fn state(&self, id: S::Id) -> &dyn State<S> {
        self.storage.state(id)
    }

    /// Shared access to every owned state value.
    pub fn states(&self) -> &S {
        self.storage.states()
    }

    /// Check if the active state is final.
    pub fn is_final(&self) -> bool {
        self.storage.active_state().is_final()
    }

    pub fn history(&self) -> &StateHistory<S::Id, EventKind<S>> {
        &self.history
    }

    pub fn declared_states(&self) -> &[S::Id] {
        self.table.states()
    }

    pub fn declared_events(&self) -> &[EventKind<S>] {
        self.table.events()
    }

    /// Action kind a (state, event kind) pair resolves to, without
    /// dispatching anything.
    ///
    /// Returns `None` when either side is outside the declared schema.
    pub fn resolve_action_kind(
        &self,
        state: S::Id,
        event: EventKind<S>,
    ) -> Option<&ActionKind<S::Id>> {
        self.table.resolve(state, event)
    }

    /// Human-readable transition table for the declared schema.
    pub fn transition_table(&self) -> TransitionTable<'_, S> {
        TransitionTable::new(&self.table)
    }

    /// Dispatch one event to the active state and execute the result.
    ///
    /// Runs to completion before returning: the active state's handler is
    /// consulted, the resolved action executed, and any transition hooks run
    /// in order. Declined `Maybe` choices return `Step::Stayed`, not an
    /// error.
    pub fn handle(&mut self, event: &S::Event) -> Result<Step<S::Id>, MachineError<S>> {
        let kind = event.kind();
        let from = self.storage.active();

        let declared = self
            .table
            .resolve(from, kind)
            .ok_or(DispatchError::UndeclaredEvent { kind })?;

        let chosen = self
            .storage
            .state_mut(from)
            .handle(event)
            .map_err(|source| DispatchError::Handler {
                state: from,
                kind,
                source,
            })?;

        let action = match chosen {
            Some(action) => action,
            None => declared
                .fresh()
                .ok_or(DispatchError::UndecidedChoice { state: from, kind })?,
        };

        if self.check_conformance && !declared.admits(&action) {
            return Err(DispatchError::NonConformingAction {
                state: from,
                kind,
                action,
            });
        }

        if let Action::TransitionTo(target) = action {
            if !self.table.declares_state(target) {
                return Err(DispatchError::UnknownTarget {
                    state: from,
                    kind,
                    target,
                });
            }
        }

        let step = action
            .execute(&mut self.storage, from, event)
            .inspect_err(|err| {
                warn!(
                    machine = %self.id,
                    event = ?kind,
                    active = ?self.storage.active(),
                    error = %err,
                    "transition interrupted by hook failure"
                )
            })?;

        match step {
            Step::Transitioned { from, to } => {
                debug!(machine = %self.id, from = ?from, to = ?to, event = ?kind, "state transition");
                if self.history.is_enabled() {
                    self.history.record(StateTransition {
                        from,
                        to,
                        event: kind,
                        timestamp: Utc::now(),
                    });
                }
            }
            Step::Stayed(state) => {
                trace!(machine = %self.id, state = ?state, event = ?kind, "event handled in place");
            }
        }

        Ok(step)
    }

    /// Tear the machine down, returning the owned state values.
    pub fn into_states(self) -> S {
        self.storage.into_states()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{ByDefault, Will};
    use crate::builder::MachineBuilder;
    use std::convert::Infallible;

    #[derive(Debug)]
    struct Ping;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    struct PingKind;

    impl Event for Ping {
        type Kind = PingKind;

        fn kind(&self) -> PingKind {
            PingKind
        }

        fn kinds() -> &'static [PingKind] {
            &[PingKind]
        }
    }

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum Room {
        Hall,
        Attic,
    }

    struct Hall;
    struct Attic;

    /// Owns a value for `Attic` but leaves it out of `ids()`.
    struct House {
        hall: Hall,
        attic: Attic,
    }

    impl State<House> for Hall {
        fn behavior(&self) -> Will<Room, PingKind> {
            Will::new(ByDefault(ActionKind::Nothing))
        }

        fn handle(&mut self, _event: &Ping) -> Result<Option<Action<Room>>, Infallible> {
            Ok(Some(Action::TransitionTo(Room::Attic)))
        }
    }

    impl State<House> for Attic {
        fn behavior(&self) -> Will<Room, PingKind> {
            Will::new(ByDefault(ActionKind::Nothing))
        }
    }

    impl StateSet for House {
        type Id = Room;
        type Event = Ping;
        type Error = Infallible;

        fn ids() -> &'static [Room] {
            &[Room::Hall]
        }

        fn state(&self, id: Room) -> &dyn State<Self> {
            match id {
                Room::Hall => &self.hall,
                Room::Attic => &self.attic,
            }
        }

        fn state_mut(&mut self, id: Room) -> &mut dyn State<Self> {
            match id {
                Room::Hall => &mut self.hall,
                Room::Attic => &mut self.attic,
            }
        }
    }

    fn house(check_conformance: bool) -> Machine<House> {
        let config = MachineConfig {
            check_conformance,
            ..MachineConfig::default()
        };
        MachineBuilder::new(House {
            hall: Hall,
            attic: Attic,
        })
        .config(config)
        .build()
        .unwrap()
    }

    #[test]
    fn undeclared_target_is_rejected_without_conformance_check() {
        let mut machine = house(false);

        let result = machine.handle(&Ping);
        assert!(matches!(
            result,
            Err(DispatchError::UnknownTarget {
                state: Room::Hall,
                kind: PingKind,
                target: Room::Attic,
            })
        ));
        assert_eq!(machine.active(), Room::Hall);
        assert!(machine.history().is_empty());
    }

    #[test]
    fn conformance_check_rejects_undeclared_target_first() {
        let mut machine = house(true);

        let result = machine.handle(&Ping);
        assert!(matches!(
            result,
            Err(DispatchError::NonConformingAction { .. })
        ));
        assert_eq!(machine.active(), Room::Hall);
    }
}
