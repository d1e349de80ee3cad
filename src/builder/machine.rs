//! Builder for assembling state machines.

use crate::builder::error::BuildError;
use crate::builder::schema;
use crate::config::MachineConfig;
use crate::core::{Event, EventKind, StateSet};
use crate::machine::{DispatchTable, Machine};
use tracing::warn;

/// Builder for assembling a [`Machine`] with a fluent API.
///
/// `build` is the configuration-time gate: it validates the declared
/// schema against every state's composition and refuses to produce a
/// machine if anything is inconsistent.
pub struct MachineBuilder<S: StateSet> {
    states: S,
    events: Option<Vec<EventKind<S>>>,
    initial: Option<S::Id>,
    config: MachineConfig,
}

impl<S: StateSet> MachineBuilder<S> {
    /// Create a builder owning one value per declared state.
    pub fn new(states: S) -> Self {
        Self {
            states,
            events: None,
            initial: None,
            config: MachineConfig::default(),
        }
    }

    /// Declare the event set (optional).
    ///
    /// Defaults to every kind the event type can produce. Overrides naming a
    /// kind outside the declared set fail the build. The event type itself
    /// can still carry those kinds; handling one returns
    /// [`DispatchError::UndeclaredEvent`](crate::machine::DispatchError::UndeclaredEvent)
    /// and leaves the machine unchanged. Keep the default to make every
    /// event value dispatchable.
    pub fn events(mut self, events: impl IntoIterator<Item = EventKind<S>>) -> Self {
        self.events = Some(events.into_iter().collect());
        self
    }

    /// Set the initial state (optional).
    ///
    /// Defaults to the first declared state.
    pub fn initial(mut self, state: S::Id) -> Self {
        self.initial = Some(state);
        self
    }

    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Keep at most `capacity` transitions in the machine's history.
    pub fn history(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    /// Validate the schema and assemble the machine.
    pub fn build(self) -> Result<Machine<S>, BuildError> {
        self.config.validate()?;

        let ids = S::ids();
        let events = self
            .events
            .unwrap_or_else(|| <S::Event as Event>::kinds().to_vec());

        let behaviors: Vec<_> = ids
            .iter()
            .map(|id| (*id, self.states.state(*id).behavior()))
            .collect();

        if let Err(violations) = schema::validate(ids, &events, &behaviors) {
            warn!(
                violations = violations.len(),
                "rejected state machine schema"
            );
            return Err(BuildError::Schema(violations));
        }

        let initial = match self.initial {
            Some(initial) if ids.contains(&initial) => initial,
            Some(initial) => return Err(BuildError::UnknownInitialState(format!("{initial:?}"))),
            None => ids[0],
        };

        let wills: Vec<_> = behaviors.into_iter().map(|(_, will)| will).collect();
        let table = DispatchTable::new(ids.to_vec(), events, &wills);

        Ok(Machine::assemble(self.states, initial, table, &self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{Action, ActionKind, ByDefault, On, Step, Will};
    use crate::config::ConfigError;
    use crate::core::State;
    use crate::machine::DispatchError;
    use std::convert::Infallible;

    crate::event_set! {
        enum Input {
            Next,
            Reset,
            Pick { second: bool },
        }
        kinds: InputKind
    }

    crate::state_set! {
        struct Cycle: Input, Infallible {
            First => first: First,
            Second => second: Second,
            Third => third: Third,
        }
        ids: Stage
    }

    struct First;
    struct Second;
    struct Third;

    impl State<Cycle> for First {
        fn behavior(&self) -> Will<Stage, InputKind> {
            Will::new(ByDefault(ActionKind::Nothing))
                .on(On::new(InputKind::Next, ActionKind::TransitionTo(Stage::Second)))
                .on(On::new(
                    InputKind::Pick,
                    ActionKind::one_of([
                        ActionKind::TransitionTo(Stage::Second),
                        ActionKind::TransitionTo(Stage::Third),
                    ]),
                ))
        }

        fn handle(&mut self, event: &Input) -> Result<Option<Action<Stage>>, Infallible> {
            Ok(match event {
                Input::Pick { second: true } => Some(Action::TransitionTo(Stage::Second)),
                Input::Pick { second: false } => Some(Action::TransitionTo(Stage::Third)),
                _ => None,
            })
        }
    }

    impl State<Cycle> for Second {
        fn behavior(&self) -> Will<Stage, InputKind> {
            Will::new(ByDefault(ActionKind::TransitionTo(Stage::First)))
                .on(On::new(InputKind::Next, ActionKind::TransitionTo(Stage::Third)))
        }
    }

    impl State<Cycle> for Third {
        fn behavior(&self) -> Will<Stage, InputKind> {
            Will::new(ByDefault(ActionKind::maybe(ActionKind::TransitionTo(
                Stage::First,
            ))))
        }

        fn is_final(&self) -> bool {
            true
        }
    }

    fn cycle() -> Cycle {
        Cycle {
            first: First,
            second: Second,
            third: Third,
        }
    }

    #[test]
    fn builder_defaults_to_first_state_and_all_events() {
        let machine = MachineBuilder::new(cycle()).build().unwrap();

        assert_eq!(machine.active(), Stage::First);
        assert_eq!(
            machine.declared_events(),
            &[InputKind::Next, InputKind::Reset, InputKind::Pick]
        );
        assert_eq!(
            machine.declared_states(),
            &[Stage::First, Stage::Second, Stage::Third]
        );
    }

    #[test]
    fn builder_honours_explicit_initial_state() {
        let machine = MachineBuilder::new(cycle())
            .initial(Stage::Second)
            .build()
            .unwrap();

        assert_eq!(machine.active(), Stage::Second);
    }

    #[test]
    fn builder_rejects_undeclared_override() {
        let result = MachineBuilder::new(cycle())
            .events([InputKind::Next, InputKind::Reset])
            .build();

        let err = result.err().unwrap();
        assert!(matches!(err, BuildError::Schema(_)));
        assert_eq!(err.violations().len(), 1);
    }

    #[test]
    fn builder_applies_history_capacity() {
        let machine = MachineBuilder::new(cycle()).history(2).build().unwrap();
        assert_eq!(machine.history().capacity(), 2);

        let machine = MachineBuilder::new(cycle())
            .config(MachineConfig::default().without_history())
            .build()
            .unwrap();
        assert!(!machine.history().is_enabled());
    }

    #[test]
    fn builder_rejects_oversized_history() {
        let result = MachineBuilder::new(cycle()).history(usize::MAX).build();

        assert!(matches!(
            result,
            Err(BuildError::Config(ConfigError::HistoryCapacity { .. }))
        ));
    }

    #[test]
    fn default_event_set_dispatches_every_kind() {
        let mut machine = MachineBuilder::new(cycle()).build().unwrap();

        for event in [Input::Next, Input::Reset, Input::Pick { second: true }] {
            let result = machine.handle(&event);
            assert!(!matches!(result, Err(DispatchError::UndeclaredEvent { .. })));
        }
    }

    #[test]
    fn one_of_executes_the_chosen_alternative() {
        let mut machine = MachineBuilder::new(cycle()).build().unwrap();

        let step = machine.handle(&Input::Pick { second: false }).unwrap();
        assert_eq!(
            step,
            Step::Transitioned {
                from: Stage::First,
                to: Stage::Third
            }
        );
        assert!(machine.is_final());
    }

    #[test]
    fn undecided_choice_is_reported() {
        let mut machine = MachineBuilder::new(cycle())
            .initial(Stage::Third)
            .build()
            .unwrap();

        let result = machine.handle(&Input::Next);
        assert!(matches!(
            result,
            Err(DispatchError::UndecidedChoice {
                state: Stage::Third,
                kind: InputKind::Next
            })
        ));
        assert_eq!(machine.active(), Stage::Third);
    }

    #[test]
    fn undeclared_event_kind_has_no_row() {
        let mut machine = MachineBuilder::new(cycle())
            .events([InputKind::Next, InputKind::Pick])
            .build()
            .unwrap();

        let result = machine.handle(&Input::Reset);
        assert!(matches!(
            result,
            Err(DispatchError::UndeclaredEvent {
                kind: InputKind::Reset
            })
        ));
        assert_eq!(machine.active(), Stage::First);
    }

    #[test]
    fn history_records_transitions_in_order() {
        let mut machine = MachineBuilder::new(cycle()).build().unwrap();

        machine.handle(&Input::Next).unwrap();
        machine.handle(&Input::Next).unwrap();

        let path = machine.history().get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path, vec![&Stage::First, &Stage::Second, &Stage::Third]);
    }
}
