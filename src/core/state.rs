//! State capability trait and the declared state set.
//!
//! A machine owns exactly one value per declared state for its entire
//! lifetime. `StateSet` is the type that owns those values and names them
//! through a copyable id; `State` is what each owned value can do.

use crate::actions::{Action, Will};
use crate::core::event::Event;
use std::fmt::Debug;
use std::hash::Hash;

/// Kind tag of a state set's event type.
pub type EventKind<S> = <<S as StateSet>::Event as Event>::Kind;

/// Capability trait implemented by every state value.
///
/// Only [`behavior`](State::behavior) is required. The runtime handler and
/// both lifecycle hooks default to no-ops, so a state opts into exactly the
/// reactions it needs. Hooks receive every event that causes a transition;
/// a state that only cares about some kinds matches on those and returns
/// `Ok(())` for the rest.
///
/// # Example
///
/// ```rust
/// use statewise::actions::{ActionKind, ByDefault, On, Will};
/// use statewise::core::State;
/// use statewise::{event_set, state_set};
/// use std::convert::Infallible;
///
/// event_set! {
///     pub enum Switch {
///         Flip,
///         Unplug,
///     }
///     kinds: SwitchKind
/// }
///
/// pub struct Dark;
///
/// pub struct Lit {
///     times_lit: u32,
/// }
///
/// state_set! {
///     pub struct Lamp: Switch, Infallible {
///         Dark => dark: Dark,
///         Lit => lit: Lit,
///     }
///     ids: LampState
/// }
///
/// impl State<Lamp> for Dark {
///     fn behavior(&self) -> Will<LampState, SwitchKind> {
///         Will::new(ByDefault(ActionKind::Nothing))
///             .on(On::new(SwitchKind::Flip, ActionKind::TransitionTo(LampState::Lit)))
///     }
/// }
///
/// impl State<Lamp> for Lit {
///     fn behavior(&self) -> Will<LampState, SwitchKind> {
///         Will::new(ByDefault(ActionKind::TransitionTo(LampState::Dark)))
///     }
///
///     fn on_enter(&mut self, _event: &Switch) -> Result<(), Infallible> {
///         self.times_lit += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait State<S: StateSet> {
    /// Declared composition mapping each event kind to an action kind.
    ///
    /// Read once when the machine is assembled; the result must not depend
    /// on the state's mutable data.
    fn behavior(&self) -> Will<S::Id, EventKind<S>>;

    /// Runtime handler for an incoming event.
    ///
    /// Returning `Ok(None)` uses the action the composition resolved for the
    /// event's kind. A state returns `Ok(Some(action))` to refine a choice
    /// kind (`Maybe`/`OneOf`) with a decision based on its own data.
    fn handle(&mut self, _event: &S::Event) -> Result<Option<Action<S::Id>>, S::Error> {
        Ok(None)
    }

    /// Called when this state becomes active through a transition.
    fn on_enter(&mut self, _event: &S::Event) -> Result<(), S::Error> {
        Ok(())
    }

    /// Called when this state stops being active through a transition.
    fn on_leave(&mut self, _event: &S::Event) -> Result<(), S::Error> {
        Ok(())
    }

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// The declared, closed set of states together with their owned values.
///
/// Usually generated with [`state_set!`](crate::state_set). Implementations
/// hand out references to the values they own and never create or drop
/// state values after construction.
pub trait StateSet: Sized + 'static {
    /// Copyable tag naming one declared state; the active-state tracker.
    type Id: Copy + Eq + Hash + Debug + 'static;

    /// Event type accepted by every state in the set.
    type Event: Event;

    /// Failure raised by handlers and hooks.
    ///
    /// Use [`std::convert::Infallible`] for machines whose states never fail.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Declared state ids in declaration order. The first is the default
    /// initial state.
    fn ids() -> &'static [Self::Id];

    /// Shared access to the value for `id`.
    fn state(&self, id: Self::Id) -> &dyn State<Self>;

    /// Exclusive access to the value for `id`.
    fn state_mut(&mut self, id: Self::Id) -> &mut dyn State<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{ActionKind, ByDefault, On};
    use std::convert::Infallible;

    #[derive(Debug)]
    enum Tick {
        Advance,
        Hold,
    }

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TickKind {
        Advance,
        Hold,
    }

    impl Event for Tick {
        type Kind = TickKind;

        fn kind(&self) -> TickKind {
            match self {
                Self::Advance => TickKind::Advance,
                Self::Hold => TickKind::Hold,
            }
        }

        fn kinds() -> &'static [TickKind] {
            &[TickKind::Advance, TickKind::Hold]
        }
    }

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum Phase {
        Start,
        End,
    }

    struct Start;

    struct End {
        entered: u32,
    }

    struct Phases {
        start: Start,
        end: End,
    }

    impl State<Phases> for Start {
        fn behavior(&self) -> Will<Phase, TickKind> {
            Will::new(ByDefault(ActionKind::Nothing))
                .on(On::new(TickKind::Advance, ActionKind::TransitionTo(Phase::End)))
        }
    }

    impl State<Phases> for End {
        fn behavior(&self) -> Will<Phase, TickKind> {
            Will::new(ByDefault(ActionKind::Nothing))
        }

        fn on_enter(&mut self, _event: &Tick) -> Result<(), Infallible> {
            self.entered += 1;
            Ok(())
        }

        fn is_final(&self) -> bool {
            true
        }
    }

    impl StateSet for Phases {
        type Id = Phase;
        type Event = Tick;
        type Error = Infallible;

        fn ids() -> &'static [Phase] {
            &[Phase::Start, Phase::End]
        }

        fn state(&self, id: Phase) -> &dyn State<Self> {
            match id {
                Phase::Start => &self.start,
                Phase::End => &self.end,
            }
        }

        fn state_mut(&mut self, id: Phase) -> &mut dyn State<Self> {
            match id {
                Phase::Start => &mut self.start,
                Phase::End => &mut self.end,
            }
        }
    }

    fn phases() -> Phases {
        Phases {
            start: Start,
            end: End { entered: 0 },
        }
    }

    #[test]
    fn default_handler_defers_to_composition() {
        let mut set = phases();
        let action = set.state_mut(Phase::Start).handle(&Tick::Advance).unwrap();
        assert!(action.is_none());
    }

    #[test]
    fn default_hooks_are_noops() {
        let mut set = phases();
        assert!(set.state_mut(Phase::Start).on_enter(&Tick::Hold).is_ok());
        assert!(set.state_mut(Phase::Start).on_leave(&Tick::Hold).is_ok());
    }

    #[test]
    fn overridden_hook_mutates_owned_value() {
        let mut set = phases();
        set.state_mut(Phase::End).on_enter(&Tick::Advance).unwrap();
        set.state_mut(Phase::End).on_enter(&Tick::Hold).unwrap();
        assert_eq!(set.end.entered, 2);
    }

    #[test]
    fn is_final_identifies_terminal_states() {
        let set = phases();
        assert!(!set.state(Phase::Start).is_final());
        assert!(set.state(Phase::End).is_final());
    }

    #[test]
    fn behavior_resolves_per_state() {
        let set = phases();
        let will = set.state(Phase::Start).behavior();
        assert_eq!(
            will.resolve(TickKind::Advance),
            &ActionKind::TransitionTo(Phase::End)
        );
        assert_eq!(will.resolve(TickKind::Hold), &ActionKind::Nothing);
    }
}
