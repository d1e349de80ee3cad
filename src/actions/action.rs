//! Runtime actions and their execution contract.

use crate::core::{State, StateSet};
use crate::machine::{DispatchError, Hook, MachineError, Storage};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Effect produced by a state's reaction to an event.
///
/// `Maybe` and `OneOf` are declared through [`ActionKind`](super::ActionKind);
/// at runtime they are transparent and carry the alternative the handler
/// chose, which is always one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action<I> {
    /// No state change, no hooks.
    Nothing,

    /// Leave the active state and enter the target.
    TransitionTo(I),
}

/// Observable result of executing an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step<I> {
    /// The active state did not change.
    Stayed(I),

    /// The active state changed from `from` to `to`.
    Transitioned { from: I, to: I },
}

impl<I> Step<I> {
    pub fn is_transition(&self) -> bool {
        matches!(self, Step::Transitioned { .. })
    }
}

impl<I> Action<I> {
    /// Resolve a `Maybe`: `action` when `accept` holds, `Nothing` otherwise.
    ///
    /// ```rust
    /// use statewise::actions::Action;
    ///
    /// let key = 1234;
    /// assert_eq!(Action::maybe(key == 1234, Action::TransitionTo('c')), Action::TransitionTo('c'));
    /// assert_eq!(Action::maybe(key == 2, Action::TransitionTo('c')), Action::Nothing);
    /// ```
    pub fn maybe(accept: bool, action: Action<I>) -> Self {
        if accept {
            action
        } else {
            Action::Nothing
        }
    }

    pub fn is_nothing(&self) -> bool {
        matches!(self, Action::Nothing)
    }
}

impl<I: Copy + Debug> Action<I> {
    /// Execute against the machine's storage.
    ///
    /// `Nothing` has no effect. `TransitionTo(target)` runs, strictly in
    /// order: `on_leave` on `previous`, the tracker move to `target`, then
    /// `on_enter` on `target`, all with the same event. A hook failure stops
    /// the sequence where it is; nothing already done is undone.
    pub fn execute<S>(
        self,
        storage: &mut Storage<S>,
        previous: I,
        event: &S::Event,
    ) -> Result<Step<I>, MachineError<S>>
    where
        S: StateSet<Id = I>,
    {
        let target = match self {
            Action::Nothing => return Ok(Step::Stayed(previous)),
            Action::TransitionTo(target) => target,
        };

        storage
            .state_mut(previous)
            .on_leave(event)
            .map_err(|source| DispatchError::Hook {
                state: previous,
                hook: Hook::Leave,
                source,
            })?;

        let entered: &mut dyn State<S> = storage.transition_to(target);
        entered.on_enter(event).map_err(|source| DispatchError::Hook {
            state: target,
            hook: Hook::Enter,
            source,
        })?;

        Ok(Step::Transitioned {
            from: previous,
            to: target,
        })
    }
}
