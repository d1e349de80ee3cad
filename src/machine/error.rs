//! Errors surfaced by event dispatch.

use crate::actions::Action;
use crate::core::{EventKind, StateSet};
use std::fmt::{self, Debug};
use thiserror::Error;

/// Lifecycle hook that was running when a transition failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hook {
    Leave,
    Enter,
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hook::Leave => f.write_str("on_leave"),
            Hook::Enter => f.write_str("on_enter"),
        }
    }
}

/// Errors that can occur while handling an event.
///
/// Handler and hook failures are passed through untouched in `source`. No
/// error is rolled back: the tracker stays wherever the transition reached.
#[derive(Debug, Error)]
pub enum DispatchError<I: Debug, K: Debug, E: std::error::Error + 'static> {
    #[error("Event kind {kind:?} is not in the declared event set")]
    UndeclaredEvent { kind: K },

    #[error("Handler of state {state:?} failed on event {kind:?}")]
    Handler { state: I, kind: K, source: E },

    #[error("Hook {hook} of state {state:?} failed")]
    Hook { state: I, hook: Hook, source: E },

    #[error("State {state:?} declares a choice for event {kind:?} but its handler made none")]
    UndecidedChoice { state: I, kind: K },

    #[error("State {state:?} transitions to {target:?} on event {kind:?}, which is not a declared state")]
    UnknownTarget { state: I, kind: K, target: I },

    #[error("State {state:?} returned {action:?} for event {kind:?}, which its declaration does not admit")]
    NonConformingAction {
        state: I,
        kind: K,
        action: Action<I>,
    },
}

impl<I: Debug, K: Debug, E: std::error::Error + 'static> DispatchError<I, K, E> {
    /// Whether the error came from user code rather than the engine.
    pub fn is_state_failure(&self) -> bool {
        matches!(
            self,
            DispatchError::Handler { .. } | DispatchError::Hook { .. }
        )
    }
}

/// Dispatch error for a particular state set.
pub type MachineError<S> =
    DispatchError<<S as StateSet>::Id, EventKind<S>, <S as StateSet>::Error>;
