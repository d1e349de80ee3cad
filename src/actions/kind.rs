//! Declared action kinds.
//!
//! An `ActionKind` describes which action a (state, event) pair resolves to
//! without running anything. Plain kinds (`Nothing`, `TransitionTo`) can be
//! instantiated directly; choice kinds (`Maybe`, `OneOf`) name a fixed set
//! of alternatives and need the state's handler to pick one at runtime.

use super::action::Action;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Statically declared action for a (state, event) pair.
///
/// # Example
///
/// ```rust
/// use statewise::actions::{Action, ActionKind};
///
/// let unlock = ActionKind::maybe(ActionKind::TransitionTo("Closed"));
///
/// assert_eq!(unlock.to_string(), "Maybe<TransitionTo<\"Closed\">>");
/// assert!(unlock.admits(&Action::Nothing));
/// assert!(unlock.admits(&Action::TransitionTo("Closed")));
/// assert!(!unlock.admits(&Action::TransitionTo("Open")));
/// assert!(unlock.fresh().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind<I> {
    /// No state change, no hooks.
    Nothing,

    /// Unconditional transition to the target state.
    TransitionTo(I),

    /// Either the inner action or `Nothing`, decided by the handler.
    Maybe(Box<ActionKind<I>>),

    /// Exactly one of the listed alternatives, decided by the handler.
    OneOf(Vec<ActionKind<I>>),
}

impl<I> ActionKind<I> {
    /// `Maybe<kind>`: shorthand for `OneOf<kind, Nothing>`.
    pub fn maybe(kind: ActionKind<I>) -> Self {
        ActionKind::Maybe(Box::new(kind))
    }

    /// `OneOf<kinds...>`.
    pub fn one_of(kinds: impl IntoIterator<Item = ActionKind<I>>) -> Self {
        ActionKind::OneOf(kinds.into_iter().collect())
    }

    /// Whether the handler must choose the runtime action.
    pub fn is_choice(&self) -> bool {
        matches!(self, ActionKind::Maybe(_) | ActionKind::OneOf(_))
    }

    /// Visit every transition target this kind can produce.
    pub fn for_each_target<'a>(&'a self, visit: &mut dyn FnMut(&'a I)) {
        match self {
            ActionKind::Nothing => {}
            ActionKind::TransitionTo(target) => visit(target),
            ActionKind::Maybe(inner) => inner.for_each_target(visit),
            ActionKind::OneOf(kinds) => kinds.iter().for_each(|k| k.for_each_target(visit)),
        }
    }

    /// Whether this kind, or any kind nested in it, is an empty `OneOf`.
    pub(crate) fn has_empty_choice(&self) -> bool {
        match self {
            ActionKind::Nothing | ActionKind::TransitionTo(_) => false,
            ActionKind::Maybe(inner) => inner.has_empty_choice(),
            ActionKind::OneOf(kinds) => {
                kinds.is_empty() || kinds.iter().any(ActionKind::has_empty_choice)
            }
        }
    }
}

impl<I: Copy> ActionKind<I> {
    /// Construct the action for a plain kind.
    ///
    /// Returns `None` for choice kinds, which have no action without a
    /// runtime decision.
    pub fn fresh(&self) -> Option<Action<I>> {
        match self {
            ActionKind::Nothing => Some(Action::Nothing),
            ActionKind::TransitionTo(target) => Some(Action::TransitionTo(*target)),
            ActionKind::Maybe(_) | ActionKind::OneOf(_) => None,
        }
    }
}

impl<I: PartialEq> ActionKind<I> {
    /// Whether `action` is one of the alternatives this kind declares.
    pub fn admits(&self, action: &Action<I>) -> bool {
        match (self, action) {
            (ActionKind::Nothing, Action::Nothing) => true,
            (ActionKind::TransitionTo(target), Action::TransitionTo(chosen)) => target == chosen,
            (ActionKind::Maybe(inner), action) => {
                matches!(action, Action::Nothing) || inner.admits(action)
            }
            (ActionKind::OneOf(kinds), action) => kinds.iter().any(|k| k.admits(action)),
            _ => false,
        }
    }
}

impl<I: fmt::Debug> fmt::Display for ActionKind<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Nothing => f.write_str("Nothing"),
            ActionKind::TransitionTo(target) => write!(f, "TransitionTo<{target:?}>"),
            ActionKind::Maybe(inner) => write!(f, "Maybe<{inner}>"),
            ActionKind::OneOf(kinds) => {
                f.write_str("OneOf<")?;
                for (i, kind) in kinds.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{kind}")?;
                }
                f.write_str(">")
            }
        }
    }
}
