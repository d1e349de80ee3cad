//! Handler composition: a default action plus per-event overrides.

use super::kind::ActionKind;

/// Fallback action for every event kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ByDefault<I>(pub ActionKind<I>);

impl<I> ByDefault<I> {
    pub fn resolve(&self) -> &ActionKind<I> {
        &self.0
    }
}

/// Override mapping exactly one event kind to an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct On<K, I> {
    pub event: K,
    pub action: ActionKind<I>,
}

impl<K: PartialEq, I> On<K, I> {
    pub fn new(event: K, action: ActionKind<I>) -> Self {
        Self { event, action }
    }

    /// The override's action if `kind` is exactly its event kind.
    pub fn resolve(&self, kind: K) -> Option<&ActionKind<I>> {
        (self.event == kind).then_some(&self.action)
    }
}

/// A default combined with an ordered list of overrides.
///
/// Resolution is a pure lookup: the first override whose event kind equals
/// the incoming kind wins, otherwise the default applies.
///
/// # Example
///
/// ```rust
/// use statewise::actions::{ActionKind, ByDefault, On, Will};
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// enum Kind { Open, Close, Lock }
///
/// let closed = Will::new(ByDefault(ActionKind::Nothing))
///     .on(On::new(Kind::Lock, ActionKind::TransitionTo("Locked")))
///     .on(On::new(Kind::Open, ActionKind::TransitionTo("Open")));
///
/// assert_eq!(closed.resolve(Kind::Lock), &ActionKind::TransitionTo("Locked"));
/// assert_eq!(closed.resolve(Kind::Close), &ActionKind::Nothing);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Will<I, K> {
    default: ByDefault<I>,
    overrides: Vec<On<K, I>>,
}

impl<I, K: Copy + PartialEq> Will<I, K> {
    pub fn new(default: ByDefault<I>) -> Self {
        Self {
            default,
            overrides: Vec::new(),
        }
    }

    /// Add an override.
    pub fn on(mut self, on: On<K, I>) -> Self {
        self.overrides.push(on);
        self
    }

    /// Resolve the action kind for an event kind.
    pub fn resolve(&self, kind: K) -> &ActionKind<I> {
        self.overrides
            .iter()
            .find_map(|on| on.resolve(kind))
            .unwrap_or_else(|| self.default.resolve())
    }

    pub fn default_action(&self) -> &ActionKind<I> {
        self.default.resolve()
    }

    pub fn overrides(&self) -> &[On<K, I>] {
        &self.overrides
    }
}

impl<I, K: Copy + PartialEq> From<ByDefault<I>> for Will<I, K> {
    fn from(default: ByDefault<I>) -> Self {
        Self::new(default)
    }
}
