//! Event trait describing the closed set of inputs a machine accepts.
//!
//! Events are values carrying transition data. Each event value reports a
//! `Kind` tag, and the tag is what handler composition and schema
//! validation operate on: overrides are keyed by kind, never by value.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for the event type of a state machine.
///
/// Usually generated with [`event_set!`](crate::event_set), which derives
/// the `Kind` tag enum from the event enum's variants.
///
/// # Example
///
/// ```rust
/// use statewise::core::Event;
///
/// #[derive(Debug)]
/// enum Signal {
///     Start,
///     Stop { reason: u8 },
/// }
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum SignalKind {
///     Start,
///     Stop,
/// }
///
/// impl Event for Signal {
///     type Kind = SignalKind;
///
///     fn kind(&self) -> SignalKind {
///         match self {
///             Self::Start => SignalKind::Start,
///             Self::Stop { .. } => SignalKind::Stop,
///         }
///     }
///
///     fn kinds() -> &'static [SignalKind] {
///         &[SignalKind::Start, SignalKind::Stop]
///     }
/// }
///
/// assert_eq!(Signal::Stop { reason: 1 }.kind(), SignalKind::Stop);
/// ```
pub trait Event: Debug {
    /// Tag identifying the event's type within the closed set.
    type Kind: Copy + Eq + Hash + Debug + 'static;

    /// Tag of this event value.
    fn kind(&self) -> Self::Kind;

    /// Every kind the event type can produce.
    ///
    /// Used as the declared event set when a builder is not given an
    /// explicit list.
    fn kinds() -> &'static [Self::Kind];
}
