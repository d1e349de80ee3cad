//! State transition history tracking.
//!
//! Keeps a bounded, in-memory audit trail of the transitions a machine has
//! taken. Storage is reserved up front so recording does not allocate once
//! the machine is running.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use statewise::core::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: "Closed",
///     to: "Locked",
///     event: "Lock",
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, "Locked");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition<I, K> {
    /// The state being left
    pub from: I,
    /// The state being entered
    pub to: I,
    /// Kind of the event that caused the transition
    pub event: K,
    /// When the transition completed
    pub timestamp: DateTime<Utc>,
}

/// Ordered, bounded history of state transitions.
///
/// Once `capacity` transitions are held, recording a new one evicts the
/// oldest. A capacity of zero disables recording.
///
/// # Example
///
/// ```rust
/// use statewise::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let mut history = StateHistory::with_capacity(8);
///
/// history.record(StateTransition {
///     from: 'a',
///     to: 'b',
///     event: 1,
///     timestamp: Utc::now(),
/// });
/// history.record(StateTransition {
///     from: 'b',
///     to: 'c',
///     event: 2,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&'a', &'b', &'c']);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory<I, K> {
    capacity: usize,
    transitions: VecDeque<StateTransition<I, K>>,
}

impl<I, K> StateHistory<I, K> {
    /// Create a history that keeps at most `capacity` transitions.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            transitions: VecDeque::with_capacity(capacity),
        }
    }

    /// Create a history that records nothing.
    pub fn disabled() -> Self {
        Self::with_capacity(0)
    }

    /// Whether transitions are being kept.
    pub fn is_enabled(&self) -> bool {
        self.capacity > 0
    }

    /// Maximum number of transitions kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Record a transition, evicting the oldest when full.
    pub fn record(&mut self, transition: StateTransition<I, K>) {
        if self.capacity == 0 {
            return;
        }
        if self.transitions.len() == self.capacity {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest kept transition, then the
    /// `to` state of each transition in order.
    pub fn get_path(&self) -> Vec<&I> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the oldest and newest kept transitions.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Kept transitions, oldest first.
    pub fn transitions(&self) -> impl ExactSizeIterator<Item = &StateTransition<I, K>> {
        self.transitions.iter()
    }

    /// Number of kept transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Most recent transition.
    pub fn last(&self) -> Option<&StateTransition<I, K>> {
        self.transitions.back()
    }
}

impl<I, K> Default for StateHistory<I, K> {
    fn default() -> Self {
        Self::disabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    fn transition(from: TestState, to: TestState) -> StateTransition<TestState, u8> {
        StateTransition {
            from,
            to,
            event: 0,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<TestState, u8> = StateHistory::with_capacity(4);
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn disabled_history_records_nothing() {
        let mut history = StateHistory::disabled();
        history.record(transition(TestState::Initial, TestState::Processing));
        assert!(!history.is_enabled());
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let mut history = StateHistory::with_capacity(4);
        history.record(transition(TestState::Initial, TestState::Processing));
        history.record(transition(TestState::Processing, TestState::Complete));

        let path = history.get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &TestState::Initial);
        assert_eq!(path[1], &TestState::Processing);
        assert_eq!(path[2], &TestState::Complete);
    }

    #[test]
    fn full_history_evicts_oldest() {
        let mut history = StateHistory::with_capacity(2);
        history.record(transition(TestState::Initial, TestState::Processing));
        history.record(transition(TestState::Processing, TestState::Complete));
        history.record(transition(TestState::Complete, TestState::Initial));

        assert_eq!(history.len(), 2);
        assert_eq!(
            history.get_path(),
            vec![
                &TestState::Processing,
                &TestState::Complete,
                &TestState::Initial
            ]
        );
        assert_eq!(history.last().map(|t| t.to), Some(TestState::Initial));
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let mut history = StateHistory::with_capacity(1);
        history.record(transition(TestState::Initial, TestState::Processing));
        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let mut history = StateHistory::with_capacity(4);
        let start = Utc::now();
        history.record(StateTransition {
            from: TestState::Initial,
            to: TestState::Processing,
            event: 0u8,
            timestamp: start,
        });
        history.record(StateTransition {
            from: TestState::Processing,
            to: TestState::Complete,
            event: 1u8,
            timestamp: start + chrono::Duration::milliseconds(25),
        });

        assert_eq!(history.duration(), Some(Duration::from_millis(25)));
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = StateHistory::with_capacity(4);
        history.record(transition(TestState::Initial, TestState::Processing));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<TestState, u8> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.capacity(), 4);
        assert_eq!(deserialized.last(), history.last());
    }
}
