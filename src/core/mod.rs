//! Core state machine types.
//!
//! This module contains the declarations a machine is built from:
//! - State capabilities and the owned state set via `State` / `StateSet`
//! - The closed event set via `Event`
//! - Bounded transition history

mod event;
mod history;
mod state;

pub use event::Event;
pub use history::{StateHistory, StateTransition};
pub use state::{EventKind, State, StateSet};
