//! Statewise: a statically checked finite state machine engine
//!
//! A machine is declared as a closed set of states and a closed set of
//! events. Every state owns its data for the lifetime of the machine and
//! declares, per event kind, which action it will take. The declaration is
//! validated once when the machine is built, so dispatch never meets an
//! unknown state or an unhandled event.
//!
//! # Core Concepts
//!
//! - **Events**: a closed enum with a copyable kind tag via [`Event`]
//! - **States**: owned values implementing [`State`], grouped by a [`StateSet`]
//! - **Actions**: `Nothing` or `TransitionTo`, declared as an [`ActionKind`]
//!   that may leave a choice (`Maybe`, `OneOf`) to the state's handler
//! - **Composition**: [`Will`] combines a [`ByDefault`] with [`On`] overrides
//! - **Dispatch**: [`Machine::handle`] runs one event to completion,
//!   including `on_leave` / `on_enter` hooks
//!
//! # Example
//!
//! ```rust
//! use statewise::{event_set, state_set};
//! use statewise::{Action, ActionKind, ByDefault, MachineBuilder, On, State, Step, Will};
//! use std::convert::Infallible;
//!
//! event_set! {
//!     pub enum DoorEvent {
//!         Open,
//!         Close,
//!         Lock { new_key: u32 },
//!         Unlock { key: u32 },
//!     }
//!     kinds: DoorEventKind
//! }
//!
//! pub struct Closed;
//! pub struct Open;
//! pub struct Locked {
//!     key: u32,
//! }
//!
//! state_set! {
//!     pub struct Door: DoorEvent, Infallible {
//!         Closed => closed: Closed,
//!         Open => open: Open,
//!         Locked => locked: Locked,
//!     }
//!     ids: DoorState
//! }
//!
//! impl State<Door> for Closed {
//!     fn behavior(&self) -> Will<DoorState, DoorEventKind> {
//!         Will::new(ByDefault(ActionKind::Nothing))
//!             .on(On::new(DoorEventKind::Lock, ActionKind::TransitionTo(DoorState::Locked)))
//!             .on(On::new(DoorEventKind::Open, ActionKind::TransitionTo(DoorState::Open)))
//!     }
//! }
//!
//! impl State<Door> for Open {
//!     fn behavior(&self) -> Will<DoorState, DoorEventKind> {
//!         Will::new(ByDefault(ActionKind::Nothing))
//!             .on(On::new(DoorEventKind::Close, ActionKind::TransitionTo(DoorState::Closed)))
//!     }
//! }
//!
//! impl State<Door> for Locked {
//!     fn behavior(&self) -> Will<DoorState, DoorEventKind> {
//!         Will::new(ByDefault(ActionKind::Nothing)).on(On::new(
//!             DoorEventKind::Unlock,
//!             ActionKind::maybe(ActionKind::TransitionTo(DoorState::Closed)),
//!         ))
//!     }
//!
//!     fn handle(&mut self, event: &DoorEvent) -> Result<Option<Action<DoorState>>, Infallible> {
//!         Ok(match event {
//!             DoorEvent::Unlock { key } => Some(Action::maybe(
//!                 *key == self.key,
//!                 Action::TransitionTo(DoorState::Closed),
//!             )),
//!             _ => None,
//!         })
//!     }
//!
//!     fn on_enter(&mut self, event: &DoorEvent) -> Result<(), Infallible> {
//!         if let DoorEvent::Lock { new_key } = event {
//!             self.key = *new_key;
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let door = Door {
//!     closed: Closed,
//!     open: Open,
//!     locked: Locked { key: 0 },
//! };
//! let mut machine = MachineBuilder::new(door).build().unwrap();
//!
//! machine.handle(&DoorEvent::Lock { new_key: 1234 }).unwrap();
//! assert_eq!(machine.active(), DoorState::Locked);
//!
//! let step = machine.handle(&DoorEvent::Unlock { key: 1 }).unwrap();
//! assert_eq!(step, Step::Stayed(DoorState::Locked));
//!
//! machine.handle(&DoorEvent::Unlock { key: 1234 }).unwrap();
//! assert_eq!(machine.active(), DoorState::Closed);
//! ```

pub mod actions;
pub mod builder;
pub mod config;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use actions::{Action, ActionKind, ByDefault, On, Step, Will};
pub use builder::{BuildError, MachineBuilder, SchemaViolation};
pub use config::{ConfigError, MachineConfig};
pub use core::{Event, EventKind, State, StateHistory, StateSet, StateTransition};
pub use machine::{DispatchError, Hook, Machine, MachineError, TransitionTable};
