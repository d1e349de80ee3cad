//! Keyed Door State Machine
//!
//! This example walks a door through opening, closing, locking, and
//! unlocking with a key the Locked state remembers.
//!
//! Key concepts:
//! - Default-with-overrides composition per state
//! - A `Maybe` decided by the state's own data
//! - `on_enter` capturing data from the event that caused the transition
//!
//! Run with: RUST_LOG=statewise=debug cargo run --example door

use statewise::{event_set, state_set};
use statewise::{Action, ActionKind, ByDefault, MachineBuilder, On, State, Will};
use std::convert::Infallible;
use tracing_subscriber::EnvFilter;

event_set! {
    pub enum DoorEvent {
        Open,
        Close,
        Lock { new_key: u32 },
        Unlock { key: u32 },
    }
    kinds: DoorEventKind
}

pub struct Closed;

pub struct Open;

pub struct Locked {
    key: u32,
}

state_set! {
    pub struct Door: DoorEvent, Infallible {
        Closed => closed: Closed,
        Open => open: Open,
        Locked => locked: Locked,
    }
    ids: DoorState
}

impl State<Door> for Closed {
    fn behavior(&self) -> Will<DoorState, DoorEventKind> {
        Will::new(ByDefault(ActionKind::Nothing))
            .on(On::new(DoorEventKind::Lock, ActionKind::TransitionTo(DoorState::Locked)))
            .on(On::new(DoorEventKind::Open, ActionKind::TransitionTo(DoorState::Open)))
    }
}

impl State<Door> for Open {
    fn behavior(&self) -> Will<DoorState, DoorEventKind> {
        Will::new(ByDefault(ActionKind::Nothing))
            .on(On::new(DoorEventKind::Close, ActionKind::TransitionTo(DoorState::Closed)))
    }
}

impl State<Door> for Locked {
    fn behavior(&self) -> Will<DoorState, DoorEventKind> {
        Will::new(ByDefault(ActionKind::Nothing)).on(On::new(
            DoorEventKind::Unlock,
            ActionKind::maybe(ActionKind::TransitionTo(DoorState::Closed)),
        ))
    }

    fn handle(&mut self, event: &DoorEvent) -> Result<Option<Action<DoorState>>, Infallible> {
        Ok(match event {
            DoorEvent::Unlock { key } => Some(Action::maybe(
                *key == self.key,
                Action::TransitionTo(DoorState::Closed),
            )),
            _ => None,
        })
    }

    fn on_enter(&mut self, event: &DoorEvent) -> Result<(), Infallible> {
        if let DoorEvent::Lock { new_key } = event {
            self.key = *new_key;
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("statewise=info")),
        )
        .init();

    println!("=== Keyed Door State Machine ===\n");

    let door = Door {
        closed: Closed,
        open: Open,
        locked: Locked { key: 0 },
    };
    let mut machine = MachineBuilder::new(door).build()?;
    println!("Machine {} starts in {:?}\n", machine.id(), machine.active());

    let script = [
        DoorEvent::Open,
        DoorEvent::Open,
        DoorEvent::Close,
        DoorEvent::Lock { new_key: 1234 },
        DoorEvent::Unlock { key: 2 },
        DoorEvent::Unlock { key: 1234 },
    ];

    for event in &script {
        let step = machine.handle(event)?;
        println!("{:<26} -> {:?}", format!("{event:?}"), step);
    }

    println!("\nPath taken:");
    let path: Vec<_> = machine
        .history()
        .get_path()
        .into_iter()
        .map(|state| state.name())
        .collect();
    println!("  {}", path.join(" -> "));

    Ok(())
}
