//! Transition Table
//!
//! This example prints the resolved (state, event) -> action kind table of
//! a small media player without dispatching a single event, then shows a
//! schema that is rejected when the machine is built.
//!
//! Run with: cargo run --example transition_table

use statewise::{event_set, state_set};
use statewise::{Action, ActionKind, BuildError, ByDefault, MachineBuilder, On, State, Will};
use std::convert::Infallible;
use tracing_subscriber::EnvFilter;

event_set! {
    pub enum Control {
        Play,
        Pause,
        Stop,
        Seek { to_end: bool },
    }
    kinds: ControlKind
}

pub struct Stopped;

pub struct Playing;

pub struct Paused;

state_set! {
    pub struct Player: Control, Infallible {
        Stopped => stopped: Stopped,
        Playing => playing: Playing,
        Paused => paused: Paused,
    }
    ids: PlayerState
}

impl State<Player> for Stopped {
    fn behavior(&self) -> Will<PlayerState, ControlKind> {
        Will::new(ByDefault(ActionKind::Nothing))
            .on(On::new(ControlKind::Play, ActionKind::TransitionTo(PlayerState::Playing)))
    }
}

impl State<Player> for Playing {
    fn behavior(&self) -> Will<PlayerState, ControlKind> {
        Will::new(ByDefault(ActionKind::Nothing))
            .on(On::new(ControlKind::Pause, ActionKind::TransitionTo(PlayerState::Paused)))
            .on(On::new(ControlKind::Stop, ActionKind::TransitionTo(PlayerState::Stopped)))
            .on(On::new(
                ControlKind::Seek,
                ActionKind::one_of([
                    ActionKind::TransitionTo(PlayerState::Stopped),
                    ActionKind::Nothing,
                ]),
            ))
    }

    fn handle(&mut self, event: &Control) -> Result<Option<Action<PlayerState>>, Infallible> {
        Ok(match event {
            Control::Seek { to_end } => Some(Action::maybe(
                *to_end,
                Action::TransitionTo(PlayerState::Stopped),
            )),
            _ => None,
        })
    }
}

impl State<Player> for Paused {
    fn behavior(&self) -> Will<PlayerState, ControlKind> {
        Will::new(ByDefault(ActionKind::TransitionTo(PlayerState::Stopped)))
            .on(On::new(ControlKind::Play, ActionKind::TransitionTo(PlayerState::Playing)))
            .on(On::new(ControlKind::Pause, ActionKind::Nothing))
    }
}

fn player() -> Player {
    Player {
        stopped: Stopped,
        playing: Playing,
        paused: Paused,
    }
}

fn main() -> Result<(), BuildError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("statewise=warn")),
        )
        .init();

    println!("=== Media Player Transition Table ===\n");

    let machine = MachineBuilder::new(player()).build()?;
    println!("{}", machine.transition_table().padded());

    let kind = machine.resolve_action_kind(PlayerState::Playing, ControlKind::Seek);
    if let Some(kind) = kind {
        println!("Playing on Seek resolves to {kind} (choice: {})\n", kind.is_choice());
    }

    println!("Building the same player without declaring Seek:");
    let rejected = MachineBuilder::new(player())
        .events([ControlKind::Play, ControlKind::Pause, ControlKind::Stop])
        .build();
    match rejected {
        Ok(_) => println!("  unexpectedly accepted"),
        Err(err) => {
            for violation in err.violations() {
                println!("  - {violation}");
            }
        }
    }

    Ok(())
}
