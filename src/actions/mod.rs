//! The action vocabulary states return from their handlers.
//!
//! # Key Concepts
//!
//! - **Action**: the runtime effect, `Nothing` or `TransitionTo(target)`
//! - **ActionKind**: the declared effect for a (state, event) pair, which
//!   may be a choice (`Maybe`, `OneOf`) resolved by the handler at runtime
//! - **Composition**: `Will` combines a `ByDefault` with `On` overrides

mod action;
mod compose;
mod kind;

pub use action::{Action, Step};
pub use compose::{ByDefault, On, Will};
pub use kind::ActionKind;
