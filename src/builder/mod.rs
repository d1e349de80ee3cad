//! Builder API for assembling state machines.
//!
//! This module provides the fluent [`MachineBuilder`], the schema validation
//! it runs before a machine can exist, and macros that declare event and
//! state sets with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;
mod schema;

pub use error::{BuildError, SchemaViolation};
pub use machine::MachineBuilder;
