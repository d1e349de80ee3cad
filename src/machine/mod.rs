//! State storage, event dispatch, and the introspection surface.
//!
//! # Key Concepts
//!
//! - **Storage**: one owned value per declared state plus the active-state
//!   tracker
//! - **Machine**: resolves the active state's action for an event and
//!   executes it, hooks included
//! - **TransitionTable**: renders the resolved schema without dispatching

mod dispatch;
mod error;
mod report;
mod storage;
mod table;

pub use dispatch::Machine;
pub use error::{DispatchError, Hook, MachineError};
pub use report::TransitionTable;
pub use storage::Storage;

pub(crate) use table::DispatchTable;
