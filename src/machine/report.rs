//! Transition table rendering.
//!
//! Reads the resolved dispatch table only; nothing is executed.

use crate::actions::ActionKind;
use crate::core::{EventKind, StateSet};
use crate::machine::table::DispatchTable;
use std::fmt;

/// Printable view of a machine's (state, event) -> action kind mapping.
///
/// The first row lists event kinds, each following row one state:
///
/// ```text
///        | Open               | Close               | ...
/// Closed | TransitionTo<Open> | Nothing             | ...
/// ```
///
/// By default cells are unpadded; [`padded`](TransitionTable::padded) aligns
/// every column to the widest cell.
pub struct TransitionTable<'a, S: StateSet> {
    table: &'a DispatchTable<S>,
    padded: bool,
}

impl<'a, S: StateSet> TransitionTable<'a, S> {
    pub(crate) fn new(table: &'a DispatchTable<S>) -> Self {
        Self {
            table,
            padded: false,
        }
    }

    /// Align every column to the widest cell.
    pub fn padded(mut self) -> Self {
        self.padded = true;
        self
    }

    /// Action kind for one cell.
    pub fn cell(&self, state: S::Id, event: EventKind<S>) -> Option<&'a ActionKind<S::Id>> {
        self.table.resolve(state, event)
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let mut header = vec![String::new()];
        header.extend(self.table.events().iter().map(|kind| format!("{kind:?}")));

        let mut rows = vec![header];
        for state in self.table.states() {
            let mut row = vec![format!("{state:?}")];
            row.extend(self.table.events().iter().map(|kind| {
                self.table
                    .resolve(*state, *kind)
                    .map(ToString::to_string)
                    .unwrap_or_default()
            }));
            rows.push(row);
        }
        rows
    }
}

impl<S: StateSet> fmt::Display for TransitionTable<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows();
        let width = if self.padded {
            rows.iter().flatten().map(String::len).max().unwrap_or(0)
        } else {
            0
        };

        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" | ")?;
                }
                write!(f, "{cell:<width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
