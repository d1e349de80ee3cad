//! Machine configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of transitions kept in a machine's history.
pub const DEFAULT_HISTORY_CAPACITY: usize = 32;

/// Largest history a machine may keep. History storage is reserved up front,
/// so the bound keeps a configuration value from sizing an allocation.
pub const MAX_HISTORY_CAPACITY: usize = 1 << 16;

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid machine configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("History capacity {requested} exceeds the maximum of {max}")]
    HistoryCapacity { requested: usize, max: usize },
}

/// Runtime options applied when a machine is assembled.
///
/// Missing fields take their defaults, so partial documents are accepted.
///
/// # Example
///
/// ```rust
/// use statewise::config::MachineConfig;
///
/// let config = MachineConfig::from_json(r#"{ "history_capacity": 4 }"#).unwrap();
/// assert_eq!(config.history_capacity, 4);
/// assert!(config.check_conformance);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Transitions kept for auditing; 0 disables history.
    pub history_capacity: usize,

    /// Reject runtime actions that the (state, event) declaration does not
    /// admit.
    ///
    /// Transition targets outside the declared states are rejected whether
    /// or not this is set.
    pub check_conformance: bool,
}

impl MachineConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable by a machine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity > MAX_HISTORY_CAPACITY {
            return Err(ConfigError::HistoryCapacity {
                requested: self.history_capacity,
                max: MAX_HISTORY_CAPACITY,
            });
        }
        Ok(())
    }

    pub fn without_history(mut self) -> Self {
        self.history_capacity = 0;
        self
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            check_conformance: true,
        }
    }
}
