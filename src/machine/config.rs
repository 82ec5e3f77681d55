//! Machine configuration.

use crate::composite::Preemption;
use serde::{Deserialize, Serialize};

/// Host-tunable knobs for a [`StateMachine`](super::StateMachine).
///
/// Every field has a default, so a host can load a partial document:
///
/// ```rust
/// use strata::composite::Preemption;
/// use strata::machine::MachineConfig;
///
/// let config = MachineConfig::from_json_str(r#"{ "preemption": "preemptive" }"#).unwrap();
///
/// assert_eq!(config.preemption, Preemption::Preemptive);
/// assert!(config.record_history);
/// assert_eq!(config.name, "state_machine");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Scope name reported in observer events and validation errors.
    pub name: String,

    /// Whether a running top-level state can be interrupted.
    pub preemption: Preemption,

    /// Record top-level activation changes in the machine's history.
    pub record_history: bool,

    /// Keep at most this many history records. `None` keeps everything.
    pub history_limit: Option<usize>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            name: "state_machine".to_string(),
            preemption: Preemption::NonPreemptive,
            record_history: true,
            history_limit: Some(1024),
        }
    }
}

impl MachineConfig {
    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_non_preemptive_with_bounded_history() {
        let config = MachineConfig::default();
        assert_eq!(config.preemption, Preemption::NonPreemptive);
        assert!(config.record_history);
        assert_eq!(config.history_limit, Some(1024));
    }

    #[test]
    fn empty_document_yields_defaults() {
        let config = MachineConfig::from_json_str("{}").unwrap();
        assert_eq!(config, MachineConfig::default());
    }

    #[test]
    fn explicit_null_limit_means_unbounded() {
        let config =
            MachineConfig::from_json_str(r#"{ "name": "bot", "history_limit": null }"#).unwrap();
        assert_eq!(config.name, "bot");
        assert_eq!(config.history_limit, None);
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(MachineConfig::from_json_str(r#"{ "preemption": "sometimes" }"#).is_err());
    }

    #[test]
    fn round_trips_through_json() {
        let config = MachineConfig {
            record_history: false,
            ..MachineConfig::default().named("miner")
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(MachineConfig::from_json_str(&json).unwrap(), config);
    }
}
