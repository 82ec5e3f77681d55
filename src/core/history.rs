//! Top-level activation history.
//!
//! Records every change of the machine's active top-level state, including
//! the moment it stops, so a host can audit what ran and when.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single top-level activation change.
///
/// `from: None` means the machine was idle before this change;
/// `to: None` means the machine stopped.
///
/// # Example
///
/// ```rust
/// use strata::core::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: None,
///     to: Some("Patrol".to_string()),
///     tick: 0,
///     timestamp: Utc::now(),
/// };
/// assert!(transition.is_start());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state being left
    pub from: Option<String>,
    /// The state being entered
    pub to: Option<String>,
    /// Tick counter value at which the change happened
    pub tick: u64,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
}

impl StateTransition {
    /// True when the machine went from idle to active.
    pub fn is_start(&self) -> bool {
        self.from.is_none() && self.to.is_some()
    }

    /// True when the machine went from active to stopped.
    pub fn is_stop(&self) -> bool {
        self.to.is_none()
    }
}

/// Ordered history of top-level activation changes.
///
/// `record` consumes the history and returns the extended one. An optional
/// limit bounds memory on long runs by discarding the oldest records.
///
/// # Example
///
/// ```rust
/// use strata::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: None,
///         to: Some("Gather".to_string()),
///         tick: 0,
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: Some("Gather".to_string()),
///         to: Some("Bank".to_string()),
///         tick: 12,
///         timestamp: Utc::now(),
///     });
///
/// assert_eq!(history.get_path(), vec!["Gather", "Bank"]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: Vec<StateTransition>,
    #[serde(default)]
    limit: Option<usize>,
}

impl StateHistory {
    /// Create a new, unbounded, empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            limit: None,
        }
    }

    /// Create an empty history that keeps at most `limit` records.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Record a transition, returning the extended history.
    pub fn record(mut self, transition: StateTransition) -> Self {
        self.transitions.push(transition);
        if let Some(limit) = self.limit {
            let excess = self.transitions.len().saturating_sub(limit);
            if excess > 0 {
                self.transitions.drain(..excess);
            }
        }
        self
    }

    /// Names of the states that were activated, in order.
    ///
    /// Stops (`to: None`) are skipped; a state activated twice appears twice.
    pub fn get_path(&self) -> Vec<&str> {
        self.transitions
            .iter()
            .filter_map(|t| t.to.as_deref())
            .collect()
    }

    /// Duration from the first to the last recorded change.
    ///
    /// Returns `None` when nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All retained transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition] {
        &self.transitions
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(from: Option<&str>, to: Option<&str>, tick: u64) -> StateTransition {
        StateTransition {
            from: from.map(str::to_string),
            to: to.map(str::to_string),
            tick,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert_eq!(history.limit(), None);
    }

    #[test]
    fn record_adds_transition() {
        let history = StateHistory::new().record(change(None, Some("Idle"), 0));
        assert_eq!(history.transitions().len(), 1);
        assert!(history.transitions()[0].is_start());
    }

    #[test]
    fn get_path_skips_stops() {
        let history = StateHistory::new()
            .record(change(None, Some("Patrol"), 0))
            .record(change(Some("Patrol"), Some("Fight"), 4))
            .record(change(Some("Fight"), None, 9))
            .record(change(None, Some("Patrol"), 10));

        assert_eq!(history.get_path(), vec!["Patrol", "Fight", "Patrol"]);
        assert!(history.transitions()[2].is_stop());
    }

    #[test]
    fn limit_drops_oldest_records() {
        let mut history = StateHistory::with_limit(2);
        for tick in 0..5 {
            history = history.record(change(None, Some("S"), tick));
        }

        let ticks: Vec<u64> = history.transitions().iter().map(|t| t.tick).collect();
        assert_eq!(ticks, vec![3, 4]);
    }

    #[test]
    fn zero_limit_retains_nothing() {
        let history = StateHistory::with_limit(0).record(change(None, Some("S"), 0));
        assert!(history.is_empty());
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let first = StateTransition {
            timestamp: start,
            ..change(None, Some("A"), 0)
        };
        let second = StateTransition {
            timestamp: start + chrono::Duration::milliseconds(25),
            ..change(Some("A"), Some("B"), 1)
        };

        let history = StateHistory::new().record(first).record(second);

        assert_eq!(history.duration(), Some(Duration::from_millis(25)));
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history = StateHistory::new().record(change(None, Some("A"), 0));
        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::with_limit(8)
            .record(change(None, Some("A"), 0))
            .record(change(Some("A"), None, 3));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.transitions(), history.transitions());
        assert_eq!(deserialized.limit(), Some(8));
    }
}
