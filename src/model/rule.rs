//! Canonical rule variants.

use chrono::{DateTime, Utc};

use super::labels::PromLabels;
use super::state::AlertState;
use super::strategy::PartialResponseStrategy;
use super::zero_time;

/// A single rule: exactly one of the two variants.
///
/// The set is closed by design; the rules API knows no third shape and the
/// decoder rejects anything else.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    Recording(RecordingRule),
    Alerting(AlertingRule),
}

/// A rule that stores the result of a query as a new time series.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingRule {
    pub name: String,
    pub query: String,
    pub labels: PromLabels,
    /// Free-form health string as reported by the evaluation engine; not a
    /// closed enum.
    pub health: String,
    /// Empty means no error.
    pub last_error: String,
    pub last_evaluation: DateTime<Utc>,
    pub evaluation_duration_seconds: f64,
}

impl Default for RecordingRule {
    fn default() -> Self {
        Self {
            name: String::new(),
            query: String::new(),
            labels: PromLabels::default(),
            health: String::new(),
            last_error: String::new(),
            last_evaluation: zero_time(),
            evaluation_duration_seconds: 0.0,
        }
    }
}

/// A rule that evaluates a condition and manages alert instances.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertingRule {
    pub state: AlertState,
    pub name: String,
    pub query: String,
    /// The `for` duration: how long the condition must hold before firing.
    pub duration_seconds: f64,
    pub labels: PromLabels,
    pub annotations: PromLabels,
    pub alerts: Vec<AlertInstance>,
    pub health: String,
    /// Empty means no error.
    pub last_error: String,
    pub last_evaluation: DateTime<Utc>,
    pub evaluation_duration_seconds: f64,
}

impl Default for AlertingRule {
    fn default() -> Self {
        Self {
            state: AlertState::Inactive,
            name: String::new(),
            query: String::new(),
            duration_seconds: 0.0,
            labels: PromLabels::default(),
            annotations: PromLabels::default(),
            alerts: Vec::new(),
            health: String::new(),
            last_error: String::new(),
            last_evaluation: zero_time(),
            evaluation_duration_seconds: 0.0,
        }
    }
}

/// One concrete occurrence of an alerting rule's condition.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertInstance {
    pub labels: PromLabels,
    pub annotations: PromLabels,
    pub state: AlertState,
    /// Absent while the instance is neither pending nor firing.
    pub active_at: Option<DateTime<Utc>>,
    /// Numeric value serialized as text to avoid precision loss.
    pub value: String,
    /// Independent of the enclosing group's strategy.
    pub partial_response_strategy: PartialResponseStrategy,
}

impl Default for AlertInstance {
    fn default() -> Self {
        Self {
            labels: PromLabels::default(),
            annotations: PromLabels::default(),
            state: AlertState::Inactive,
            active_at: None,
            value: String::new(),
            partial_response_strategy: PartialResponseStrategy::Warn,
        }
    }
}
