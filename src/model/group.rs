//! Canonical rule group containers.

use chrono::{DateTime, Utc};

use super::rule::Rule;
use super::strategy::PartialResponseStrategy;
use super::zero_time;

/// A named collection of rules sharing an evaluation interval and source
/// file.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleGroup {
    pub name: String,
    pub file: String,
    pub rules: Vec<Rule>,
    /// Evaluation interval in seconds.
    pub interval: f64,
    /// Wall time the last evaluation took, in seconds.
    pub evaluation_duration_seconds: f64,
    pub last_evaluation: DateTime<Utc>,
    /// Legacy strategy field kept for backward-compatible wire behavior.
    /// Independent of `partial_response_strategy`; neither overrides the
    /// other and both round-trip.
    pub deprecated_partial_response_strategy: PartialResponseStrategy,
    pub partial_response_strategy: PartialResponseStrategy,
}

impl Default for RuleGroup {
    fn default() -> Self {
        Self {
            name: String::new(),
            file: String::new(),
            rules: Vec::new(),
            interval: 0.0,
            evaluation_duration_seconds: 0.0,
            last_evaluation: zero_time(),
            deprecated_partial_response_strategy: PartialResponseStrategy::Warn,
            partial_response_strategy: PartialResponseStrategy::Warn,
        }
    }
}

/// The top-level container: an ordered sequence of groups with no
/// cross-group invariants.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RuleGroups {
    pub groups: Vec<RuleGroup>,
}

impl RuleGroups {
    /// Decode a rules API JSON payload into canonical form.
    ///
    /// See [`crate::decode`].
    pub fn from_json(input: &str) -> crate::error::Result<Self> {
        crate::api::decode(input)
    }

    /// Encode the canonical form back into rules API JSON.
    ///
    /// See [`crate::encode`].
    pub fn to_json(&self) -> crate::error::Result<String> {
        crate::api::encode(self)
    }
}
