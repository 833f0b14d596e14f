//! Wire mirror types for the rules API JSON shape.
//!
//! Field declaration order is load-bearing: serde emits fields in the order
//! they appear here, and re-encoded output must match what the rules API
//! serves field-for-field. Required scalars are always emitted; only
//! `lastError`, recording-rule `labels` and instance `activeAt` may be
//! omitted. Label sets travel as JSON objects keyed by label name.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::zero_time;

/// Top-level envelope: `{"groups": [...]}`.
///
/// `groups` encodes as `null` when empty; absent, `null` and `[]` all
/// decode to an empty sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct RuleDiscoveryRepr {
    pub groups: Option<Vec<RuleGroupRepr>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RuleGroupRepr {
    pub name: String,
    pub file: String,
    /// Kept as raw values so each rule can be dispatched on its `type`
    /// discriminator with the original object available for error messages.
    pub rules: Option<Vec<Value>>,
    pub interval: f64,
    pub evaluation_time: f64,
    pub last_evaluation: DateTime<Utc>,
    /// Deprecated strategy field; decoded independently of its sibling.
    #[serde(rename = "partial_response_strategy")]
    pub deprecated_partial_response_strategy: String,
    pub partial_response_strategy: String,
}

impl Default for RuleGroupRepr {
    fn default() -> Self {
        Self {
            name: String::new(),
            file: String::new(),
            rules: None,
            interval: 0.0,
            evaluation_time: 0.0,
            last_evaluation: zero_time(),
            deprecated_partial_response_strategy: String::new(),
            partial_response_strategy: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RecordingRuleRepr {
    pub name: String,
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    pub health: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_error: String,
    pub evaluation_time: f64,
    pub last_evaluation: DateTime<Utc>,
    #[serde(rename = "type")]
    pub rule_type: String,
}

impl Default for RecordingRuleRepr {
    fn default() -> Self {
        Self {
            name: String::new(),
            query: String::new(),
            labels: None,
            health: String::new(),
            last_error: String::new(),
            evaluation_time: 0.0,
            last_evaluation: zero_time(),
            rule_type: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct AlertingRuleRepr {
    pub state: String,
    pub name: String,
    pub query: String,
    pub duration: f64,
    pub labels: Option<BTreeMap<String, String>>,
    pub annotations: Option<BTreeMap<String, String>>,
    pub alerts: Option<Vec<AlertInstanceRepr>>,
    pub health: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_error: String,
    pub evaluation_time: f64,
    pub last_evaluation: DateTime<Utc>,
    #[serde(rename = "type")]
    pub rule_type: String,
}

impl Default for AlertingRuleRepr {
    fn default() -> Self {
        Self {
            state: String::new(),
            name: String::new(),
            query: String::new(),
            duration: 0.0,
            labels: None,
            annotations: None,
            alerts: None,
            health: String::new(),
            last_error: String::new(),
            evaluation_time: 0.0,
            last_evaluation: zero_time(),
            rule_type: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct AlertInstanceRepr {
    pub labels: Option<BTreeMap<String, String>>,
    pub annotations: Option<BTreeMap<String, String>>,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_at: Option<DateTime<Utc>>,
    pub value: String,
    pub partial_response_strategy: String,
}
