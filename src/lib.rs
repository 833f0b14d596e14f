//! # rulewire
//!
//! A bidirectional codec between the JSON served by a Prometheus-compatible
//! rules API (extended with partial-response strategy fields) and a
//! canonical in-memory rule-group model used for transport between
//! components of a distributed monitoring system.
//!
//! Decoding validates and normalizes externally-produced JSON: the rule
//! variant is picked from the `type` discriminator, enum fields are checked
//! (with `WARN` as the partial-response default), and label sets are
//! deduplicated by name. A single malformed rule rejects the whole payload.
//! Encoding is the exact inverse for anything decode accepts, emitting
//! every required scalar with its zero value when unset.
//!
//! ## Quick Start
//!
//! ```
//! let input = r#"{"groups":[{"name":"group1","file":"rules.yml","rules":[
//!     {"name":"up:sum","query":"sum(up)","type":"recording"}
//! ]}]}"#;
//!
//! let groups = rulewire::decode(input).unwrap();
//! assert_eq!(groups.groups[0].name, "group1");
//! assert_eq!(groups.groups[0].rules.len(), 1);
//!
//! let json = rulewire::encode(&groups).unwrap();
//! assert!(json.contains(r#""type":"recording""#));
//! ```
//!
//! The codec is a pure transformation over immutable values: no I/O, no
//! shared state, safe to call concurrently from any number of callers.

mod api;
pub mod error;
pub mod model;

pub use api::{RULE_ALERTING_TYPE, RULE_RECORDING_TYPE};
pub use error::{Error, Result};
pub use model::{
    zero_time, AlertInstance, AlertState, AlertingRule, Label, PartialResponseStrategy,
    PromLabels, RecordingRule, Rule, RuleGroup, RuleGroups,
};

/// Decode a rules API JSON payload into the canonical model.
///
/// An empty object (no `groups` key) decodes to an empty [`RuleGroups`].
/// Decoding is fail-fast: the first malformed rule or enum value rejects
/// the entire payload.
///
/// # Examples
///
/// ```
/// let groups = rulewire::decode("{}").unwrap();
/// assert!(groups.groups.is_empty());
/// ```
pub fn decode(input: &str) -> Result<RuleGroups> {
    RuleGroups::from_json(input)
}

/// Encode a canonical [`RuleGroups`] value back into rules API JSON.
///
/// Required scalars are always present in the output; empty sequences
/// encode as `null` and unset timestamps as `0001-01-01T00:00:00Z`.
///
/// # Examples
///
/// ```
/// use rulewire::RuleGroups;
///
/// let json = rulewire::encode(&RuleGroups::default()).unwrap();
/// assert_eq!(json, r#"{"groups":null}"#);
/// ```
pub fn encode(groups: &RuleGroups) -> Result<String> {
    groups.to_json()
}
