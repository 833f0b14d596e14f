//! Canonical data model for rule groups.
//!
//! These are the immutable value objects that cross process boundaries
//! inside the monitoring system, as opposed to the JSON shape served by the
//! rules API. Each decode call produces them fresh; nothing here is shared
//! or cached.

mod group;
mod labels;
mod rule;
mod state;
mod strategy;

pub use group::{RuleGroup, RuleGroups};
pub use labels::{Label, PromLabels};
pub use rule::{AlertInstance, AlertingRule, RecordingRule, Rule};
pub use state::AlertState;
pub use strategy::PartialResponseStrategy;

use chrono::{DateTime, NaiveDate, Utc};

/// The zero timestamp sentinel, rendered on the wire as
/// `0001-01-01T00:00:00Z`.
///
/// Required timestamp fields are never omitted from encoded output; an
/// unset timestamp carries this value instead.
pub fn zero_time() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_time_renders_as_the_wire_sentinel() {
        let rendered = serde_json::to_string(&zero_time()).unwrap();
        assert_eq!(rendered, r#""0001-01-01T00:00:00Z""#);
    }

    #[test]
    fn zero_time_parses_back() {
        let parsed: DateTime<Utc> =
            serde_json::from_str(r#""0001-01-01T00:00:00Z""#).unwrap();
        assert_eq!(parsed, zero_time());
    }

    #[test]
    fn group_default_matches_decode_defaults() {
        let group = RuleGroup::default();
        assert_eq!(
            group.partial_response_strategy,
            PartialResponseStrategy::Warn
        );
        assert_eq!(
            group.deprecated_partial_response_strategy,
            PartialResponseStrategy::Warn
        );
        assert_eq!(group.last_evaluation, zero_time());
        assert!(group.rules.is_empty());
    }
}
