//! Error types for rules codec failures.
//!
//! The message strings here are a compatibility contract: components on the
//! other side of the wire match on them verbatim, so they must not be
//! reworded. Nested failures carry the offending rule object re-serialized
//! compactly, which is what makes a bad payload diagnosable from logs alone.

/// Error raised while decoding a rules API payload.
///
/// Encoding a valid canonical value never produces any of the rule-level
/// variants; only [`Error::Json`] can surface on the encode path.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A rule object carried no `type` discriminator (absent, null, or
    /// empty string).
    #[error("rule: no type field provided: {0}")]
    MissingRuleType(String),

    /// The `type` discriminator was present but is not a recognized rule
    /// variant.
    #[error("rule: unknown type field provided {kind}; {raw}")]
    UnknownRuleType {
        /// The raw discriminator value.
        kind: String,
        /// The offending rule object, re-serialized.
        raw: String,
    },

    /// The `type` discriminator could not be read as a string at all.
    #[error("rule: type field unmarshal: {raw}: {source}")]
    RuleTypeField {
        raw: String,
        #[source]
        source: Box<Error>,
    },

    /// Decoding the fields of a recording rule failed.
    #[error("rule: recording rule unmarshal: {raw}: {source}")]
    RecordingRule {
        raw: String,
        #[source]
        source: Box<Error>,
    },

    /// Decoding the fields of an alerting rule (or one of its alert
    /// instances) failed.
    #[error("rule: alerting rule unmarshal: {raw}: {source}")]
    AlertingRule {
        raw: String,
        #[source]
        source: Box<Error>,
    },

    /// An alert state string matched none of `INACTIVE`, `PENDING`,
    /// `FIRING`. There is no default: an empty string is rejected too.
    #[error("unknown alertState: {0:?}")]
    UnknownAlertState(String),

    /// A partial response strategy string matched neither `WARN` nor
    /// `ABORT`.
    #[error("unknown partialResponseStrategy: {0:?}")]
    UnknownPartialResponseStrategy(String),

    /// Malformed JSON or a field with the wrong JSON type.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using the codec Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_embeds_raw_rule_object() {
        let err = Error::MissingRuleType(r#"{"name":"r1"}"#.to_string());
        assert_eq!(
            err.to_string(),
            r#"rule: no type field provided: {"name":"r1"}"#
        );

        let err = Error::UnknownRuleType {
            kind: "wrong".to_string(),
            raw: r#"{"type":"wrong"}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"rule: unknown type field provided wrong; {"type":"wrong"}"#
        );
    }

    #[test]
    fn nested_cause_is_rendered_after_the_raw_object() {
        let err = Error::AlertingRule {
            raw: r#"{"state":"sdfsdf"}"#.to_string(),
            source: Box::new(Error::UnknownAlertState("sdfsdf".to_string())),
        };
        assert_eq!(
            err.to_string(),
            r#"rule: alerting rule unmarshal: {"state":"sdfsdf"}: unknown alertState: "sdfsdf""#
        );
    }

    #[test]
    fn enum_messages_quote_the_raw_value() {
        let err = Error::UnknownAlertState(String::new());
        assert_eq!(err.to_string(), r#"unknown alertState: """#);

        let err = Error::UnknownPartialResponseStrategy("asdf".to_string());
        assert_eq!(err.to_string(), r#"unknown partialResponseStrategy: "asdf""#);
    }

    #[test]
    fn source_chain_is_preserved() {
        use std::error::Error as _;

        let err = Error::RecordingRule {
            raw: "{}".to_string(),
            source: Box::new(Error::UnknownAlertState("x".to_string())),
        };
        assert!(err.source().is_some());
    }
}
