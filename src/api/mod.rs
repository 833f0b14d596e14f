//! Conversion between the rules API JSON shape and the canonical model.
//!
//! Decode is fail-fast: the first malformed rule or field rejects the whole
//! payload, with the offending rule object embedded in the error. Encode is
//! the exact structural inverse for every value decode accepts; decode
//! additionally rejects inputs encode can never produce.

mod types;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::{
    AlertInstance, AlertState, AlertingRule, PartialResponseStrategy, PromLabels, RecordingRule,
    Rule, RuleGroup, RuleGroups,
};
use types::{
    AlertInstanceRepr, AlertingRuleRepr, RecordingRuleRepr, RuleDiscoveryRepr, RuleGroupRepr,
};

/// Discriminator value identifying a recording rule.
pub const RULE_RECORDING_TYPE: &str = "recording";
/// Discriminator value identifying an alerting rule.
pub const RULE_ALERTING_TYPE: &str = "alerting";

pub(crate) fn decode(input: &str) -> Result<RuleGroups> {
    let envelope: RuleDiscoveryRepr = serde_json::from_str(input)?;
    let groups = envelope
        .groups
        .unwrap_or_default()
        .into_iter()
        .map(decode_group)
        .collect::<Result<Vec<_>>>()?;
    Ok(RuleGroups { groups })
}

pub(crate) fn encode(groups: &RuleGroups) -> Result<String> {
    let envelope = RuleDiscoveryRepr {
        groups: wrap_non_empty(
            groups
                .groups
                .iter()
                .map(encode_group)
                .collect::<Result<Vec<_>>>()?,
        ),
    };
    Ok(serde_json::to_string(&envelope)?)
}

fn decode_group(repr: RuleGroupRepr) -> Result<RuleGroup> {
    let rules = repr
        .rules
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(decode_rule)
        .collect::<Result<Vec<_>>>()?;
    Ok(RuleGroup {
        name: repr.name,
        file: repr.file,
        rules,
        interval: repr.interval,
        evaluation_duration_seconds: repr.evaluation_time,
        last_evaluation: repr.last_evaluation,
        deprecated_partial_response_strategy: PartialResponseStrategy::parse(
            &repr.deprecated_partial_response_strategy,
        )?,
        partial_response_strategy: PartialResponseStrategy::parse(&repr.partial_response_strategy)?,
    })
}

fn encode_group(group: &RuleGroup) -> Result<RuleGroupRepr> {
    Ok(RuleGroupRepr {
        name: group.name.clone(),
        file: group.file.clone(),
        rules: wrap_non_empty(
            group
                .rules
                .iter()
                .map(encode_rule)
                .collect::<Result<Vec<_>>>()?,
        ),
        interval: group.interval,
        evaluation_time: group.evaluation_duration_seconds,
        last_evaluation: group.last_evaluation,
        deprecated_partial_response_strategy: group
            .deprecated_partial_response_strategy
            .as_str()
            .to_string(),
        partial_response_strategy: group.partial_response_strategy.as_str().to_string(),
    })
}

/// Two-pass rule decode: read only the `type` discriminator, then dispatch
/// to the concrete variant. The raw object is captured up front so every
/// failure can embed it.
pub(crate) fn decode_rule(value: &Value) -> Result<Rule> {
    let raw = value.to_string();
    let kind = match value.get("type") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(tag)) => tag.clone(),
        Some(other) => {
            return match serde_json::from_value::<String>(other.clone()) {
                Ok(tag) => Err(Error::UnknownRuleType { kind: tag, raw }),
                Err(err) => Err(Error::RuleTypeField {
                    raw,
                    source: Box::new(err.into()),
                }),
            };
        }
    };
    match kind.to_ascii_lowercase().as_str() {
        "" => Err(Error::MissingRuleType(raw)),
        RULE_RECORDING_TYPE => decode_recording(value)
            .map(Rule::Recording)
            .map_err(|source| Error::RecordingRule {
                raw,
                source: Box::new(source),
            }),
        RULE_ALERTING_TYPE => decode_alerting(value)
            .map(Rule::Alerting)
            .map_err(|source| Error::AlertingRule {
                raw,
                source: Box::new(source),
            }),
        _ => Err(Error::UnknownRuleType { kind, raw }),
    }
}

pub(crate) fn encode_rule(rule: &Rule) -> Result<Value> {
    let value = match rule {
        Rule::Recording(recording) => serde_json::to_value(encode_recording(recording))?,
        Rule::Alerting(alerting) => serde_json::to_value(encode_alerting(alerting))?,
    };
    Ok(value)
}

fn decode_recording(value: &Value) -> Result<RecordingRule> {
    let repr: RecordingRuleRepr = serde_json::from_value(value.clone())?;
    Ok(RecordingRule {
        name: repr.name,
        query: repr.query,
        labels: PromLabels::from(repr.labels.unwrap_or_default()),
        health: repr.health,
        last_error: repr.last_error,
        last_evaluation: repr.last_evaluation,
        evaluation_duration_seconds: repr.evaluation_time,
    })
}

fn encode_recording(rule: &RecordingRule) -> RecordingRuleRepr {
    RecordingRuleRepr {
        name: rule.name.clone(),
        query: rule.query.clone(),
        labels: if rule.labels.is_empty() {
            None
        } else {
            Some(rule.labels.to_map())
        },
        health: rule.health.clone(),
        last_error: rule.last_error.clone(),
        evaluation_time: rule.evaluation_duration_seconds,
        last_evaluation: rule.last_evaluation,
        rule_type: RULE_RECORDING_TYPE.to_string(),
    }
}

fn decode_alerting(value: &Value) -> Result<AlertingRule> {
    let repr: AlertingRuleRepr = serde_json::from_value(value.clone())?;
    let alerts = repr
        .alerts
        .unwrap_or_default()
        .into_iter()
        .map(decode_instance)
        .collect::<Result<Vec<_>>>()?;
    Ok(AlertingRule {
        state: AlertState::parse(&repr.state)?,
        name: repr.name,
        query: repr.query,
        duration_seconds: repr.duration,
        labels: PromLabels::from(repr.labels.unwrap_or_default()),
        annotations: PromLabels::from(repr.annotations.unwrap_or_default()),
        alerts,
        health: repr.health,
        last_error: repr.last_error,
        last_evaluation: repr.last_evaluation,
        evaluation_duration_seconds: repr.evaluation_time,
    })
}

fn encode_alerting(rule: &AlertingRule) -> AlertingRuleRepr {
    AlertingRuleRepr {
        state: rule.state.as_str().to_string(),
        name: rule.name.clone(),
        query: rule.query.clone(),
        duration: rule.duration_seconds,
        labels: Some(rule.labels.to_map()),
        annotations: Some(rule.annotations.to_map()),
        alerts: wrap_non_empty(rule.alerts.iter().map(encode_instance).collect()),
        health: rule.health.clone(),
        last_error: rule.last_error.clone(),
        evaluation_time: rule.evaluation_duration_seconds,
        last_evaluation: rule.last_evaluation,
        rule_type: RULE_ALERTING_TYPE.to_string(),
    }
}

fn decode_instance(repr: AlertInstanceRepr) -> Result<AlertInstance> {
    Ok(AlertInstance {
        labels: PromLabels::from(repr.labels.unwrap_or_default()),
        annotations: PromLabels::from(repr.annotations.unwrap_or_default()),
        state: AlertState::parse(&repr.state)?,
        active_at: repr.active_at,
        value: repr.value,
        partial_response_strategy: PartialResponseStrategy::parse(
            &repr.partial_response_strategy,
        )?,
    })
}

fn encode_instance(instance: &AlertInstance) -> AlertInstanceRepr {
    AlertInstanceRepr {
        labels: Some(instance.labels.to_map()),
        annotations: Some(instance.annotations.to_map()),
        state: instance.state.as_str().to_string(),
        active_at: instance.active_at,
        value: instance.value.clone(),
        partial_response_strategy: instance.partial_response_strategy.as_str().to_string(),
    }
}

/// Empty sequences encode as JSON `null`, matching what the rules API
/// serves for groups, rules and alerts it has none of.
fn wrap_non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}
