//! Canonical label sets.
//!
//! On the wire a label set is a JSON object, which may even carry a
//! duplicated key. The canonical form is a flat list of pairs with unique
//! names, sorted by name so re-encoding is deterministic. When duplicates
//! collide, exactly one pair per name survives; which one is deliberately
//! unspecified.

use std::collections::BTreeMap;

/// A single name/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Label {
    pub name: String,
    pub value: String,
}

impl Label {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A normalized label set: unique names, sorted by name.
///
/// The same shape carries annotations, which are semantically free-form
/// key/value text but normalize identically.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PromLabels {
    pub labels: Vec<Label>,
}

impl PromLabels {
    /// Build a normalized set from arbitrary pairs. Never fails; later
    /// duplicates replace earlier ones.
    pub fn normalize<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        pairs.into_iter().collect::<BTreeMap<_, _>>().into()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The wire representation: an ordered map keyed by label name.
    pub(crate) fn to_map(&self) -> BTreeMap<String, String> {
        self.labels
            .iter()
            .map(|label| (label.name.clone(), label.value.clone()))
            .collect()
    }
}

impl From<BTreeMap<String, String>> for PromLabels {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self {
            labels: map
                .into_iter()
                .map(|(name, value)| Label { name, value })
                .collect(),
        }
    }
}
