//! Alert state enum.

use crate::error::{Error, Result};

/// Aggregate state of an alerting rule, or the state of a single alert
/// instance.
///
/// Wire names are the uppercase forms `INACTIVE`, `PENDING`, `FIRING`.
/// Unlike [`PartialResponseStrategy`](super::PartialResponseStrategy) there
/// is no implicit default: an empty string is just another unrecognized
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertState {
    /// The rule condition does not currently hold.
    Inactive,
    /// The condition holds but has not held for the rule's full `for`
    /// duration yet.
    Pending,
    /// The condition has held long enough; the alert is active.
    Firing,
}

impl AlertState {
    /// Parse the wire representation. Case-insensitive, no default.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.to_ascii_uppercase().as_str() {
            "INACTIVE" => Ok(Self::Inactive),
            "PENDING" => Ok(Self::Pending),
            "FIRING" => Ok(Self::Firing),
            _ => Err(Error::UnknownAlertState(raw.to_string())),
        }
    }

    /// The canonical uppercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inactive => "INACTIVE",
            Self::Pending => "PENDING",
            Self::Firing => "FIRING",
        }
    }
}

impl std::fmt::Display for AlertState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AlertState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
