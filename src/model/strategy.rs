//! Partial response strategy enum.

use crate::error::{Error, Result};

/// Policy controlling whether a query may return results despite partial
/// backend failure.
///
/// The wire names are the uppercase forms `WARN` and `ABORT`. An absent or
/// empty field decodes to [`PartialResponseStrategy::Warn`], which is also
/// the `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PartialResponseStrategy {
    /// Allow partial results; the response carries a warning.
    #[default]
    Warn,
    /// Fail the query outright on any partial backend failure.
    Abort,
}

impl PartialResponseStrategy {
    /// Parse the wire representation.
    ///
    /// Empty input yields [`Self::Warn`]; the match is case-insensitive.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.to_ascii_uppercase().as_str() {
            "" | "WARN" => Ok(Self::Warn),
            "ABORT" => Ok(Self::Abort),
            _ => Err(Error::UnknownPartialResponseStrategy(raw.to_string())),
        }
    }

    /// The canonical uppercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warn => "WARN",
            Self::Abort => "ABORT",
        }
    }
}

impl std::fmt::Display for PartialResponseStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PartialResponseStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
