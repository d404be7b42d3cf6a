use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Monetary amount in the smallest currency unit (e.g. wei).
///
/// Carried as a numeric string rather than a machine integer to avoid
/// precision loss across store and ledger boundaries. Comparison is by
/// normalized value, so `"0100"` and `"100"` are equal; the string used at
/// construction is preserved for display.
#[derive(Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(String);

impl Amount {
    /// Parse an amount string. Must be non-empty and digits only.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        if s.is_empty() {
            return Err(TypeError::InvalidAmount("empty string".into()));
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TypeError::InvalidAmount(format!(
                "non-digit character in amount: {s}"
            )));
        }
        Ok(Self(s.to_string()))
    }

    /// Construct from a numeric value.
    pub fn from_units(units: u128) -> Self {
        Self(units.to_string())
    }

    /// The amount exactly as constructed.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Normalized form: leading zeros stripped, `"0"` for zero.
    pub fn normalized(&self) -> &str {
        let trimmed = self.0.trim_start_matches('0');
        if trimmed.is_empty() {
            "0"
        } else {
            trimmed
        }
    }

    /// Returns `true` if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.normalized() == "0"
    }
}

impl PartialEq for Amount {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for Amount {}

impl Hash for Amount {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl fmt::Debug for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amount({})", self.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
