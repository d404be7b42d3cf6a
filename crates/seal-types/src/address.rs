use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Chain account identifier: `0x` followed by 40 hex characters.
///
/// Addresses are case-insensitive, but wallets commonly render them with
/// mixed-case checksum formatting. `AccountAddress` preserves the formatting
/// it was constructed with for display, while equality and hashing compare
/// the lowercase form, so `0xAbC…` and `0xabc…` are the same account.
#[derive(Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountAddress(String);

impl AccountAddress {
    /// Parse an address, validating the `0x` prefix and hex body.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        let body = s
            .strip_prefix("0x")
            .ok_or_else(|| TypeError::InvalidAddress(format!("missing 0x prefix: {s}")))?;
        if body.len() != 40 {
            return Err(TypeError::InvalidAddress(format!(
                "expected 40 hex characters, got {}",
                body.len()
            )));
        }
        if !body.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(TypeError::InvalidAddress(format!(
                "non-hex character in address: {s}"
            )));
        }
        Ok(Self(s.to_string()))
    }

    /// The address exactly as it was constructed, checksum casing intact.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical lowercase form, used for comparison.
    pub fn to_lowercase(&self) -> String {
        self.0.to_lowercase()
    }

    /// Create an ephemeral (random) address for tests and demos.
    pub fn random() -> Self {
        let mut bytes = [0u8; 20];
        rand::Rng::fill(&mut rand::thread_rng(), &mut bytes);
        Self(format!("0x{}", hex::encode(bytes)))
    }
}

impl PartialEq for AccountAddress {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for AccountAddress {}

impl Hash for AccountAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_lowercase().hash(state);
    }
}

impl fmt::Debug for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountAddress({})", self.0)
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_address() {
        let addr = AccountAddress::parse("0x00112233445566778899aabbccddeeff00112233").unwrap();
        assert_eq!(addr.as_str(), "0x00112233445566778899aabbccddeeff00112233");
    }

    #[test]
    fn missing_prefix_rejected() {
        let error = AccountAddress::parse("00112233445566778899aabbccddeeff00112233").unwrap_err();
        assert!(matches!(error, TypeError::InvalidAddress(_)));
    }

    #[test]
    fn wrong_length_rejected() {
        let error = AccountAddress::parse("0xabc").unwrap_err();
        assert!(matches!(error, TypeError::InvalidAddress(_)));
    }

    #[test]
    fn non_hex_rejected() {
        let error = AccountAddress::parse("0x0011223344556677zz99aabbccddeeff00112233").unwrap_err();
        assert!(matches!(error, TypeError::InvalidAddress(_)));
    }

    #[test]
    fn equality_ignores_case() {
        let checksummed =
            AccountAddress::parse("0x00112233445566778899AaBbCcDdEeFf00112233").unwrap();
        let lowercase =
            AccountAddress::parse("0x00112233445566778899aabbccddeeff00112233").unwrap();
        assert_eq!(checksummed, lowercase);
    }

    #[test]
    fn display_preserves_checksum_casing() {
        let addr = AccountAddress::parse("0x00112233445566778899AaBbCcDdEeFf00112233").unwrap();
        assert_eq!(
            format!("{addr}"),
            "0x00112233445566778899AaBbCcDdEeFf00112233"
        );
    }

    #[test]
    fn random_addresses_are_unique_and_valid() {
        let a = AccountAddress::random();
        let b = AccountAddress::random();
        assert_ne!(a, b);
        assert!(AccountAddress::parse(a.as_str()).is_ok());
    }

    #[test]
    fn hash_matches_equality() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(AccountAddress::parse("0x00112233445566778899AABBCCDDEEFF00112233").unwrap());
        assert!(set
            .contains(&AccountAddress::parse("0x00112233445566778899aabbccddeeff00112233").unwrap()));
    }
}
