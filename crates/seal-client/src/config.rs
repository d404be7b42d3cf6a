use std::time::Duration;

use serde::{Deserialize, Serialize};

use seal_ledger::WriteAuthority;

use crate::error::ClientError;

/// Configuration for the order client.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Maximum wall-clock time to wait for ledger confirmation before the
    /// write surfaces a transient failure.
    pub confirmation_timeout: Duration,
    /// Who produces the signed ledger write.
    pub authority: WriteAuthority,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            confirmation_timeout: Duration::from_secs(30),
            authority: WriteAuthority::Custodial,
        }
    }
}

impl ClientConfig {
    /// Parse a configuration from TOML.
    pub fn from_toml(s: &str) -> Result<Self, ClientError> {
        toml::from_str(s).map_err(|e| ClientError::Config(e.to_string()))
    }

    /// Wallet-signed variant: the customer's wallet produces the write.
    pub fn wallet_signed() -> Self {
        Self {
            authority: WriteAuthority::Wallet,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_custodial_with_30s_timeout() {
        let config = ClientConfig::default();
        assert_eq!(config.confirmation_timeout, Duration::from_secs(30));
        assert_eq!(config.authority, WriteAuthority::Custodial);
    }

    #[test]
    fn from_toml_parses() {
        let config = ClientConfig::from_toml(
            r#"
            authority = "wallet"

            [confirmation_timeout]
            secs = 10
            nanos = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.confirmation_timeout, Duration::from_secs(10));
        assert_eq!(config.authority, WriteAuthority::Wallet);
    }

    #[test]
    fn from_toml_rejects_malformed() {
        assert!(matches!(
            ClientConfig::from_toml("authority = 12").unwrap_err(),
            ClientError::Config(_)
        ));
    }

    #[test]
    fn wallet_signed_keeps_default_timeout() {
        let config = ClientConfig::wallet_signed();
        assert_eq!(config.authority, WriteAuthority::Wallet);
        assert_eq!(config.confirmation_timeout, Duration::from_secs(30));
    }
}
