use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Ledger transaction identifier (32-byte hash, hex-encoded).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxId([u8; 32]);

impl TxId {
    /// Create from a raw 32-byte hash.
    pub const fn from_hash(hash: [u8; 32]) -> Self {
        Self(hash)
    }

    /// The raw 32-byte hash.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex representation with the conventional `0x` prefix.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Parse from a hex string. Accepts an optional `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != 32 {
            return Err(TypeError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxId(0x{})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Durable confirmation receipt returned by the ledger once a commitment
/// is included in a block. Persisted on the off-chain record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerReceipt {
    /// Transaction identifier of the ledger write.
    pub tx_id: TxId,
    /// Number of the block containing the transaction.
    pub block_number: u64,
}

impl fmt::Display for LedgerReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ block {}", self.tx_id, self.block_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tx_id_hex_roundtrip() {
        let tx = TxId::from_hash([0xcd; 32]);
        let parsed = TxId::from_hex(&tx.to_hex()).unwrap();
        assert_eq!(tx, parsed);
    }

    #[test]
    fn tx_id_display_has_0x_prefix() {
        let tx = TxId::from_hash([1; 32]);
        assert!(format!("{tx}").starts_with("0x"));
        assert_eq!(format!("{tx}").len(), 66);
    }

    #[test]
    fn receipt_display() {
        let receipt = LedgerReceipt {
            tx_id: TxId::from_hash([2; 32]),
            block_number: 17,
        };
        assert!(format!("{receipt}").contains("block 17"));
    }

    #[test]
    fn receipt_serde_roundtrip() {
        let receipt = LedgerReceipt {
            tx_id: TxId::from_hash([9; 32]),
            block_number: 3,
        };
        let json = serde_json::to_string(&receipt).unwrap();
        let parsed: LedgerReceipt = serde_json::from_str(&json).unwrap();
        assert_eq!(receipt, parsed);
    }
}
