use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use seal_types::{AccountAddress, Amount, LedgerReceipt, OrderDigest, OrderId, TxId};

/// Who produces the signed ledger write.
///
/// A capability choice at the write boundary only: the commitment builder
/// and the reconciler are unchanged either way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteAuthority {
    /// The service signs with its own key on the customer's behalf.
    #[default]
    Custodial,
    /// The customer's wallet signs the write directly.
    Wallet,
}

impl fmt::Display for WriteAuthority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custodial => write!(f, "custodial"),
            Self::Wallet => write!(f, "wallet"),
        }
    }
}

/// A commitment submitted to the ledger.
///
/// Well-formedness of the identifier and submitter address is enforced by
/// their types at construction, before anything reaches the ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentSubmission {
    pub order_id: OrderId,
    pub amount: Amount,
    pub digest: OrderDigest,
    pub submitter: AccountAddress,
    pub authority: WriteAuthority,
}

/// Result of a confirmed submission: the durable receipt plus an echo of
/// the submitted digest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub tx_id: TxId,
    pub block_number: u64,
    pub digest: OrderDigest,
}

impl SubmitReceipt {
    /// The receipt persisted on the off-chain record.
    pub fn receipt(&self) -> LedgerReceipt {
        LedgerReceipt {
            tx_id: self.tx_id,
            block_number: self.block_number,
        }
    }
}

/// The on-chain commitment record for one order identifier.
///
/// Append-only; the ledger rejects a second write for the same identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commitment {
    pub order_id: OrderId,
    pub submitter: AccountAddress,
    pub amount: Amount,
    pub digest: OrderDigest,
    /// Block time of the containing block.
    pub timestamp: DateTime<Utc>,
}
