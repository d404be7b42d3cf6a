use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::address::AccountAddress;
use crate::amount::Amount;
use crate::digest::OrderDigest;
use crate::error::TypeError;
use crate::receipt::LedgerReceipt;

/// Unique order identifier. Non-empty by construction.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        if s.is_empty() {
            return Err(TypeError::EmptyOrderId);
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OrderId({})", self.0)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product reference carried on an order.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProductId({})", self.0)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of an off-chain order record.
///
/// `Pending` means the record is written but the ledger write is not yet
/// confirmed. `Confirmed` means the ledger write is confirmed and the
/// receipt is persisted. No further transitions exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Confirmed => write!(f, "confirmed"),
        }
    }
}

/// Off-chain order record.
///
/// Created once at order-creation time and immutable thereafter, except for
/// the `Pending` → `Confirmed` transition which attaches the ledger receipt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub amount: Amount,
    pub buyer: AccountAddress,
    /// Digest of the five canonical fields, computed at creation time.
    pub digest: OrderDigest,
    pub status: OrderStatus,
    /// Present once the ledger write is confirmed.
    pub receipt: Option<LedgerReceipt>,
    pub created_at: DateTime<Utc>,
}

impl OrderRecord {
    /// Create a pending record (ledger write not yet confirmed).
    pub fn pending(
        order_id: OrderId,
        product_id: ProductId,
        product_name: impl Into<String>,
        quantity: u32,
        amount: Amount,
        buyer: AccountAddress,
        digest: OrderDigest,
    ) -> Result<Self, TypeError> {
        if quantity == 0 {
            return Err(TypeError::ZeroQuantity);
        }
        Ok(Self {
            order_id,
            product_id,
            product_name: product_name.into(),
            quantity,
            amount,
            buyer,
            digest,
            status: OrderStatus::Pending,
            receipt: None,
            created_at: Utc::now(),
        })
    }

    /// The `Pending` → `Confirmed` transition: attach the ledger receipt.
    pub fn into_confirmed(mut self, receipt: LedgerReceipt) -> Self {
        self.status = OrderStatus::Confirmed;
        self.receipt = Some(receipt);
        self
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == OrderStatus::Confirmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::receipt::TxId;

    fn record() -> OrderRecord {
        OrderRecord::pending(
            OrderId::parse("O1").unwrap(),
            ProductId::new("P1"),
            "Mechanical Keyboard",
            2,
            Amount::parse("1000").unwrap(),
            AccountAddress::random(),
            OrderDigest::from_hash([1; 32]),
        )
        .unwrap()
    }

    #[test]
    fn empty_order_id_rejected() {
        assert_eq!(OrderId::parse("").unwrap_err(), TypeError::EmptyOrderId);
    }

    #[test]
    fn zero_quantity_rejected() {
        let error = OrderRecord::pending(
            OrderId::parse("O1").unwrap(),
            ProductId::new("P1"),
            "Keyboard",
            0,
            Amount::parse("1000").unwrap(),
            AccountAddress::random(),
            OrderDigest::from_hash([1; 32]),
        )
        .unwrap_err();
        assert_eq!(error, TypeError::ZeroQuantity);
    }

    #[test]
    fn pending_record_has_no_receipt() {
        let record = record();
        assert_eq!(record.status, OrderStatus::Pending);
        assert!(record.receipt.is_none());
        assert!(!record.is_confirmed());
    }

    #[test]
    fn confirmation_attaches_receipt() {
        let receipt = LedgerReceipt {
            tx_id: TxId::from_hash([3; 32]),
            block_number: 12,
        };
        let confirmed = record().into_confirmed(receipt);
        assert_eq!(confirmed.status, OrderStatus::Confirmed);
        assert_eq!(confirmed.receipt, Some(receipt));
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Confirmed).unwrap(),
            "\"confirmed\""
        );
    }

    #[test]
    fn record_serde_roundtrip() {
        let record = record();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: OrderRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }
}
