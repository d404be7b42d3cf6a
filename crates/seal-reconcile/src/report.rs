use std::fmt;

use serde::{Deserialize, Serialize};

use seal_ledger::Commitment;
use seal_types::{OrderDigest, OrderId, OrderRecord};

/// The fields compared pairwise between the two stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffField {
    Amount,
    BuyerAddress,
}

impl fmt::Display for DiffField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amount => write!(f, "amount"),
            Self::BuyerAddress => write!(f, "buyer_address"),
        }
    }
}

/// One field whose on-chain and off-chain values diverge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDiff {
    pub field: DiffField,
    pub on_chain: String,
    pub off_chain: String,
}

/// Digest audit, independent of field-level comparison.
///
/// The digest is recomputed from the off-chain record's five canonical
/// fields and compared against every stored digest that is present. A
/// mismatch while the compared fields agree means the snapshot hashed at
/// commitment time differed from the current record in a field outside the
/// compared subset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestAudit {
    /// Digest recomputed from the off-chain record's canonical fields.
    pub computed: OrderDigest,
    /// Digest stored on the off-chain record at creation time.
    pub stored_off_chain: OrderDigest,
    /// Digest stored in the on-chain commitment, when one exists.
    pub stored_on_chain: Option<OrderDigest>,
    /// `true` iff the recomputed digest equals every stored digest present.
    pub valid: bool,
}

/// Outcome of reconciling one order identifier across both stores.
///
/// `is_matched` covers operational consistency of the compared fields and
/// is `None` whenever either side is absent; `digest.valid` covers tamper
/// evidence. The two answer orthogonal questions and callers should not
/// conflate them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationReport {
    pub order_id: OrderId,
    pub exists_on_chain: bool,
    pub exists_in_database: bool,
    pub is_matched: Option<bool>,
    pub differences: Vec<FieldDiff>,
    pub digest: Option<DigestAudit>,
    pub on_chain: Option<Commitment>,
    pub off_chain: Option<OrderRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diff_field_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&DiffField::BuyerAddress).unwrap(),
            "\"buyer_address\""
        );
        assert_eq!(serde_json::to_string(&DiffField::Amount).unwrap(), "\"amount\"");
    }

    #[test]
    fn report_serializes_for_presentation() {
        let report = ReconciliationReport {
            order_id: OrderId::parse("O1").unwrap(),
            exists_on_chain: false,
            exists_in_database: false,
            is_matched: None,
            differences: vec![],
            digest: None,
            on_chain: None,
            off_chain: None,
        };
        let json = serde_json::to_string(&report).unwrap();
        let parsed: ReconciliationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, parsed);
    }
}
