use seal_crypto::{CanonicalOrder, CommitmentBuilder};
use seal_ledger::{Commitment, LedgerReader};
use seal_store::OrderStore;
use seal_types::{OrderId, OrderRecord};

use crate::error::ReconcileError;
use crate::report::{DiffField, DigestAudit, FieldDiff, ReconciliationReport};

/// Compares the off-chain record with the on-chain commitment for one
/// order identifier.
pub struct Reconciler;

impl Reconciler {
    /// Fetch both sides for `order_id` and compare them.
    ///
    /// Read-only: may run any number of times, at any point, with no side
    /// effect on stored state.
    pub fn reconcile(
        order_id: &OrderId,
        ledger: &dyn LedgerReader,
        store: &dyn OrderStore,
    ) -> Result<ReconciliationReport, ReconcileError> {
        let on_chain = ledger.get_commitment(order_id)?;
        let off_chain = store.get(order_id)?;
        Ok(Self::compare(order_id, on_chain, off_chain))
    }

    /// Pure comparison of the two (possibly absent) sides.
    pub fn compare(
        order_id: &OrderId,
        on_chain: Option<Commitment>,
        off_chain: Option<OrderRecord>,
    ) -> ReconciliationReport {
        let differences = match (&on_chain, &off_chain) {
            (Some(commitment), Some(record)) => field_differences(commitment, record),
            // Verdict undefined when one side is absent.
            _ => vec![],
        };

        let is_matched = match (&on_chain, &off_chain) {
            (Some(_), Some(_)) => Some(differences.is_empty()),
            _ => None,
        };

        let digest = off_chain
            .as_ref()
            .map(|record| audit_digest(record, on_chain.as_ref()));

        ReconciliationReport {
            order_id: order_id.clone(),
            exists_on_chain: on_chain.is_some(),
            exists_in_database: off_chain.is_some(),
            is_matched,
            differences,
            digest,
            on_chain,
            off_chain,
        }
    }
}

fn field_differences(commitment: &Commitment, record: &OrderRecord) -> Vec<FieldDiff> {
    let mut differences = Vec::new();

    // Exact numeric-string equality after normalization.
    if commitment.amount != record.amount {
        differences.push(FieldDiff {
            field: DiffField::Amount,
            on_chain: commitment.amount.to_string(),
            off_chain: record.amount.to_string(),
        });
    }

    // Chain addresses are case-insensitive; checksum casing is not drift.
    if commitment.submitter != record.buyer {
        differences.push(FieldDiff {
            field: DiffField::BuyerAddress,
            on_chain: commitment.submitter.to_string(),
            off_chain: record.buyer.to_string(),
        });
    }

    differences
}

fn audit_digest(record: &OrderRecord, commitment: Option<&Commitment>) -> DigestAudit {
    let computed = CommitmentBuilder::ORDER.digest(&CanonicalOrder {
        order_id: &record.order_id,
        product_id: &record.product_id,
        quantity: record.quantity,
        amount: &record.amount,
        buyer: &record.buyer,
    });

    let stored_on_chain = commitment.map(|c| c.digest);
    let valid = computed == record.digest
        && stored_on_chain.map_or(true, |stored| stored == computed);

    DigestAudit {
        computed,
        stored_off_chain: record.digest,
        stored_on_chain,
        valid,
    }
}
