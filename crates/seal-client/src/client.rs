use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use seal_crypto::{CanonicalOrder, CommitmentBuilder};
use seal_ledger::{CommitmentSubmission, LedgerReader, LedgerWriter};
use seal_reconcile::{ReconciliationReport, Reconciler};
use seal_store::OrderStore;
use seal_types::{AccountAddress, Amount, OrderId, OrderRecord, ProductId};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// A new order to place.
#[derive(Clone, Debug)]
pub struct NewOrder {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    /// Unit price in the smallest currency unit.
    pub unit_price: Amount,
    pub buyer: AccountAddress,
}

/// Summary of the ledger's contents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerInfo {
    pub commitment_count: u64,
    pub order_ids: Vec<OrderId>,
}

/// High-level order client.
///
/// The ledger and store are injected at construction; tests substitute
/// in-memory fakes, production wires real backends.
pub struct OrderClient<L, S> {
    ledger: Arc<L>,
    store: Arc<S>,
    config: ClientConfig,
}

impl<L, S> OrderClient<L, S>
where
    L: LedgerWriter + LedgerReader,
    S: OrderStore,
{
    pub fn new(ledger: Arc<L>, store: Arc<S>, config: ClientConfig) -> Self {
        Self {
            ledger,
            store,
            config,
        }
    }

    /// Place an order: persist a pending record, submit the commitment,
    /// block until confirmation, then persist the confirmed record with
    /// its receipt.
    ///
    /// The off-chain existence check is advisory only; the ledger's own
    /// uniqueness constraint is the authority on double-submission. A
    /// pending record left by an interrupted attempt does not block a
    /// retry — it is replaced and the submission repeated, which is safe
    /// because the ledger rejects duplicates.
    ///
    /// The ledger write and the confirmed-record write are not one
    /// transaction: a store failure after confirmation leaves a permanent
    /// commitment with a stale off-chain row. That state is detectable by
    /// [`Self::verify_order`] and is never rolled back.
    pub fn place_order(&self, order: NewOrder) -> Result<OrderRecord, ClientError> {
        if let Some(existing) = self.store.get(&order.order_id)? {
            if existing.is_confirmed() {
                return Err(ClientError::OrderExists(order.order_id));
            }
            debug!(order_id = %order.order_id, "replacing pending record from interrupted attempt");
        }

        let amount = total_amount(&order.unit_price, order.quantity)?;
        let digest = CommitmentBuilder::ORDER.digest(&CanonicalOrder {
            order_id: &order.order_id,
            product_id: &order.product_id,
            quantity: order.quantity,
            amount: &amount,
            buyer: &order.buyer,
        });

        let pending = OrderRecord::pending(
            order.order_id,
            order.product_id,
            order.product_name,
            order.quantity,
            amount,
            order.buyer,
            digest,
        )?;
        self.store.upsert(&pending)?;

        debug!(order_id = %pending.order_id, digest = %digest.short_hex(), "submitting commitment");
        let submit_receipt = self.ledger.submit_commitment(
            &CommitmentSubmission {
                order_id: pending.order_id.clone(),
                amount: pending.amount.clone(),
                digest,
                submitter: pending.buyer.clone(),
                authority: self.config.authority,
            },
            self.config.confirmation_timeout,
        )?;

        let confirmed = pending.into_confirmed(submit_receipt.receipt());
        self.store.upsert(&confirmed)?;

        info!(
            order_id = %confirmed.order_id,
            tx_id = %submit_receipt.tx_id,
            block = submit_receipt.block_number,
            "order confirmed"
        );
        Ok(confirmed)
    }

    /// Reconcile the off-chain record with the on-chain commitment.
    ///
    /// Read-only; no state transition occurs from the verification path.
    pub fn verify_order(&self, order_id: &OrderId) -> Result<ReconciliationReport, ClientError> {
        Reconciler::reconcile(order_id, self.ledger.as_ref(), self.store.as_ref())
            .map_err(Into::into)
    }

    /// Read one off-chain record. `Ok(None)` if the order is unknown.
    pub fn get_order(&self, order_id: &OrderId) -> Result<Option<OrderRecord>, ClientError> {
        Ok(self.store.get(order_id)?)
    }

    /// All off-chain records, newest first.
    pub fn list_orders(&self) -> Result<Vec<OrderRecord>, ClientError> {
        Ok(self.store.all()?)
    }

    /// Summary of the ledger's contents.
    pub fn ledger_info(&self) -> Result<LedgerInfo, ClientError> {
        Ok(LedgerInfo {
            commitment_count: self.ledger.commitment_count()?,
            order_ids: self.ledger.order_ids()?,
        })
    }
}

fn total_amount(unit_price: &Amount, quantity: u32) -> Result<Amount, ClientError> {
    let unit: u128 = unit_price
        .normalized()
        .parse()
        .map_err(|_| ClientError::AmountOverflow)?;
    let total = unit
        .checked_mul(u128::from(quantity))
        .ok_or(ClientError::AmountOverflow)?;
    Ok(Amount::from_units(total))
}
