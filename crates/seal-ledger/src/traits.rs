use std::time::Duration;

use seal_types::OrderId;

use crate::error::LedgerError;
use crate::records::{Commitment, CommitmentSubmission, SubmitReceipt};

/// Write boundary for the commitment ledger.
pub trait LedgerWriter: Send + Sync {
    /// Submit a commitment and block until the ledger reports durable
    /// confirmation (not mere acceptance into a pending queue), bounded by
    /// the caller-supplied `timeout`.
    ///
    /// Exceeding the timeout surfaces a transient failure rather than
    /// blocking indefinitely. The ledger enforces uniqueness per order
    /// identifier; a duplicate submission is an authoritative
    /// [`LedgerError::DuplicateCommitment`], which is what makes retrying
    /// a transient failure safe.
    fn submit_commitment(
        &self,
        submission: &CommitmentSubmission,
        timeout: Duration,
    ) -> Result<SubmitReceipt, LedgerError>;
}

/// Read boundary for the commitment ledger.
///
/// All reads are pure: safe to retry and to call concurrently with writes
/// to other identifiers.
pub trait LedgerReader: Send + Sync {
    /// Fetch the commitment for an order identifier.
    ///
    /// Returns `Ok(None)` when no commitment exists — a valid query
    /// result, not an error.
    fn get_commitment(&self, order_id: &OrderId) -> Result<Option<Commitment>, LedgerError>;

    /// All committed order identifiers, in commitment order.
    fn order_ids(&self) -> Result<Vec<OrderId>, LedgerError>;

    /// Total number of commitments on the ledger.
    fn commitment_count(&self) -> Result<u64, LedgerError>;
}
