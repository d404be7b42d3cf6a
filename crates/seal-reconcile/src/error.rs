use seal_ledger::LedgerError;
use seal_store::StoreError;

/// Errors from fetching the two sides of a reconciliation.
///
/// Detected inconsistency is never an error — it is reported in the
/// [`crate::ReconciliationReport`]. These variants only cover failures to
/// read the stores at all.
#[derive(Debug, thiserror::Error)]
pub enum ReconcileError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
