use seal_ledger::LedgerError;
use seal_reconcile::ReconcileError;
use seal_store::StoreError;
use seal_types::{OrderId, TypeError};

/// Errors from client operations.
///
/// Every failure is scoped to a single order's operation; none is fatal to
/// the process.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("order {0} already exists")]
    OrderExists(OrderId),

    #[error("total amount overflows the supported range")]
    AmountOverflow,

    #[error(transparent)]
    Invalid(#[from] TypeError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// Returns `true` if the operation may be retried unchanged.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Ledger(e) if e.is_transient())
    }
}

impl From<ReconcileError> for ClientError {
    fn from(error: ReconcileError) -> Self {
        match error {
            ReconcileError::Ledger(e) => Self::Ledger(e),
            ReconcileError::Store(e) => Self::Store(e),
        }
    }
}
