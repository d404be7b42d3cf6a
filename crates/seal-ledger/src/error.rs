use std::time::Duration;

use seal_types::OrderId;

/// Errors produced by ledger operations.
///
/// `DuplicateCommitment` is a conflict and must not be retried; the
/// transient variants may be retried with the identical submission, which
/// is safe because the ledger rejects duplicates. Nothing here is fatal to
/// the process — every failure is scoped to a single order's operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("commitment already exists for order {0}")]
    DuplicateCommitment(OrderId),

    #[error("ledger unreachable: {0}")]
    Unreachable(String),

    #[error("confirmation not durable within {timeout:?}")]
    ConfirmationTimeout { timeout: Duration },

    #[error("commitment amount must be greater than zero")]
    ZeroAmount,

    #[error("ledger backend error: {0}")]
    Backend(String),
}

impl LedgerError {
    /// Returns `true` if the identical submission may be retried.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Unreachable(_) | Self::ConfirmationTimeout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_classification() {
        assert!(LedgerError::Unreachable("connection refused".into()).is_transient());
        assert!(LedgerError::ConfirmationTimeout {
            timeout: Duration::from_secs(30)
        }
        .is_transient());
        assert!(!LedgerError::DuplicateCommitment(OrderId::parse("O1").unwrap()).is_transient());
        assert!(!LedgerError::ZeroAmount.is_transient());
    }
}
