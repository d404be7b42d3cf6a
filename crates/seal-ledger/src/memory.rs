use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;
use std::time::Duration;

use chrono::Utc;
use tracing::debug;

use seal_types::{OrderId, TxId};

use crate::error::LedgerError;
use crate::records::{Commitment, CommitmentSubmission, SubmitReceipt};
use crate::traits::{LedgerReader, LedgerWriter};

/// In-memory commitment ledger for tests, local demos, and embedding.
///
/// Confirmation is immediate unless a confirmation delay is configured;
/// the simulated chain advances one block per confirmed submission.
pub struct InMemoryLedger {
    inner: RwLock<LedgerState>,
    offline: AtomicBool,
}

#[derive(Default)]
struct LedgerState {
    commitments: HashMap<OrderId, Commitment>,
    // Insertion order, for `order_ids()`.
    committed: Vec<OrderId>,
    next_block: u64,
    confirmation_delay: Duration,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(LedgerState {
                next_block: 1,
                ..LedgerState::default()
            }),
            offline: AtomicBool::new(false),
        }
    }

    /// Simulate an unreachable ledger: subsequent operations fail with a
    /// transient error until switched back.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Simulate slow confirmation. A submission whose timeout is shorter
    /// than this delay fails with `ConfirmationTimeout` and is treated as
    /// not durable.
    pub fn set_confirmation_delay(&self, delay: Duration) {
        self.inner.write().expect("lock poisoned").confirmation_delay = delay;
    }

    fn check_online(&self) -> Result<(), LedgerError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(LedgerError::Unreachable("ledger offline".into()));
        }
        Ok(())
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerWriter for InMemoryLedger {
    fn submit_commitment(
        &self,
        submission: &CommitmentSubmission,
        timeout: Duration,
    ) -> Result<SubmitReceipt, LedgerError> {
        self.check_online()?;

        if submission.amount.is_zero() {
            return Err(LedgerError::ZeroAmount);
        }

        let mut state = self
            .inner
            .write()
            .map_err(|_| LedgerError::Backend("ledger write lock poisoned".into()))?;

        if state.confirmation_delay > timeout {
            return Err(LedgerError::ConfirmationTimeout { timeout });
        }

        if state.commitments.contains_key(&submission.order_id) {
            return Err(LedgerError::DuplicateCommitment(submission.order_id.clone()));
        }

        let block_number = state.next_block;
        state.next_block += 1;

        let tx_id = derive_tx_id(submission, block_number);
        let commitment = Commitment {
            order_id: submission.order_id.clone(),
            submitter: submission.submitter.clone(),
            amount: submission.amount.clone(),
            digest: submission.digest,
            timestamp: Utc::now(),
        };

        state
            .commitments
            .insert(submission.order_id.clone(), commitment);
        state.committed.push(submission.order_id.clone());

        debug!(
            order_id = %submission.order_id,
            block = block_number,
            authority = %submission.authority,
            "commitment confirmed"
        );

        Ok(SubmitReceipt {
            tx_id,
            block_number,
            digest: submission.digest,
        })
    }
}

impl LedgerReader for InMemoryLedger {
    fn get_commitment(&self, order_id: &OrderId) -> Result<Option<Commitment>, LedgerError> {
        self.check_online()?;
        let state = self
            .inner
            .read()
            .map_err(|_| LedgerError::Backend("ledger read lock poisoned".into()))?;
        Ok(state.commitments.get(order_id).cloned())
    }

    fn order_ids(&self) -> Result<Vec<OrderId>, LedgerError> {
        self.check_online()?;
        let state = self
            .inner
            .read()
            .map_err(|_| LedgerError::Backend("ledger read lock poisoned".into()))?;
        Ok(state.committed.clone())
    }

    fn commitment_count(&self) -> Result<u64, LedgerError> {
        self.check_online()?;
        let state = self
            .inner
            .read()
            .map_err(|_| LedgerError::Backend("ledger read lock poisoned".into()))?;
        Ok(state.committed.len() as u64)
    }
}

// Tx ids are content-derived so the fake is deterministic given the same
// submission sequence.
fn derive_tx_id(submission: &CommitmentSubmission, block_number: u64) -> TxId {
    let mut hasher = blake3::Hasher::new();
    hasher.update(b"seal-tx-v1:");
    hasher.update(submission.order_id.as_str().as_bytes());
    hasher.update(b":");
    hasher.update(submission.digest.as_bytes());
    hasher.update(b":");
    hasher.update(&block_number.to_be_bytes());
    TxId::from_hash(*hasher.finalize().as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    use seal_types::{AccountAddress, Amount, OrderDigest};

    use crate::records::WriteAuthority;

    const TIMEOUT: Duration = Duration::from_secs(30);

    fn submission(order_id: &str, amount: &str) -> CommitmentSubmission {
        CommitmentSubmission {
            order_id: OrderId::parse(order_id).unwrap(),
            amount: Amount::parse(amount).unwrap(),
            digest: OrderDigest::from_hash([7; 32]),
            submitter: AccountAddress::parse("0x00112233445566778899aabbccddeeff00112233")
                .unwrap(),
            authority: WriteAuthority::Custodial,
        }
    }

    #[test]
    fn submit_and_read_back() {
        let ledger = InMemoryLedger::new();
        let receipt = ledger
            .submit_commitment(&submission("O1", "1000"), TIMEOUT)
            .unwrap();
        assert_eq!(receipt.block_number, 1);
        assert_eq!(receipt.digest, OrderDigest::from_hash([7; 32]));

        let commitment = ledger
            .get_commitment(&OrderId::parse("O1").unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(commitment.amount, Amount::parse("1000").unwrap());
        assert_eq!(commitment.digest, OrderDigest::from_hash([7; 32]));
    }

    #[test]
    fn duplicate_submission_is_rejected_once_committed() {
        let ledger = InMemoryLedger::new();
        ledger
            .submit_commitment(&submission("O1", "1000"), TIMEOUT)
            .unwrap();

        let error = ledger
            .submit_commitment(&submission("O1", "1000"), TIMEOUT)
            .unwrap_err();
        assert_eq!(
            error,
            LedgerError::DuplicateCommitment(OrderId::parse("O1").unwrap())
        );
        assert!(!error.is_transient());
        assert_eq!(ledger.commitment_count().unwrap(), 1);
    }

    #[test]
    fn zero_amount_rejected_before_commit() {
        let ledger = InMemoryLedger::new();
        let error = ledger
            .submit_commitment(&submission("O1", "0"), TIMEOUT)
            .unwrap_err();
        assert_eq!(error, LedgerError::ZeroAmount);
        assert_eq!(ledger.commitment_count().unwrap(), 0);
    }

    #[test]
    fn missing_commitment_reads_as_none() {
        let ledger = InMemoryLedger::new();
        let found = ledger
            .get_commitment(&OrderId::parse("NONEXISTENT").unwrap())
            .unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn offline_ledger_fails_transiently_then_recovers() {
        let ledger = InMemoryLedger::new();
        ledger.set_offline(true);

        let error = ledger
            .submit_commitment(&submission("O1", "1000"), TIMEOUT)
            .unwrap_err();
        assert!(error.is_transient());

        // Retry of the identical submission after recovery.
        ledger.set_offline(false);
        ledger
            .submit_commitment(&submission("O1", "1000"), TIMEOUT)
            .unwrap();
        assert_eq!(ledger.commitment_count().unwrap(), 1);
    }

    #[test]
    fn slow_confirmation_times_out_and_is_not_durable() {
        let ledger = InMemoryLedger::new();
        ledger.set_confirmation_delay(Duration::from_secs(60));

        let error = ledger
            .submit_commitment(&submission("O1", "1000"), Duration::from_secs(1))
            .unwrap_err();
        assert_eq!(
            error,
            LedgerError::ConfirmationTimeout {
                timeout: Duration::from_secs(1)
            }
        );
        assert_eq!(ledger.commitment_count().unwrap(), 0);
    }

    #[test]
    fn block_numbers_are_monotonic() {
        let ledger = InMemoryLedger::new();
        let r1 = ledger
            .submit_commitment(&submission("O1", "1000"), TIMEOUT)
            .unwrap();
        let r2 = ledger
            .submit_commitment(&submission("O2", "2000"), TIMEOUT)
            .unwrap();
        assert!(r2.block_number > r1.block_number);
        assert_ne!(r1.tx_id, r2.tx_id);
    }

    #[test]
    fn order_ids_preserve_commitment_order() {
        let ledger = InMemoryLedger::new();
        ledger
            .submit_commitment(&submission("O2", "100"), TIMEOUT)
            .unwrap();
        ledger
            .submit_commitment(&submission("O1", "200"), TIMEOUT)
            .unwrap();
        let ids: Vec<String> = ledger
            .order_ids()
            .unwrap()
            .into_iter()
            .map(|id| id.as_str().to_string())
            .collect();
        assert_eq!(ids, vec!["O2", "O1"]);
    }
}
