//! Ledger boundaries for OrderSeal.
//!
//! This crate defines the write and read boundaries against the external
//! commitment ledger:
//! - `CommitmentSubmission` / `Commitment` / `SubmitReceipt` record types
//! - `LedgerWriter` / `LedgerReader` trait boundaries
//! - `InMemoryLedger` implementation for tests and embedding
//!
//! The ledger is the single source of truth for "does a commitment already
//! exist": its uniqueness constraint is the only mutual exclusion the write
//! path relies on.

pub mod error;
pub mod memory;
pub mod records;
pub mod traits;

pub use error::LedgerError;
pub use memory::InMemoryLedger;
pub use records::{Commitment, CommitmentSubmission, SubmitReceipt, WriteAuthority};
pub use traits::{LedgerReader, LedgerWriter};
