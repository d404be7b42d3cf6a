//! High-level OrderSeal client.
//!
//! `OrderClient` composes the commitment builder, a ledger, and an order
//! store behind one API: the write path (digest → ledger confirmation →
//! receipt persistence) and the verify path (reconciliation). The ledger
//! and store are injected at construction so tests and embeddings can
//! substitute their own implementations — there is no process-wide state.

pub mod client;
pub mod config;
pub mod error;

pub use client::{LedgerInfo, NewOrder, OrderClient};
pub use config::ClientConfig;
pub use error::ClientError;
