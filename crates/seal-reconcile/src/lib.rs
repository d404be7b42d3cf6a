//! Reconciliation for OrderSeal.
//!
//! Given the off-chain record and the on-chain commitment for one order
//! identifier, the reconciler produces a structured report: one-sided
//! existence, field-level differences, and an independent digest audit.
//! Reconciliation is read-only and repeatable; inconsistency is returned
//! as data, never thrown.

pub mod error;
pub mod reconciler;
pub mod report;

pub use error::ReconcileError;
pub use reconciler::Reconciler;
pub use report::{DiffField, DigestAudit, FieldDiff, ReconciliationReport};
