//! Foundation types for OrderSeal.
//!
//! This crate provides the identifier, monetary, and record types shared by
//! every other OrderSeal crate.
//!
//! # Key Types
//!
//! - [`OrderId`] — Unique order identifier (non-empty string)
//! - [`Amount`] — Smallest-currency-unit amount carried as a numeric string
//! - [`AccountAddress`] — Chain account identifier with case-insensitive equality
//! - [`OrderDigest`] — BLAKE3 content digest of an order's canonical fields
//! - [`LedgerReceipt`] — Durable confirmation receipt (transaction id + block number)
//! - [`OrderRecord`] — Off-chain order row with lifecycle status

pub mod address;
pub mod amount;
pub mod digest;
pub mod error;
pub mod order;
pub mod receipt;

pub use address::AccountAddress;
pub use amount::Amount;
pub use digest::OrderDigest;
pub use error::TypeError;
pub use order::{OrderId, OrderRecord, OrderStatus, ProductId};
pub use receipt::{LedgerReceipt, TxId};
