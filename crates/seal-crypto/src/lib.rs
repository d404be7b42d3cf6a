//! Commitment builder for OrderSeal.
//!
//! Provides the canonical byte encoding of an order's five canonical fields
//! and the domain-separated BLAKE3 digest over that encoding. The digest is
//! what binds an off-chain order record to its on-chain commitment.
//!
//! All crypto operations wrap established libraries — no custom cryptography.

pub mod canonical;
pub mod commitment;

pub use canonical::CanonicalOrder;
pub use commitment::CommitmentBuilder;
