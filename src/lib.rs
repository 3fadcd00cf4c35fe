//! Batch aggregation for the credit-eligibility rollup demo.
//!
//! This crate contains:
//! - A pure aggregation function that partitions credit records into
//!   valid/invalid sets and folds the valid set into a Merkle state root.
//! - An async chain wrapper that serializes root advancement across batches.
//! - A deterministic synthetic record generator for demos and tests.
//!
//! IMPORTANT: This is a *simulation* for an educational dashboard. The "proof"
//! attached to a sealed batch is a tagged string, not a SNARK.

pub mod aggregate;
pub mod chain;
pub mod constants;
pub mod errors;
pub mod merkle;
pub mod sample;
pub mod types;
