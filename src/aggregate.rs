//! The batch aggregation operation: partition records by eligibility and
//! fold the valid set into a state root.

use crate::merkle::{leaf_digest, merkle_root};
use crate::types::{BatchResult, Record, ThresholdPredicate};

/// Partition `records` against `predicate` and compute the batch root.
///
/// Pure and total: every input shape (empty, all-valid, all-invalid, mixed)
/// produces a well-formed result, and identical inputs produce bit-identical
/// results. `previous_root` is passed through untouched; advancing the chain
/// is the caller's job.
pub fn aggregate(
    records: &[Record],
    predicate: &ThresholdPredicate,
    previous_root: &str,
) -> BatchResult {
    let mut leaves = Vec::with_capacity(records.len());
    let mut invalid_ids = Vec::new();

    // Single pass, input order. The root depends only on the ordered valid
    // subset; invalid ids keep their encounter order.
    for record in records {
        if predicate.eval(record) {
            leaves.push(leaf_digest(record));
        } else {
            invalid_ids.push(record.id);
        }
    }

    let valid_count = leaves.len();
    let root = merkle_root(leaves);

    BatchResult {
        total: records.len(),
        valid_count,
        invalid_ids,
        root,
        previous_root: previous_root.to_string(),
    }
}
