//! Digest primitives: canonical record encoding, SHA-256 leaf digests, and
//! the pairwise Merkle fold.
//!
//! All digests are lowercase hex. Internal nodes hash the *hex strings* of
//! their children concatenated left||right; the only compatibility
//! requirement is internal consistency within one aggregation.

use crate::constants::{EMPTY_BATCH_MARKER, GENESIS_MARKER};
use crate::types::Record;
use sha2::{Digest, Sha256};

pub fn sha256_hex(data: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data.as_bytes());
    hex::encode(hasher.finalize())
}

/// Canonical encoding of one record: the identifier followed by `|name=value`
/// per attribute in sorted name order.
///
/// Attribute names are validated at construction to exclude the separators,
/// so distinct records never share an encoding.
pub fn leaf_encoding(record: &Record) -> String {
    let mut out = record.id.to_string();
    for (name, value) in &record.attributes {
        out.push('|');
        out.push_str(name);
        out.push('=');
        out.push_str(&value.to_string());
    }
    out
}

pub fn leaf_digest(record: &Record) -> String {
    sha256_hex(&leaf_encoding(record))
}

/// Root for a batch with zero valid records.
pub fn empty_batch_root() -> String {
    sha256_hex(EMPTY_BATCH_MARKER)
}

/// Root the chain starts from (and resets to).
pub fn genesis_root() -> String {
    sha256_hex(GENESIS_MARKER)
}

/// Fold leaf digests pairwise into a single root, level by level.
///
/// A level with an odd count duplicates its last digest as its own pairing
/// partner. A single leaf is returned unchanged; zero leaves yield the
/// empty-batch sentinel.
pub fn merkle_root(leaves: Vec<String>) -> String {
    if leaves.is_empty() {
        return empty_batch_root();
    }

    let mut level = leaves;
    while level.len() > 1 {
        let mut next = Vec::with_capacity(level.len().div_ceil(2));
        for pair in level.chunks(2) {
            let left = &pair[0];
            let right = pair.get(1).unwrap_or(left);
            next.push(sha256_hex(&format!("{left}{right}")));
        }
        level = next;
    }
    level.pop().unwrap_or_else(empty_batch_root)
}
