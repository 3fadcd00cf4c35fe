//! Crate-wide constants shared by the aggregator, the chain wrapper, and the
//! synthetic record generator.

/// Preimage of the genesis state root.
///
/// The chain starts from `sha256_hex("genesis")` and returns to it on reset;
/// nothing is persisted across restarts.
pub const GENESIS_MARKER: &str = "genesis";

/// Preimage of the sentinel root for a batch with zero valid records.
pub const EMPTY_BATCH_MARKER: &str = "empty";

/// Prefix of the simulated batch-proof tag.
///
/// A real rollup would carry a SNARK here; the demo carries a recognizable
/// string so the verification path still has a format to check.
pub const PROOF_TAG_PREFIX: &str = "zk-rollup-proof-";

/// How many leading hex characters of the new root the proof tag embeds.
pub const PROOF_TAG_ROOT_PREFIX_LEN: usize = 10;

/// Attribute names used by the demo's credit records.
pub const ATTR_CREDIT_SCORE: &str = "credit_score";
pub const ATTR_SALARY: &str = "salary";
pub const ATTR_BALANCE: &str = "balance";

// Demo eligibility thresholds. The credit-score floor is the one the rollup
// flow enforces on every batch; salary and balance floors come from the
// individual-proof inputs of the hybrid flow.
pub const DEFAULT_MIN_CREDIT_SCORE: u64 = 700;
pub const DEFAULT_MIN_SALARY: u64 = 50_000;
pub const DEFAULT_MIN_BALANCE: u64 = 10_000;
