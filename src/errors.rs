use thiserror::Error;

/// Precondition violations at construction boundaries.
///
/// Note that a record failing the eligibility predicate is a normal business
/// outcome reported in `BatchResult::invalid_ids`, never an error.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("invalid attribute name {0:?}: must be non-empty and must not contain '|' or '='")]
    InvalidAttributeName(String),
}
