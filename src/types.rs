//! Types shared between the aggregator and the chain wrapper.

use crate::constants::{
    ATTR_BALANCE, ATTR_CREDIT_SCORE, ATTR_SALARY, DEFAULT_MIN_BALANCE, DEFAULT_MIN_CREDIT_SCORE,
    DEFAULT_MIN_SALARY,
};
use crate::errors::BatchError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// One credit record submitted for rollup batching.
///
/// Attributes are named non-negative integers (score, salary in whole
/// currency units, and so on). The sorted map order is what gives the
/// canonical leaf encoding its fixed field order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Stable caller-assigned identifier, reported back for invalid records.
    pub id: u64,
    pub attributes: BTreeMap<String, u64>,
}

impl Record {
    /// Build a record, rejecting attribute names that would break the
    /// canonical encoding.
    pub fn new(id: u64, attributes: BTreeMap<String, u64>) -> Result<Self, BatchError> {
        for name in attributes.keys() {
            check_attr_name(name)?;
        }
        Ok(Self { id, attributes })
    }

    pub fn attr(&self, name: &str) -> Option<u64> {
        self.attributes.get(name).copied()
    }
}

/// Attribute names double as encoding field labels, so the encoding
/// separators are reserved.
fn check_attr_name(name: &str) -> Result<(), BatchError> {
    if name.is_empty() || name.contains('|') || name.contains('=') {
        return Err(BatchError::InvalidAttributeName(name.to_string()));
    }
    Ok(())
}

/// Named minimum-threshold eligibility predicate.
///
/// A record passes only if every named attribute is present and at or above
/// its threshold. A missing attribute fails closed: the record is routed to
/// the invalid list, never raised as an error.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThresholdPredicate {
    thresholds: BTreeMap<String, u64>,
}

impl ThresholdPredicate {
    pub fn new(thresholds: BTreeMap<String, u64>) -> Result<Self, BatchError> {
        for name in thresholds.keys() {
            check_attr_name(name)?;
        }
        Ok(Self { thresholds })
    }

    /// The demo's stricter L2 check: credit score >= 700.
    pub fn credit_score_floor() -> Self {
        Self {
            thresholds: BTreeMap::from([(ATTR_CREDIT_SCORE.to_string(), DEFAULT_MIN_CREDIT_SCORE)]),
        }
    }

    /// Full eligibility check of the hybrid flow (score, salary, balance).
    pub fn credit_eligibility() -> Self {
        Self {
            thresholds: BTreeMap::from([
                (ATTR_CREDIT_SCORE.to_string(), DEFAULT_MIN_CREDIT_SCORE),
                (ATTR_SALARY.to_string(), DEFAULT_MIN_SALARY),
                (ATTR_BALANCE.to_string(), DEFAULT_MIN_BALANCE),
            ]),
        }
    }

    pub fn eval(&self, record: &Record) -> bool {
        self.thresholds
            .iter()
            .all(|(name, min)| record.attr(name).is_some_and(|v| v >= *min))
    }
}

/// Immutable outcome of one aggregation call.
///
/// Carries no timestamps or random ids: identical inputs produce a
/// bit-identical result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    /// Number of records submitted.
    pub total: usize,
    /// Number of records that passed the predicate.
    pub valid_count: usize,
    /// Identifiers of rejected records, in input order.
    pub invalid_ids: Vec<u64>,
    /// Merkle root over the valid records (64 hex chars).
    pub root: String,
    /// The chain root this batch builds on (pass-through).
    pub previous_root: String,
}

impl BatchResult {
    /// Fraction of submitted records that passed, in [0, 1]. 0 for an empty
    /// batch.
    pub fn valid_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.valid_count as f64 / self.total as f64
        }
    }
}

/// A chain-accepted batch: the aggregation outcome plus its envelope
/// (identity, timing, and the simulated proof tag).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SealedBatch {
    pub batch_id: Uuid,
    pub generated_at: DateTime<Utc>,
    /// Wall-clock time spent aggregating, for the dashboard's timing panel.
    pub elapsed_ms: u64,
    /// Simulated batch proof (tagged string, not a real SNARK).
    pub proof_data: String,
    pub result: BatchResult,
}
