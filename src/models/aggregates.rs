//! Aggregate models derived from assessment records.
//!
//! Aggregates are views computed fresh on every request; they are never
//! persisted and never cached.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The pooled totals for one subject across every assessment category.
///
/// Scores from assignments, tests, and exams are summed into the same
/// total before the percentage is taken; no category carries extra weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectAggregate {
    /// The subject the records were grouped by.
    pub subject_id: String,
    /// Sum of scores across all records in scope.
    pub total_score: Decimal,
    /// Sum of maximum scores across all records in scope.
    pub total_max: u64,
    /// `total_score / total_max * 100`, or zero when `total_max` is zero.
    pub average_pct: Decimal,
}

/// One learner's complete aggregate picture for a term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnerAggregate {
    /// The learner the aggregates belong to.
    pub learner_id: String,
    /// Per-subject aggregates keyed by subject id.
    pub subject_aggregates: BTreeMap<String, SubjectAggregate>,
    /// Sum of subject total scores (a raw point sum, not a percentage).
    pub overall_total: Decimal,
    /// Unweighted mean of the per-subject percentage averages.
    pub overall_average_pct: Decimal,
    /// 1-based class position, present only under a single-class scope.
    pub position: Option<u32>,
}
