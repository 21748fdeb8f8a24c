//! Learner-level aggregation.
//!
//! This module folds one learner's subject aggregates into an overall
//! point total and an overall percentage average.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::SubjectAggregate;

/// The learner-level figures computed from subject aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallTotals {
    /// Sum of subject total scores. A raw point sum, not a percentage.
    pub overall_total: Decimal,
    /// Unweighted arithmetic mean of the per-subject percentages.
    pub overall_average_pct: Decimal,
}

/// Combines subject aggregates into learner-level totals.
///
/// `overall_total` sums the raw subject point totals. `overall_average_pct`
/// is the unweighted mean of the per-subject percentages, rounded to two
/// decimal places; a subject with one assessment counts exactly as much as
/// a subject with twenty. An empty map yields zeros for both figures.
///
/// The overall letter grade is not computed here; callers feed
/// `overall_average_pct` through the grading scale separately, independent
/// of any per-subject grade.
///
/// # Arguments
///
/// * `subject_aggregates` - The learner's per-subject aggregates
///
/// # Returns
///
/// The [`OverallTotals`] for the learner.
///
/// # Example
///
/// ```
/// use result_engine::aggregation::aggregate_learner;
/// use result_engine::models::SubjectAggregate;
/// use rust_decimal::Decimal;
/// use std::collections::BTreeMap;
///
/// let mut aggregates = BTreeMap::new();
/// aggregates.insert(
///     "math".to_string(),
///     SubjectAggregate {
///         subject_id: "math".to_string(),
///         total_score: Decimal::from(103),
///         total_max: 130,
///         average_pct: Decimal::new(7923, 2),
///     },
/// );
///
/// let totals = aggregate_learner(&aggregates);
/// assert_eq!(totals.overall_total, Decimal::from(103));
/// assert_eq!(totals.overall_average_pct, Decimal::new(7923, 2));
/// ```
pub fn aggregate_learner(
    subject_aggregates: &BTreeMap<String, SubjectAggregate>,
) -> OverallTotals {
    let overall_total: Decimal = subject_aggregates
        .values()
        .map(|aggregate| aggregate.total_score)
        .sum();

    let overall_average_pct = if subject_aggregates.is_empty() {
        Decimal::ZERO
    } else {
        let pct_sum: Decimal = subject_aggregates
            .values()
            .map(|aggregate| aggregate.average_pct)
            .sum();
        (pct_sum / Decimal::from(subject_aggregates.len() as u64)).round_dp(2)
    };

    OverallTotals {
        overall_total,
        overall_average_pct,
    }
}
