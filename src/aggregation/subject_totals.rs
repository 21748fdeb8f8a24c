//! Per-subject aggregation.
//!
//! This module groups normalized assessment records by subject and pools
//! their scores into a single total, maximum, and percentage per subject.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{AssessmentRecord, SubjectAggregate};

/// Groups records by subject and computes pooled totals.
///
/// For each subject: `total_score` is the sum of scores, `total_max` the
/// sum of maximum scores, and `average_pct` is
/// `total_score / total_max * 100` rounded to two decimal places, or zero
/// when `total_max` is zero.
///
/// Scores from assignments, tests, and exams are pooled into the same sum
/// with no category weighting: one exam worth 100 and one assignment worth
/// 10 land in the same 110-point pool before the percentage is taken.
///
/// # Arguments
///
/// * `records` - The normalized records to aggregate, any order
///
/// # Returns
///
/// A map from subject id to [`SubjectAggregate`], ordered by subject id.
/// Empty input yields an empty map.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use result_engine::aggregation::aggregate_by_subject;
/// use result_engine::models::{AssessmentCategory, AssessmentRecord};
/// use rust_decimal::Decimal;
///
/// let records = vec![AssessmentRecord {
///     id: "asm_001".to_string(),
///     learner_id: "lrn_001".to_string(),
///     subject_id: "math".to_string(),
///     category: AssessmentCategory::Exam,
///     name: "End of Term Exam".to_string(),
///     score: Decimal::from(60),
///     max_score: 80,
///     session: "2024/2025".to_string(),
///     term: "First Term".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 12, 9).unwrap(),
/// }];
///
/// let aggregates = aggregate_by_subject(&records);
/// assert_eq!(aggregates["math"].total_max, 80);
/// assert_eq!(aggregates["math"].average_pct, Decimal::from(75));
/// ```
pub fn aggregate_by_subject(records: &[AssessmentRecord]) -> BTreeMap<String, SubjectAggregate> {
    let mut totals: BTreeMap<String, (Decimal, u64)> = BTreeMap::new();

    for record in records {
        let entry = totals
            .entry(record.subject_id.clone())
            .or_insert((Decimal::ZERO, 0));
        entry.0 += record.score;
        entry.1 += u64::from(record.max_score);
    }

    totals
        .into_iter()
        .map(|(subject_id, (total_score, total_max))| {
            let average_pct = subject_percentage(total_score, total_max);
            (
                subject_id.clone(),
                SubjectAggregate {
                    subject_id,
                    total_score,
                    total_max,
                    average_pct,
                },
            )
        })
        .collect()
}

/// Computes the pooled percentage, guarding the zero-max case.
fn subject_percentage(total_score: Decimal, total_max: u64) -> Decimal {
    if total_max == 0 {
        return Decimal::ZERO;
    }
    (total_score / Decimal::from(total_max) * Decimal::from(100)).round_dp(2)
}
