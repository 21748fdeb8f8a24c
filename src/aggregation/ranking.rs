//! Class ranking.
//!
//! This module orders a class's learners by overall point total and
//! assigns 1-based positions with a deterministic tie-break.

use std::collections::HashMap;

use rust_decimal::Decimal;

/// Assigns class positions from overall point totals.
///
/// Positions are only meaningful inside a single class, so they are
/// computed only when `class_scope` names one; the caller is responsible
/// for restricting `standings` to that class's members first. When
/// `class_scope` is absent or empty, the returned map is empty and every
/// learner's position stays unset.
///
/// Learners are sorted by `overall_total` descending. Ties are broken by
/// `learner_id` ascending, so repeated runs over the same standings always
/// produce the same positions. Every learner in scope receives a distinct
/// position; two learners never share a rank.
///
/// # Arguments
///
/// * `standings` - `(learner_id, overall_total)` pairs for the class
/// * `class_scope` - The class name the standings belong to, if any
///
/// # Returns
///
/// A map from learner id to 1-based position, empty when no class scope
/// is active.
///
/// # Example
///
/// ```
/// use result_engine::aggregation::rank_class;
/// use rust_decimal::Decimal;
///
/// let standings = vec![
///     ("lrn_002".to_string(), Decimal::from(40)),
///     ("lrn_001".to_string(), Decimal::from(103)),
/// ];
///
/// let positions = rank_class(&standings, Some("JSS1A"));
/// assert_eq!(positions["lrn_001"], 1);
/// assert_eq!(positions["lrn_002"], 2);
///
/// let unranked = rank_class(&standings, None);
/// assert!(unranked.is_empty());
/// ```
pub fn rank_class(
    standings: &[(String, Decimal)],
    class_scope: Option<&str>,
) -> HashMap<String, u32> {
    match class_scope {
        None | Some("") => return HashMap::new(),
        Some(_) => {}
    }

    let mut ordered: Vec<&(String, Decimal)> = standings.iter().collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    ordered
        .into_iter()
        .enumerate()
        .map(|(index, (learner_id, _))| (learner_id.clone(), index as u32 + 1))
        .collect()
}
