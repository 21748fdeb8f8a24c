//! Assessment normalization.
//!
//! This module fetches a learner's assignment, test, and exam records from
//! the data store and filters them down to the requested session and term.
//! All three categories come back as one flat sequence; the category tag
//! is kept for display grouping but carries no weight downstream.

use crate::error::EngineResult;
use crate::models::AssessmentRecord;
use crate::store::AssessmentStore;

/// Fetches and filters one learner's assessment records.
///
/// A record qualifies when the session filter is absent or empty OR equals
/// the record's session, and likewise for the term filter. Absent filters
/// mean "include all". A learner with zero qualifying records yields an
/// empty sequence; that is a valid state, not an error, and downstream
/// aggregation resolves it to zero totals.
///
/// # Arguments
///
/// * `store` - The data store to fetch from
/// * `learner_id` - The learner whose records to fetch
/// * `session_filter` - Optional session to restrict to (e.g., "2024/2025")
/// * `term_filter` - Optional term to restrict to (e.g., "First Term")
///
/// # Returns
///
/// The qualifying records in store entry order, or the store's error if
/// the fetch fails.
pub fn normalize(
    store: &dyn AssessmentStore,
    learner_id: &str,
    session_filter: Option<&str>,
    term_filter: Option<&str>,
) -> EngineResult<Vec<AssessmentRecord>> {
    let records = store.assessments_for_learner(learner_id)?;

    Ok(records
        .into_iter()
        .filter(|record| {
            filter_matches(session_filter, &record.session)
                && filter_matches(term_filter, &record.term)
        })
        .collect())
}

/// Returns true when the filter is absent, empty, or equal to the value.
fn filter_matches(filter: Option<&str>, value: &str) -> bool {
    match filter {
        None | Some("") => true,
        Some(wanted) => wanted == value,
    }
}
