//! Request types for the Result Aggregation Engine API.
//!
//! This module defines the JSON request structure shared by the report
//! endpoints.

use serde::{Deserialize, Serialize};

use crate::aggregation::ReportFilters;
use crate::config::SchoolInfo;

/// Request body for the report endpoints.
///
/// Every field is optional. Leaving `session` or `term` out selects the
/// school's current session or term from configuration; sending an
/// explicit empty string instead disables that filter, so records from
/// every session or term are pooled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Restrict reports to learners enrolled in this class. When set,
    /// learners are ranked against their classmates.
    #[serde(default)]
    pub class_name: Option<String>,
    /// The academic session to include (e.g., "2024/2025").
    #[serde(default)]
    pub session: Option<String>,
    /// The term within the session to include (e.g., "First Term").
    #[serde(default)]
    pub term: Option<String>,
    /// Produce a report for this single learner only.
    #[serde(default)]
    pub learner_id: Option<String>,
}

impl ReportRequest {
    /// Converts the request into domain filters, substituting the school's
    /// current session and term for absent fields.
    ///
    /// Explicit values pass through untouched, including empty strings,
    /// which the normalizer treats as "include all".
    pub fn resolve(self, school: &SchoolInfo) -> ReportFilters {
        ReportFilters {
            class_name: self.class_name,
            session: Some(
                self.session
                    .unwrap_or_else(|| school.current_session.clone()),
            ),
            term: Some(self.term.unwrap_or_else(|| school.current_term.clone())),
            single_learner_id: self.learner_id,
        }
    }
}
