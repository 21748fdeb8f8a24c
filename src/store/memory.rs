//! In-memory implementation of the assessment store.

use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};
use crate::models::{AssessmentRecord, Learner};

use super::AssessmentStore;

/// An in-memory [`AssessmentStore`].
///
/// Learners and records are kept in insertion order, so reports come out
/// in the order the data was entered. Intended for tests and for embedders
/// that load their data up front.
///
/// # Example
///
/// ```
/// use result_engine::store::{AssessmentStore, MemoryStore};
/// use result_engine::models::Learner;
///
/// let mut store = MemoryStore::new();
/// store.add_learner(Learner {
///     id: "lrn_001".to_string(),
///     first_name: "Terngu".to_string(),
///     last_name: "Adakole".to_string(),
///     admission_number: "WIS/24/001".to_string(),
///     class_name: "JSS1A".to_string(),
/// });
///
/// let found = store.learner("lrn_001").unwrap();
/// assert_eq!(found.full_name(), "Terngu Adakole");
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    learners: Vec<Learner>,
    assessments: HashMap<String, Vec<AssessmentRecord>>,
    subject_names: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a learner. Enrollment order is the order of calls.
    pub fn add_learner(&mut self, learner: Learner) {
        self.learners.push(learner);
    }

    /// Adds an assessment record under its learner id.
    pub fn add_assessment(&mut self, record: AssessmentRecord) {
        self.assessments
            .entry(record.learner_id.clone())
            .or_default()
            .push(record);
    }

    /// Registers a subject's display name.
    pub fn set_subject_name(&mut self, subject_id: impl Into<String>, name: impl Into<String>) {
        self.subject_names.insert(subject_id.into(), name.into());
    }
}

impl AssessmentStore for MemoryStore {
    fn learner(&self, learner_id: &str) -> EngineResult<Learner> {
        self.learners
            .iter()
            .find(|l| l.id == learner_id)
            .cloned()
            .ok_or_else(|| EngineError::UnknownLearner {
                learner_id: learner_id.to_string(),
            })
    }

    fn learners_in_class(&self, class_name: &str) -> EngineResult<Vec<Learner>> {
        let members: Vec<Learner> = self
            .learners
            .iter()
            .filter(|l| l.class_name == class_name)
            .cloned()
            .collect();

        if members.is_empty() {
            return Err(EngineError::UnknownClass {
                class_name: class_name.to_string(),
            });
        }

        Ok(members)
    }

    fn all_learners(&self) -> EngineResult<Vec<Learner>> {
        Ok(self.learners.clone())
    }

    fn assessments_for_learner(&self, learner_id: &str) -> EngineResult<Vec<AssessmentRecord>> {
        Ok(self
            .assessments
            .get(learner_id)
            .cloned()
            .unwrap_or_default())
    }

    fn subject_names(&self) -> EngineResult<HashMap<String, String>> {
        Ok(self.subject_names.clone())
    }
}
