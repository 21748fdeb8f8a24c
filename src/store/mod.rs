//! Data access for learners and assessment records.
//!
//! The engine never owns persistence. It reads learners and their scored
//! work through the [`AssessmentStore`] trait and treats every fetch as a
//! fresh snapshot; nothing is cached between requests. [`MemoryStore`] is
//! the bundled implementation used for tests and default wiring.

use std::collections::HashMap;

use crate::error::EngineResult;
use crate::models::{AssessmentRecord, Learner};

mod memory;

pub use memory::MemoryStore;

/// Read-only access to learners and their assessment records.
///
/// Implementations must be shareable across request handlers. All methods
/// return fresh copies; the engine never mutates store data.
pub trait AssessmentStore: Send + Sync {
    /// Looks up a single learner by id.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLearner` if no learner has the given id.
    fn learner(&self, learner_id: &str) -> EngineResult<Learner>;

    /// Returns every learner enrolled in the given class, in enrollment
    /// order.
    ///
    /// # Errors
    ///
    /// Returns `UnknownClass` if no learner belongs to the class.
    fn learners_in_class(&self, class_name: &str) -> EngineResult<Vec<Learner>>;

    /// Returns every learner known to the store, in enrollment order.
    fn all_learners(&self) -> EngineResult<Vec<Learner>>;

    /// Returns every assessment record captured for the learner, in entry
    /// order.
    ///
    /// A learner with no recorded work yields an empty vector; that is a
    /// valid state, not an error.
    fn assessments_for_learner(&self, learner_id: &str) -> EngineResult<Vec<AssessmentRecord>>;

    /// Returns the subject display-name lookup, keyed by subject id.
    ///
    /// Used only to annotate reports; aggregation never consults it.
    fn subject_names(&self) -> EngineResult<HashMap<String, String>>;
}
