//! Core data models for the Result Aggregation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod aggregates;
mod assessment;
mod learner;
mod report;

pub use aggregates::{LearnerAggregate, SubjectAggregate};
pub use assessment::{AssessmentCategory, AssessmentRecord};
pub use learner::Learner;
pub use report::{AssessmentLine, GradeAssignment, LearnerReport, ReportBatch, SubjectRow};
