//! Report models for the Result Aggregation Engine.
//!
//! This module contains the [`LearnerReport`] type and its associated
//! structures. A `LearnerReport` is the single shared contract consumed
//! identically by the on-screen view, the PDF renderer, and the CSV writer;
//! no sink recomputes grades, totals, or positions.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Learner;

/// A letter grade together with its remark label.
///
/// Produced by the grading scale for per-line, per-subject, and overall
/// percentages alike.
///
/// # Example
///
/// ```
/// use result_engine::models::GradeAssignment;
///
/// let grade = GradeAssignment {
///     letter: "A".to_string(),
///     label: "Excellent".to_string(),
/// };
/// assert_eq!(grade.letter, "A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeAssignment {
    /// The letter grade (e.g., "A").
    pub letter: String,
    /// The remark printed alongside the letter (e.g., "Excellent").
    pub label: String,
}

/// A single assessment shown as a line item on a report card.
///
/// # Example
///
/// ```
/// use result_engine::models::AssessmentLine;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let line = AssessmentLine {
///     name: "Homework 1".to_string(),
///     score: Decimal::from_str("18").unwrap(),
///     max_score: 20,
///     grade: "A".to_string(),
/// };
/// assert_eq!(line.display_line(), "Homework 1: 18.0/20 (A)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentLine {
    /// The display name of the work (e.g., "Homework 1").
    pub name: String,
    /// The score the learner earned.
    pub score: Decimal,
    /// The maximum obtainable score.
    pub max_score: u32,
    /// The letter grade for this single piece of work.
    pub grade: String,
}

impl AssessmentLine {
    /// Formats this line for display, e.g. `"Homework 1: 18.0/20 (A)"`.
    pub fn display_line(&self) -> String {
        format!(
            "{}: {:.1}/{} ({})",
            self.name, self.score, self.max_score, self.grade
        )
    }
}

/// One subject's row on a report card.
///
/// Line items are grouped by category for display, but the totals pool all
/// three categories together without weighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRow {
    /// The subject the row covers.
    pub subject_id: String,
    /// The subject's display name, or "N/A" when no name is known.
    pub subject_name: String,
    /// Assignment line items, in store order.
    pub assignments: Vec<AssessmentLine>,
    /// Test line items, in store order.
    pub tests: Vec<AssessmentLine>,
    /// Exam line items, in store order.
    pub exams: Vec<AssessmentLine>,
    /// Sum of scores across all line items.
    pub total_score: Decimal,
    /// Sum of maximum scores across all line items.
    pub total_max: u64,
    /// The pooled percentage for the subject.
    pub average_pct: Decimal,
    /// The grade earned for the subject's pooled percentage.
    pub grade: GradeAssignment,
}

/// The complete report card data for one learner.
///
/// This is the structure every rendering sink consumes; producing it is the
/// final step of an aggregation pass.
///
/// # Example
///
/// ```
/// use result_engine::models::{GradeAssignment, Learner, LearnerReport};
/// use rust_decimal::Decimal;
///
/// let report = LearnerReport {
///     learner: Learner {
///         id: "lrn_001".to_string(),
///         first_name: "Terngu".to_string(),
///         last_name: "Adakole".to_string(),
///         admission_number: "WIS/24/001".to_string(),
///         class_name: "JSS1A".to_string(),
///     },
///     session: "2024/2025".to_string(),
///     term: "First Term".to_string(),
///     subjects: vec![],
///     overall_total: Decimal::ZERO,
///     overall_average_pct: Decimal::ZERO,
///     overall_grade: GradeAssignment {
///         letter: "F".to_string(),
///         label: "Fail".to_string(),
///     },
///     position: None,
/// };
/// assert_eq!(report.position_display(), "N/A");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnerReport {
    /// The learner the report belongs to.
    pub learner: Learner,
    /// The session the report covers, or an empty string when unfiltered.
    pub session: String,
    /// The term the report covers, or an empty string when unfiltered.
    pub term: String,
    /// Per-subject rows, sorted by subject name then subject id.
    pub subjects: Vec<SubjectRow>,
    /// Sum of subject total scores.
    pub overall_total: Decimal,
    /// Unweighted mean of the per-subject percentages.
    pub overall_average_pct: Decimal,
    /// The grade earned for the overall average.
    pub overall_grade: GradeAssignment,
    /// 1-based class position, present only under a single-class scope.
    pub position: Option<u32>,
}

impl LearnerReport {
    /// Formats the class position for display.
    ///
    /// Returns an ordinal like `"1st"` or `"22nd"`, or `"N/A"` when no
    /// position was computed.
    ///
    /// # Example
    ///
    /// ```
    /// use result_engine::models::{GradeAssignment, Learner, LearnerReport};
    /// use rust_decimal::Decimal;
    ///
    /// # let mut report = LearnerReport {
    /// #     learner: Learner {
    /// #         id: "lrn_001".to_string(),
    /// #         first_name: "Terngu".to_string(),
    /// #         last_name: "Adakole".to_string(),
    /// #         admission_number: "WIS/24/001".to_string(),
    /// #         class_name: "JSS1A".to_string(),
    /// #     },
    /// #     session: "2024/2025".to_string(),
    /// #     term: "First Term".to_string(),
    /// #     subjects: vec![],
    /// #     overall_total: Decimal::ZERO,
    /// #     overall_average_pct: Decimal::ZERO,
    /// #     overall_grade: GradeAssignment {
    /// #         letter: "F".to_string(),
    /// #         label: "Fail".to_string(),
    /// #     },
    /// #     position: Some(3),
    /// # };
    /// assert_eq!(report.position_display(), "3rd");
    /// ```
    pub fn position_display(&self) -> String {
        match self.position {
            Some(position) => ordinal(position),
            None => "N/A".to_string(),
        }
    }
}

/// Formats a 1-based position as an English ordinal.
fn ordinal(position: u32) -> String {
    let suffix = match position % 100 {
        11..=13 => "th",
        _ => match position % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{}{}", position, suffix)
}

/// A batch of learner reports produced by one aggregation request.
///
/// Carries the request scope and school identity alongside the reports so
/// a sink needs nothing beyond this structure to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportBatch {
    /// Unique identifier for this batch.
    pub batch_id: Uuid,
    /// When the batch was generated.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that generated the batch.
    pub engine_version: String,
    /// The school's display name.
    pub school_name: String,
    /// The school's postal address.
    pub school_address: String,
    /// The class scope of the request, if one was given.
    pub class_name: Option<String>,
    /// The session filter applied, or an empty string when unfiltered.
    pub session: String,
    /// The term filter applied, or an empty string when unfiltered.
    pub term: String,
    /// The reports, in the order the learners were supplied.
    pub reports: Vec<LearnerReport>,
}
