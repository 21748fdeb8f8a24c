//! Assessment record model and related types.
//!
//! This module defines the AssessmentRecord struct and AssessmentCategory
//! enum for representing scored work captured during a term.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the category of an assessment.
///
/// Every record carries exactly one category; the three kinds share a
/// single record shape and differ only in this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentCategory {
    /// Take-home or in-class assignment work.
    Assignment,
    /// A class test sat during the term.
    Test,
    /// The end-of-term examination.
    Exam,
}

/// Represents a single scored piece of work for one learner in one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// The learner the score belongs to.
    pub learner_id: String,
    /// The subject the work was set in.
    pub subject_id: String,
    /// The category of the work.
    pub category: AssessmentCategory,
    /// The display name of the work (e.g., "Homework 1").
    pub name: String,
    /// The score the learner earned.
    pub score: Decimal,
    /// The maximum obtainable score.
    pub max_score: u32,
    /// The academic session the work belongs to (e.g., "2024/2025").
    pub session: String,
    /// The term the work belongs to (e.g., "First Term").
    pub term: String,
    /// The calendar date the work was sat or due. Carried for display;
    /// aggregation never reads it.
    pub date: NaiveDate,
}

impl AssessmentRecord {
    /// Returns this record's score as a percentage of its maximum.
    ///
    /// Returns zero when `max_score` is zero, so an empty or misconfigured
    /// record never produces a division error.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use result_engine::models::{AssessmentCategory, AssessmentRecord};
    /// use rust_decimal::Decimal;
    ///
    /// let record = AssessmentRecord {
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
    /// };
    /// assert_eq!(record.percentage(), Decimal::from(75));
    /// ```
    pub fn percentage(&self) -> Decimal {
        if self.max_score == 0 {
            return Decimal::ZERO;
        }
        self.score / Decimal::from(self.max_score) * Decimal::from(100)
    }
}
