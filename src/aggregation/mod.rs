//! Aggregation logic for the Result Aggregation Engine.
//!
//! This module contains the full aggregation pipeline for termly results:
//! grading scale lookup, assessment normalization with session/term
//! filters, per-subject pooling of scores, learner-level totals and
//! averages, deterministic class ranking, and assembly of the final
//! report structure shared by every rendering sink.

mod assemble;
mod grading;
mod normalize;
mod overall;
mod ranking;
mod subject_totals;

pub use assemble::{ReportFilters, assemble};
pub use grading::grade_for;
pub use normalize::normalize;
pub use overall::{OverallTotals, aggregate_learner};
pub use ranking::rank_class;
pub use subject_totals::aggregate_by_subject;
