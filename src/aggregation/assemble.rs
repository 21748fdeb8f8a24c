//! Report assembly.
//!
//! This module runs the full aggregation pass for a set of learners and
//! packages the results into [`LearnerReport`] values, the single shared
//! structure every rendering sink consumes. No sink recomputes grades,
//! totals, or positions; everything is settled here.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::config::GradingScale;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AssessmentCategory, AssessmentLine, AssessmentRecord, Learner, LearnerAggregate,
    LearnerReport, SubjectRow,
};
use crate::store::AssessmentStore;

use super::{aggregate_by_subject, aggregate_learner, grade_for, normalize, rank_class};

/// Scope filters for one report request.
///
/// `session` and `term` follow the normalizer's contract: absent or empty
/// means "include all". `class_name` both scopes ranking and is echoed
/// into the output. `single_learner_id` narrows the output to one report
/// without narrowing the ranking cohort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilters {
    /// The class the supplied learners belong to, if ranking is wanted.
    pub class_name: Option<String>,
    /// Session to restrict records to.
    pub session: Option<String>,
    /// Term to restrict records to.
    pub term: Option<String>,
    /// Restrict the output to this learner's report only.
    pub single_learner_id: Option<String>,
}

/// Assembles report cards for the supplied learners.
///
/// Every supplied learner is aggregated, because positions depend on the
/// whole cohort: records are normalized per learner, pooled by subject,
/// folded into overall totals, and ranked when a class scope is active.
/// Reports come out in the order the learners were supplied; the assembler
/// never sorts the output sequence.
///
/// When `single_learner_id` is set, only that learner's report is
/// returned, with its position still computed relative to the supplied
/// cohort.
///
/// # Arguments
///
/// * `store` - The data store to fetch records and subject names from
/// * `learners` - The learners to report on, already restricted to the
///   class scope by the caller
/// * `scale` - The grading scale to award letters against
/// * `filters` - The request scope
///
/// # Returns
///
/// One [`LearnerReport`] per learner in scope.
///
/// # Errors
///
/// Returns `UnknownLearner` when `single_learner_id` names a learner not
/// in the supplied set, or the store's error when a fetch fails.
pub fn assemble(
    store: &dyn AssessmentStore,
    learners: &[Learner],
    scale: &GradingScale,
    filters: &ReportFilters,
) -> EngineResult<Vec<LearnerReport>> {
    let subject_names = store.subject_names()?;

    // Aggregate the whole cohort first; ranking needs every total.
    let mut aggregated = Vec::with_capacity(learners.len());
    for learner in learners {
        let records = normalize(
            store,
            &learner.id,
            filters.session.as_deref(),
            filters.term.as_deref(),
        )?;
        let subject_aggregates = aggregate_by_subject(&records);
        let totals = aggregate_learner(&subject_aggregates);
        aggregated.push((learner, records, subject_aggregates, totals));
    }

    let standings: Vec<(String, Decimal)> = aggregated
        .iter()
        .map(|(learner, _, _, totals)| (learner.id.clone(), totals.overall_total))
        .collect();
    let positions = rank_class(&standings, filters.class_name.as_deref());

    if let Some(wanted) = &filters.single_learner_id {
        if !aggregated.iter().any(|(learner, _, _, _)| learner.id == *wanted) {
            return Err(EngineError::UnknownLearner {
                learner_id: wanted.clone(),
            });
        }
    }

    let mut reports = Vec::new();
    for (learner, records, subject_aggregates, totals) in aggregated {
        if let Some(wanted) = &filters.single_learner_id {
            if learner.id != *wanted {
                continue;
            }
        }

        let aggregate = LearnerAggregate {
            learner_id: learner.id.clone(),
            subject_aggregates,
            overall_total: totals.overall_total,
            overall_average_pct: totals.overall_average_pct,
            position: positions.get(&learner.id).copied(),
        };

        reports.push(build_report(
            learner,
            &records,
            aggregate,
            &subject_names,
            scale,
            filters,
        ));
    }

    Ok(reports)
}

/// Dresses one learner's aggregate into the sink-facing report structure.
fn build_report(
    learner: &Learner,
    records: &[AssessmentRecord],
    aggregate: LearnerAggregate,
    subject_names: &HashMap<String, String>,
    scale: &GradingScale,
    filters: &ReportFilters,
) -> LearnerReport {
    let mut subjects: Vec<SubjectRow> = aggregate
        .subject_aggregates
        .values()
        .map(|subject| {
            let mut row = SubjectRow {
                subject_id: subject.subject_id.clone(),
                subject_name: subject_names
                    .get(&subject.subject_id)
                    .cloned()
                    .unwrap_or_else(|| "N/A".to_string()),
                assignments: Vec::new(),
                tests: Vec::new(),
                exams: Vec::new(),
                total_score: subject.total_score,
                total_max: subject.total_max,
                average_pct: subject.average_pct,
                grade: grade_for(subject.average_pct, scale),
            };

            // Line items stay in store entry order within each category.
            for record in records.iter().filter(|r| r.subject_id == subject.subject_id) {
                let line = AssessmentLine {
                    name: record.name.clone(),
                    score: record.score,
                    max_score: record.max_score,
                    grade: grade_for(record.percentage(), scale).letter,
                };
                match record.category {
                    AssessmentCategory::Assignment => row.assignments.push(line),
                    AssessmentCategory::Test => row.tests.push(line),
                    AssessmentCategory::Exam => row.exams.push(line),
                }
            }

            row
        })
        .collect();

    subjects.sort_by(|a, b| {
        a.subject_name
            .cmp(&b.subject_name)
            .then_with(|| a.subject_id.cmp(&b.subject_id))
    });

    LearnerReport {
        learner: learner.clone(),
        session: filters.session.clone().unwrap_or_default(),
        term: filters.term.clone().unwrap_or_default(),
        subjects,
        overall_total: aggregate.overall_total,
        overall_average_pct: aggregate.overall_average_pct,
        overall_grade: grade_for(aggregate.overall_average_pct, scale),
        position: aggregate.position,
    }
}
