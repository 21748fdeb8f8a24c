//! CSV rendering of report cards.
//!
//! Produces the downloadable report-card export: a banner-sectioned
//! document with one learner information block per report, followed by a
//! subject-wise performance table when the learner has any subjects.

use crate::error::{EngineError, EngineResult};
use crate::models::{AssessmentLine, LearnerReport};

/// Renders report cards as CSV text.
///
/// Every figure comes straight off the [`LearnerReport`] values; the sink
/// adds layout only. Reports render in the order supplied.
///
/// # Arguments
///
/// * `reports` - The assembled reports to render
///
/// # Returns
///
/// The CSV document as a string.
///
/// # Errors
///
/// Returns `RenderError` if the underlying writer fails.
pub fn render_report_csv(reports: &[LearnerReport]) -> EngineResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    writer
        .write_record(["Report Card - Termly Assessment Results"])
        .map_err(csv_error)?;
    write_blank_row(&mut writer)?;

    for report in reports {
        write_learner_block(&mut writer, report)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| EngineError::RenderError {
            message: e.to_string(),
        })?;

    String::from_utf8(bytes).map_err(|e| EngineError::RenderError {
        message: e.to_string(),
    })
}

/// Writes one learner's information block and subject table.
fn write_learner_block(
    writer: &mut csv::Writer<Vec<u8>>,
    report: &LearnerReport,
) -> EngineResult<()> {
    let banner = "=".repeat(80);
    writer.write_record([banner.as_str()]).map_err(csv_error)?;
    writer
        .write_record(["LEARNER INFORMATION"])
        .map_err(csv_error)?;
    writer.write_record([banner.as_str()]).map_err(csv_error)?;

    writer
        .write_record(["Name:", &report.learner.full_name()])
        .map_err(csv_error)?;
    writer
        .write_record(["Admission Number:", &report.learner.admission_number])
        .map_err(csv_error)?;
    writer
        .write_record(["Class:", or_na(&report.learner.class_name)])
        .map_err(csv_error)?;
    writer
        .write_record(["Session:", or_na(&report.session)])
        .map_err(csv_error)?;
    writer
        .write_record(["Term:", or_na(&report.term)])
        .map_err(csv_error)?;
    writer
        .write_record(["Total Score:", &format!("{:.2}", report.overall_total)])
        .map_err(csv_error)?;
    writer
        .write_record([
            "Average Score:",
            &format!("{:.2}%", report.overall_average_pct),
        ])
        .map_err(csv_error)?;
    writer
        .write_record(["Class Position:", &report.position_display()])
        .map_err(csv_error)?;
    write_blank_row(writer)?;

    if !report.subjects.is_empty() {
        writer
            .write_record(["SUBJECT-WISE PERFORMANCE"])
            .map_err(csv_error)?;
        writer
            .write_record(["-".repeat(80).as_str()])
            .map_err(csv_error)?;
        writer
            .write_record([
                "Subject",
                "Assignments",
                "Tests",
                "Exams",
                "Total Score",
                "Average",
                "Grade",
            ])
            .map_err(csv_error)?;

        for subject in &report.subjects {
            writer
                .write_record([
                    subject.subject_name.as_str(),
                    &line_item_cell(&subject.assignments),
                    &line_item_cell(&subject.tests),
                    &line_item_cell(&subject.exams),
                    &format!("{:.2}", subject.total_score),
                    &format!("{:.2}%", subject.average_pct),
                    &subject.grade.letter,
                ])
                .map_err(csv_error)?;
        }

        write_blank_row(writer)?;
    }

    write_blank_row(writer)?;
    Ok(())
}

/// Writes a record with no fields, which comes out as a bare newline.
/// A record with one empty field would render as `""` instead.
fn write_blank_row(writer: &mut csv::Writer<Vec<u8>>) -> EngineResult<()> {
    writer.write_record(None::<&[u8]>).map_err(csv_error)
}

/// Joins a category's line items into one cell, or "None" when empty.
fn line_item_cell(lines: &[AssessmentLine]) -> String {
    if lines.is_empty() {
        return "None".to_string();
    }

    lines
        .iter()
        .map(|line| format!("{} ({:.1}/{})", line.name, line.score, line.max_score))
        .collect::<Vec<String>>()
        .join(", ")
}

/// Substitutes "N/A" for empty display values.
fn or_na(value: &str) -> &str {
    if value.is_empty() { "N/A" } else { value }
}

fn csv_error(e: csv::Error) -> EngineError {
    EngineError::RenderError {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GradeAssignment, Learner, SubjectRow};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn line(name: &str, score: &str, max_score: u32) -> AssessmentLine {
        AssessmentLine {
            name: name.to_string(),
            score: dec(score),
            max_score,
            grade: "A".to_string(),
        }
    }

    fn create_sample_report() -> LearnerReport {
        LearnerReport {
            learner: Learner {
                id: "lrn_001".to_string(),
                first_name: "Terngu".to_string(),
                last_name: "Adakole".to_string(),
                admission_number: "WIS/24/001".to_string(),
                class_name: "JSS1A".to_string(),
            },
            session: "2024/2025".to_string(),
            term: "First Term".to_string(),
            subjects: vec![SubjectRow {
                subject_id: "math".to_string(),
                subject_name: "Mathematics".to_string(),
                assignments: vec![line("Homework 1", "18", 20)],
                tests: vec![line("Test 1", "25", 30)],
                exams: vec![line("End of Term Exam", "60", 80)],
                total_score: dec("103"),
                total_max: 130,
                average_pct: dec("79.23"),
                grade: GradeAssignment {
                    letter: "A".to_string(),
                    label: "Excellent".to_string(),
                },
            }],
            overall_total: dec("103"),
            overall_average_pct: dec("79.23"),
            overall_grade: GradeAssignment {
                letter: "A".to_string(),
                label: "Excellent".to_string(),
            },
            position: Some(1),
        }
    }

    #[test]
    fn test_document_starts_with_title() {
        let csv = render_report_csv(&[create_sample_report()]).unwrap();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next(),
            Some("Report Card - Termly Assessment Results")
        );
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("=".repeat(80).as_str()));
        assert_eq!(lines.next(), Some("LEARNER INFORMATION"));
    }

    #[test]
    fn test_learner_information_rows() {
        let csv = render_report_csv(&[create_sample_report()]).unwrap();

        assert!(csv.contains("Name:,Terngu Adakole"));
        assert!(csv.contains("Admission Number:,WIS/24/001"));
        assert!(csv.contains("Class:,JSS1A"));
        assert!(csv.contains("Session:,2024/2025"));
        assert!(csv.contains("Term:,First Term"));
        assert!(csv.contains("Total Score:,103.00"));
        assert!(csv.contains("Average Score:,79.23%"));
        assert!(csv.contains("Class Position:,1st"));
    }

    #[test]
    fn test_subject_table_rows() {
        let csv = render_report_csv(&[create_sample_report()]).unwrap();

        assert!(csv.contains("SUBJECT-WISE PERFORMANCE"));
        assert!(csv.contains("Subject,Assignments,Tests,Exams,Total Score,Average,Grade"));
        assert!(csv.contains("Homework 1 (18.0/20)"));
        assert!(csv.contains("Test 1 (25.0/30)"));
        assert!(csv.contains("End of Term Exam (60.0/80)"));
        assert!(csv.contains("103.00,79.23%,A"));
    }

    #[test]
    fn test_multiple_line_items_join_with_commas() {
        let mut report = create_sample_report();
        report.subjects[0].assignments.push(line("Homework 2", "9", 10));

        let csv = render_report_csv(&[report]).unwrap();
        assert!(csv.contains("Homework 1 (18.0/20), Homework 2 (9.0/10)"));
    }

    #[test]
    fn test_empty_category_renders_none() {
        let mut report = create_sample_report();
        report.subjects[0].assignments.clear();
        report.subjects[0].tests.clear();

        let csv = render_report_csv(&[report]).unwrap();
        assert!(csv.contains("Mathematics,None,None,End of Term Exam (60.0/80)"));
    }

    #[test]
    fn test_report_without_subjects_skips_table() {
        let mut report = create_sample_report();
        report.subjects.clear();
        report.overall_total = Decimal::ZERO;
        report.overall_average_pct = Decimal::ZERO;

        let csv = render_report_csv(&[report]).unwrap();
        assert!(!csv.contains("SUBJECT-WISE PERFORMANCE"));
        assert!(csv.contains("Total Score:,0.00"));
    }

    #[test]
    fn test_unfiltered_session_and_term_render_na() {
        let mut report = create_sample_report();
        report.session = String::new();
        report.term = String::new();

        let csv = render_report_csv(&[report]).unwrap();
        assert!(csv.contains("Session:,N/A"));
        assert!(csv.contains("Term:,N/A"));
    }

    #[test]
    fn test_missing_position_renders_na() {
        let mut report = create_sample_report();
        report.position = None;

        let csv = render_report_csv(&[report]).unwrap();
        assert!(csv.contains("Class Position:,N/A"));
    }

    #[test]
    fn test_empty_report_list_renders_title_only() {
        let csv = render_report_csv(&[]).unwrap();

        assert_eq!(csv, "Report Card - Termly Assessment Results\n\n");
    }

    #[test]
    fn test_two_learners_render_two_blocks() {
        let first = create_sample_report();
        let mut second = create_sample_report();
        second.learner.id = "lrn_002".to_string();
        second.learner.first_name = "Msendoo".to_string();
        second.position = Some(2);

        let csv = render_report_csv(&[first, second]).unwrap();
        assert_eq!(csv.matches("LEARNER INFORMATION").count(), 2);
        assert!(csv.contains("Name:,Msendoo Adakole"));
        assert!(csv.contains("Class Position:,2nd"));
    }
}
