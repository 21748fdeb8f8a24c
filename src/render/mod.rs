//! Rendering sinks for assembled reports.
//!
//! Sinks consume the [`LearnerReport`](crate::models::LearnerReport)
//! structure as-is and never recompute grades, totals, or positions. Only
//! the CSV sink lives in this crate; the interactive view consumes the
//! JSON form of the same structure and PDF generation is owned by an
//! external collaborator.

mod csv;

pub use csv::render_report_csv;
