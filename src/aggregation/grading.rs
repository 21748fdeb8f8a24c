//! Grading scale lookup.
//!
//! This module maps percentage scores to letter grades against a
//! configurable scale of descending thresholds.

use rust_decimal::Decimal;

use crate::config::GradingScale;
use crate::models::GradeAssignment;

/// Determines the grade earned by a percentage score.
///
/// Scans the scale's bands in descending threshold order and returns the
/// first band whose threshold the percentage meets. A percentage below
/// every threshold earns the scale's fallback grade.
///
/// This is a total function: the percentage may be negative, zero, or
/// above 100 (upstream data is not validated against its maximum), and a
/// grade is always returned.
///
/// # Arguments
///
/// * `percentage` - The percentage score to grade
/// * `scale` - The grading scale to grade against
///
/// # Returns
///
/// The [`GradeAssignment`] for the first matching band, or the fallback.
///
/// # Example
///
/// ```
/// use result_engine::aggregation::grade_for;
/// use result_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/wajina").unwrap();
/// let scale = loader.grading_scale();
///
/// let grade = grade_for(Decimal::from(80), scale);
/// assert_eq!(grade.letter, "A");
/// assert_eq!(grade.label, "Excellent");
///
/// let grade = grade_for(Decimal::from(40), scale);
/// assert_eq!(grade.letter, "F");
/// ```
pub fn grade_for(percentage: Decimal, scale: &GradingScale) -> GradeAssignment {
    for band in scale.bands() {
        if percentage >= band.threshold_pct {
            return GradeAssignment {
                letter: band.letter.clone(),
                label: band.label.clone(),
            };
        }
    }

    GradeAssignment {
        letter: scale.fallback().letter.clone(),
        label: scale.fallback().label.clone(),
    }
}
