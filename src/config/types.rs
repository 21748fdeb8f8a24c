//! Configuration types for the Result Aggregation Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// School identity and current-period settings.
///
/// Loaded from `school.yaml`. The current session/term are the values the
/// entry screens preselect; the report handlers use them as filter defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct SchoolInfo {
    /// The school's display name, printed on report letterheads.
    pub name: String,
    /// The school's postal address.
    pub address: String,
    /// The academic session currently in progress (e.g., "2024/2025").
    pub current_session: String,
    /// The term currently in progress (e.g., "First Term").
    pub current_term: String,
}

/// A single band of the grading scale.
///
/// A percentage earns this band's letter when it is greater than or equal
/// to `threshold_pct` and no higher band matched first.
#[derive(Debug, Clone, Deserialize)]
pub struct GradeBand {
    /// Minimum percentage (inclusive) required to earn this band.
    pub threshold_pct: Decimal,
    /// The letter grade awarded (e.g., "A").
    pub letter: String,
    /// The remark printed alongside the letter (e.g., "Excellent").
    pub label: String,
}

/// The fallback grade awarded when no band's threshold is met.
#[derive(Debug, Clone, Deserialize)]
pub struct FallbackGrade {
    /// The fallback letter grade (e.g., "F").
    pub letter: String,
    /// The fallback remark (e.g., "Fail").
    pub label: String,
}

/// Grading scale configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct GradingScaleConfig {
    /// The graded bands, in any order; thresholds must be distinct.
    pub bands: Vec<GradeBand>,
    /// The grade awarded below every band threshold.
    pub fallback: FallbackGrade,
}

/// A validated grading scale.
///
/// Bands are held sorted descending by threshold so grade lookup is a
/// single forward scan. The scale is a read-only value injected into every
/// aggregation call; the engine never reads it from ambient state.
///
/// # Example
///
/// ```
/// use result_engine::config::{FallbackGrade, GradeBand, GradingScale};
/// use rust_decimal::Decimal;
///
/// let scale = GradingScale::new(
///     vec![GradeBand {
///         threshold_pct: Decimal::from(50),
///         letter: "P".to_string(),
///         label: "Pass".to_string(),
///     }],
///     FallbackGrade {
///         letter: "F".to_string(),
///         label: "Fail".to_string(),
///     },
/// )
/// .unwrap();
/// assert_eq!(scale.bands().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GradingScale {
    /// Bands sorted descending by threshold.
    bands: Vec<GradeBand>,
    /// The grade awarded when no band matches.
    fallback: FallbackGrade,
}

impl GradingScale {
    /// Creates a validated grading scale from its component parts.
    ///
    /// Bands may be supplied in any order; they are sorted descending by
    /// threshold here.
    ///
    /// # Errors
    ///
    /// Returns `InvalidGradingScale` if the band list is empty or two bands
    /// share a threshold (which band wins would otherwise depend on input
    /// order).
    pub fn new(bands: Vec<GradeBand>, fallback: FallbackGrade) -> EngineResult<Self> {
        if bands.is_empty() {
            return Err(EngineError::InvalidGradingScale {
                message: "no grade bands defined".to_string(),
            });
        }

        let mut sorted_bands = bands;
        sorted_bands.sort_by(|a, b| b.threshold_pct.cmp(&a.threshold_pct));

        for pair in sorted_bands.windows(2) {
            if pair[0].threshold_pct == pair[1].threshold_pct {
                return Err(EngineError::InvalidGradingScale {
                    message: format!(
                        "duplicate threshold {} for bands '{}' and '{}'",
                        pair[0].threshold_pct, pair[0].letter, pair[1].letter
                    ),
                });
            }
        }

        Ok(Self {
            bands: sorted_bands,
            fallback,
        })
    }

    /// Returns the bands sorted descending by threshold.
    pub fn bands(&self) -> &[GradeBand] {
        &self.bands
    }

    /// Returns the fallback grade.
    pub fn fallback(&self) -> &FallbackGrade {
        &self.fallback
    }
}

impl TryFrom<GradingScaleConfig> for GradingScale {
    type Error = EngineError;

    fn try_from(config: GradingScaleConfig) -> EngineResult<Self> {
        Self::new(config.bands, config.fallback)
    }
}
