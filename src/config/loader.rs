//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading school and
//! grading configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{GradingScale, GradingScaleConfig, SchoolInfo};

/// Loads and provides access to engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides access to the school identity and the validated grading scale.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/wajina/
/// ├── school.yaml   # School identity and current session/term
/// └── grading.yaml  # Grade bands and fallback grade
/// ```
///
/// # Example
///
/// ```no_run
/// use result_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/wajina").unwrap();
///
/// println!("School: {}", loader.school().name);
/// println!("Bands: {}", loader.grading_scale().bands().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    school: SchoolInfo,
    grading_scale: GradingScale,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/wajina")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either required file is missing
    /// - Either file contains invalid YAML
    /// - The grading scale fails validation
    ///
    /// # Example
    ///
    /// ```no_run
    /// use result_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/wajina")?;
    /// # Ok::<(), result_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load school.yaml
        let school_path = path.join("school.yaml");
        let school = Self::load_yaml::<SchoolInfo>(&school_path)?;

        // Load grading.yaml and validate the scale
        let grading_path = path.join("grading.yaml");
        let raw_scale = Self::load_yaml::<GradingScaleConfig>(&grading_path)?;
        let grading_scale = GradingScale::try_from(raw_scale)?;

        Ok(Self {
            school,
            grading_scale,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the school identity and current-period settings.
    pub fn school(&self) -> &SchoolInfo {
        &self.school
    }

    /// Returns the validated grading scale.
    pub fn grading_scale(&self) -> &GradingScale {
        &self.grading_scale
    }
}
