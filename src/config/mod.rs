//! Configuration loading and management for the Result Aggregation Engine.
//!
//! This module provides functionality to load engine configuration from YAML
//! files, including the school identity, the current session and term, and
//! the grading scale used to award letter grades.
//!
//! # Example
//!
//! ```no_run
//! use result_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/wajina").unwrap();
//! println!("Loaded school: {}", config.school().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{FallbackGrade, GradeBand, GradingScale, GradingScaleConfig, SchoolInfo};
