//! Result Aggregation Engine for termly school report cards
//!
//! This crate provides functionality for aggregating assignment, test, and exam
//! records into termly report cards: per-subject totals, overall averages, letter
//! grades against a configurable grading scale, and class positions.

#![warn(missing_docs)]

pub mod aggregation;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod store;
