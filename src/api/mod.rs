//! HTTP API module for the Result Aggregation Engine.
//!
//! This module provides the REST API endpoints for assembling termly
//! report cards as JSON or CSV.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ReportRequest;
pub use response::ApiError;
pub use state::AppState;
