//! HTTP request handlers for the Result Aggregation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::aggregation::{assemble, ReportFilters};
use crate::error::{EngineError, EngineResult};
use crate::models::{Learner, ReportBatch};
use crate::render::render_report_csv;
use crate::store::AssessmentStore;

use super::request::ReportRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/reports", post(reports_handler))
        .route("/reports/csv", post(reports_csv_handler))
        .with_state(state)
}

/// Handler for the POST /reports endpoint.
///
/// Accepts a report request and returns the assembled report batch as JSON.
async fn reports_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match build_report_batch(&state, request) {
        Ok(batch) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                batch_id = %batch.batch_id,
                reports_count = batch.reports.len(),
                duration_us = duration.as_micros(),
                "Report batch assembled"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(batch),
            )
                .into_response()
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for the POST /reports/csv endpoint.
///
/// Accepts the same request body as `/reports` and returns the batch
/// rendered as a CSV attachment instead of JSON.
async fn reports_csv_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing CSV report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match build_report_batch(&state, request) {
        Ok(batch) => match render_report_csv(&batch.reports) {
            Ok(csv) => {
                let duration = start_time.elapsed();
                info!(
                    correlation_id = %correlation_id,
                    batch_id = %batch.batch_id,
                    reports_count = batch.reports.len(),
                    duration_us = duration.as_micros(),
                    "CSV report batch rendered"
                );
                (
                    StatusCode::OK,
                    [
                        (header::CONTENT_TYPE, "text/csv"),
                        (
                            header::CONTENT_DISPOSITION,
                            "attachment; filename=\"report_cards.csv\"",
                        ),
                    ],
                    csv,
                )
                    .into_response()
            }
            Err(err) => engine_error_response(correlation_id, err),
        },
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Assembles the report batch for one request.
fn build_report_batch(state: &AppState, request: ReportRequest) -> EngineResult<ReportBatch> {
    let school = state.config().school();
    let scale = state.config().grading_scale();
    let filters = request.resolve(school);

    let learners = resolve_learners(state.store(), &filters)?;
    let reports = assemble(state.store(), &learners, scale, &filters)?;

    Ok(ReportBatch {
        batch_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        school_name: school.name.clone(),
        school_address: school.address.clone(),
        class_name: filters.class_name.clone(),
        session: filters.session.clone().unwrap_or_default(),
        term: filters.term.clone().unwrap_or_default(),
        reports,
    })
}

/// Resolves the cohort of learners a request covers.
///
/// A class filter selects the class roster, and the roster stays whole
/// even when a single learner is requested, because class positions are
/// ranked against every classmate. Without a class filter a requested
/// learner is looked up directly; failing that, every learner is in scope.
fn resolve_learners(
    store: &dyn AssessmentStore,
    filters: &ReportFilters,
) -> EngineResult<Vec<Learner>> {
    match (&filters.class_name, &filters.single_learner_id) {
        (Some(class_name), _) if !class_name.is_empty() => store.learners_in_class(class_name),
        (_, Some(learner_id)) => Ok(vec![store.learner(learner_id)?]),
        _ => store.all_learners(),
    }
}

/// Maps a JSON extraction rejection onto a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::validation_error(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Maps an engine error onto its HTTP error response.
fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Report request failed"
    );
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::{AssessmentCategory, AssessmentRecord};
    use crate::store::MemoryStore;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_learner(id: &str, first_name: &str, last_name: &str) -> Learner {
        Learner {
            id: id.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            admission_number: format!("WIS/24/{}", id),
            class_name: "JSS1A".to_string(),
        }
    }

    fn create_test_record(
        learner_id: &str,
        category: AssessmentCategory,
        name: &str,
        score: &str,
        max_score: u32,
    ) -> AssessmentRecord {
        AssessmentRecord {
            id: format!("asm_{}_{}", learner_id, name),
            learner_id: learner_id.to_string(),
            subject_id: "math".to_string(),
            category,
            name: name.to_string(),
            score: dec(score),
            max_score,
            session: "2024/2025".to_string(),
            term: "First Term".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 11, 8).unwrap(),
        }
    }

    /// Two JSS1A learners with First Term Math records. lrn_001 also has
    /// one record from the previous session, which only an explicit empty
    /// session filter lets back in.
    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/wajina").expect("Failed to load config");

        let mut store = MemoryStore::new();
        store.set_subject_name("math", "Mathematics");
        store.add_learner(create_test_learner("lrn_001", "Terngu", "Adakole"));
        store.add_learner(create_test_learner("lrn_002", "Msendoo", "Iorfa"));

        store.add_assessment(create_test_record(
            "lrn_001",
            AssessmentCategory::Assignment,
            "Homework 1",
            "18",
            20,
        ));
        store.add_assessment(create_test_record(
            "lrn_001",
            AssessmentCategory::Test,
            "Test 1",
            "25",
            30,
        ));
        store.add_assessment(create_test_record(
            "lrn_001",
            AssessmentCategory::Exam,
            "End of Term Exam",
            "60",
            80,
        ));
        store.add_assessment(create_test_record(
            "lrn_002",
            AssessmentCategory::Exam,
            "End of Term Exam",
            "40",
            100,
        ));

        let mut stale =
            create_test_record("lrn_001", AssessmentCategory::Exam, "Old Exam", "10", 10);
        stale.session = "2023/2024".to_string();
        stale.term = "Third Term".to_string();
        store.add_assessment(stale);

        AppState::new(config, store)
    }

    async fn read_batch(response: Response) -> ReportBatch {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    async fn read_error(response: Response) -> ApiError {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_api_001_class_request_returns_200() {
        let state = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/reports")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"class_name": "JSS1A"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        // Verify Content-Type header
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let batch = read_batch(response).await;
        assert_eq!(batch.school_name, "Wajina International School");
        assert_eq!(batch.school_address, "Makurdi, Benue State, Nigeria");
        assert_eq!(batch.class_name.as_deref(), Some("JSS1A"));
        assert_eq!(batch.reports.len(), 2);
    }

    #[tokio::test]
    async fn test_api_002_absent_period_defaults_to_current() {
        let state = create_test_state();
        let router = create_router(state);

        // The request names no session or term.
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/reports")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"class_name": "JSS1A"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        let batch = read_batch(response).await;
        assert_eq!(batch.session, "2024/2025");
        assert_eq!(batch.term, "First Term");

        // The stale 2023/2024 record stays out of lrn_001's totals.
        let l1 = &batch.reports[0];
        assert_eq!(l1.learner.id, "lrn_001");
        assert_eq!(l1.overall_total, dec("103"));
        assert_eq!(l1.overall_average_pct, dec("79.23"));
        assert_eq!(l1.overall_grade.letter, "A");
        assert_eq!(l1.overall_grade.label, "Excellent");
        assert_eq!(l1.position, Some(1));

        let l2 = &batch.reports[1];
        assert_eq!(l2.overall_total, dec("40"));
        assert_eq!(l2.overall_grade.letter, "F");
        assert_eq!(l2.position, Some(2));
    }

    #[tokio::test]
    async fn test_api_003_empty_period_filters_pool_every_record() {
        let state = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/reports")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"class_name": "JSS1A", "session": "", "term": ""}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        let batch = read_batch(response).await;
        assert_eq!(batch.session, "");
        assert_eq!(batch.term, "");

        // 113/140 once the 2023/2024 exam is pooled back in.
        let l1 = &batch.reports[0];
        assert_eq!(l1.overall_total, dec("113"));
        assert_eq!(l1.overall_average_pct, dec("80.71"));
    }

    #[tokio::test]
    async fn test_api_004_empty_request_covers_every_learner() {
        let state = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/reports")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let batch = read_batch(response).await;
        assert!(batch.class_name.is_none());
        assert_eq!(batch.session, "2024/2025");
        assert_eq!(batch.reports.len(), 2);
        assert!(batch.reports.iter().all(|r| r.position.is_none()));
    }

    #[tokio::test]
    async fn test_api_005_single_learner_keeps_class_position() {
        let state = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/reports")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"class_name": "JSS1A", "learner_id": "lrn_002"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        let batch = read_batch(response).await;
        assert_eq!(batch.reports.len(), 1);
        assert_eq!(batch.reports[0].learner.id, "lrn_002");
        // Second of two, even though lrn_001's report was not returned.
        assert_eq!(batch.reports[0].position, Some(2));
    }

    #[tokio::test]
    async fn test_api_006_learner_without_class_has_no_position() {
        let state = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/reports")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"learner_id": "lrn_001"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        let batch = read_batch(response).await;
        assert_eq!(batch.reports.len(), 1);
        assert_eq!(batch.reports[0].learner.id, "lrn_001");
        assert!(batch.reports[0].position.is_none());
        assert_eq!(batch.reports[0].overall_total, dec("103"));
    }

    #[tokio::test]
    async fn test_api_007_malformed_json_returns_400() {
        let state = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/reports")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error = read_error(response).await;
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_008_wrong_field_type_returns_400() {
        let state = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/reports")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"class_name": 42}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error = read_error(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(
            error.message.contains("class_name"),
            "Expected error message to mention class_name, got: {}",
            error.message
        );
    }

    #[tokio::test]
    async fn test_api_009_unknown_class_returns_404() {
        let state = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/reports")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"class_name": "JSS9Z"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let error = read_error(response).await;
        assert_eq!(error.code, "UNKNOWN_CLASS");
        assert!(error.message.contains("JSS9Z"));
    }

    #[tokio::test]
    async fn test_api_010_unknown_learner_returns_404() {
        let state = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/reports")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"learner_id": "lrn_404"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let error = read_error(response).await;
        assert_eq!(error.code, "UNKNOWN_LEARNER");
    }

    #[tokio::test]
    async fn test_api_011_missing_content_type_returns_400() {
        let state = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/reports")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error = read_error(response).await;
        assert_eq!(error.code, "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_csv_endpoint_returns_attachment() {
        let state = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/reports/csv")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"class_name": "JSS1A"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "text/csv");
        let disposition = response.headers().get("content-disposition").unwrap();
        assert_eq!(disposition, "attachment; filename=\"report_cards.csv\"");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let csv = String::from_utf8(body.to_vec()).unwrap();
        assert!(csv.starts_with("Report Card - Termly Assessment Results"));
        assert!(csv.contains("Name:,Terngu Adakole"));
        assert!(csv.contains("Total Score:,103.00"));
        assert!(csv.contains("Class Position:,1st"));
    }

    #[tokio::test]
    async fn test_csv_endpoint_shares_error_mapping() {
        let state = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/reports/csv")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"class_name": "JSS9Z"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let error = read_error(response).await;
        assert_eq!(error.code, "UNKNOWN_CLASS");
    }
}
