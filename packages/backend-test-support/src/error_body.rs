//! Error body test helpers for backend testing
//!
//! The API reports failures as `{"error": "..."}` (single message) or
//! `{"errors": ["...", ...]}` (validation lists). These helpers assert that
//! contract without depending on backend types.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::HeaderName;
use serde_json::Value;

/// Assert a single-message error response: status, `error` field, and the
/// `x-trace-id` header being present.
pub async fn assert_error_body(
    resp: ServiceResponse<BoxBody>,
    expected_status: u16,
    expected_error: &str,
) {
    assert_eq!(resp.status().as_u16(), expected_status);

    let headers = resp.headers().clone();
    let trace_hdr = HeaderName::from_static("x-trace-id");
    assert!(
        headers.get(&trace_hdr).is_some(),
        "x-trace-id header should be present on error responses"
    );

    let body: Value = actix_web::test::read_body_json(resp).await;
    let error = body["error"]
        .as_str()
        .expect("error field should be a string");
    assert_eq!(error, expected_error);
}

/// Assert a validation error response carrying a list of messages.
/// `expected_contains` must each appear somewhere in the `errors` array.
pub async fn assert_validation_errors(
    resp: ServiceResponse<BoxBody>,
    expected_contains: &[&str],
) {
    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = actix_web::test::read_body_json(resp).await;
    let errors = body["errors"]
        .as_array()
        .expect("errors field should be an array");
    let messages: Vec<&str> = errors.iter().filter_map(|v| v.as_str()).collect();

    for expected in expected_contains {
        assert!(
            messages.iter().any(|m| m.contains(expected)),
            "expected validation message containing '{expected}', got {messages:?}"
        );
    }
}
