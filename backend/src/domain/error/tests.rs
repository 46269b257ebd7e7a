//! Tests for domain error construction and serde round trips.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn trace_id() -> TraceId {
    TRACE_ID.parse().expect("fixture trace id is a valid UUID")
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::conflict("clash"), ErrorCode::Conflict)]
#[case(Error::service_unavailable("db down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
#[case("")]
#[case("   ")]
fn try_new_rejects_blank_messages(#[case] message: &str) {
    let result = Error::try_new(ErrorCode::InvalidRequest, message);
    assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
}

#[rstest]
fn try_with_trace_id_rejects_blank_values() {
    let result = Error::invalid_request("bad").try_with_trace_id("  ");
    assert_eq!(result, Err(ErrorValidationError::EmptyTraceId));
}

#[rstest]
#[tokio::test]
async fn try_new_captures_ambient_trace_id(trace_id: TraceId) {
    let error = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
#[tokio::test]
async fn deserialisation_ignores_ambient_trace_id(trace_id: TraceId) {
    let payload = json!({ "code": "not_found", "message": "missing" });
    let error: Error = TraceId::scope(trace_id, async move {
        serde_json::from_value(payload).expect("payload deserialises")
    })
    .await;
    assert!(error.trace_id().is_none());
}

#[rstest]
fn serialises_camel_case_envelope() {
    let error = Error::invalid_request("userId1 must not be empty")
        .with_trace_id(TRACE_ID)
        .with_details(json!({ "field": "userId1" }));

    let value = serde_json::to_value(&error).expect("error serialises");
    assert_eq!(
        value,
        json!({
            "code": "invalid_request",
            "message": "userId1 must not be empty",
            "traceId": TRACE_ID,
            "details": { "field": "userId1" },
        })
    );
}

#[rstest]
fn deserialisation_rejects_blank_message() {
    let payload = json!({ "code": "internal_error", "message": " " });
    let result = serde_json::from_value::<Error>(payload);
    assert!(result.is_err());
}
