use super::*;

#[test]
fn endpoint_is_origin_relative() {
    assert_eq!(endpoint("/api/schedule/exams"), "/api/schedule/exams");
}

#[test]
fn request_line_formats_method_and_path() {
    assert_eq!(request_line(Method::Delete, "/api/schedule/exams/e1"), "DELETE /api/schedule/exams/e1");
    assert_eq!(request_line(Method::Put, "/api/settings"), "PUT /api/settings");
}

#[test]
fn error_message_prefers_fastapi_detail_string() {
    let body = r#"{"detail":"Exam not found"}"#;
    assert_eq!(error_message_from_body(404, body), "Exam not found");
}

#[test]
fn error_message_joins_validation_detail_list() {
    let body = r#"{"detail":[{"loc":["body","date"],"msg":"field required"},{"loc":["body","name"],"msg":"field required"}]}"#;
    assert_eq!(error_message_from_body(422, body), "field required; field required");
}

#[test]
fn error_message_falls_back_to_message_then_error_keys() {
    assert_eq!(error_message_from_body(400, r#"{"message":"Empty payload"}"#), "Empty payload");
    assert_eq!(error_message_from_body(400, r#"{"error":"bad"}"#), "bad");
}

#[test]
fn error_message_falls_back_to_status_for_non_json_bodies() {
    assert_eq!(error_message_from_body(502, "<html>Bad Gateway</html>"), "request failed: 502");
    assert_eq!(error_message_from_body(500, ""), "request failed: 500");
    assert_eq!(error_message_from_body(500, r#"{"detail":""}"#), "request failed: 500");
}

#[test]
fn decode_body_treats_empty_text_as_null() {
    decode_body::<()>("").unwrap();
    let missing: Option<String> = decode_body("  ").unwrap();
    assert_eq!(missing, None);
}

#[test]
fn decode_body_reports_mismatched_shapes() {
    let err = decode_body::<Vec<String>>(r#"{"not":"a list"}"#).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn json_body_wraps_serialized_value() {
    let body = Body::json(&serde_json::json!({ "subject_id": "s1" })).unwrap();
    match body {
        Body::Json(value) => assert_eq!(value, serde_json::json!({ "subject_id": "s1" })),
        _ => panic!("expected json body"),
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn request_is_unavailable_without_browser_transport() {
    let result: Result<serde_json::Value, ApiError> =
        block_on(request(Method::Get, "/api/settings", Body::Empty));
    assert_eq!(result, Err(ApiError::Unavailable));
}

/// Minimal executor for futures that resolve without awaiting I/O.
#[cfg(not(feature = "hydrate"))]
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::task::{Context, Poll, Waker};

    let mut fut = std::pin::pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
