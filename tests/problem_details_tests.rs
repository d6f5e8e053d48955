//! Integration tests for problem details parsing and defaults.

use integrations_http_errors::mocks::{mock_metadata, mock_problem_body, mock_problem_metadata};
use integrations_http_errors::{
    handle_error_response, has_problem_details, ClientHttpError, ProblemDetails,
    ResponseMetadata, DEFAULT_TYPE,
};
use http::header::{HeaderValue, CONTENT_TYPE};
use pretty_assertions::assert_eq;
use url::Url;

fn problem_details_of(metadata: ResponseMetadata, body: &str) -> ProblemDetails {
    handle_error_response(metadata, body, "Some error message")
        .unwrap()
        .problem_details()
        .clone()
}

#[test]
fn test_relative_type_and_instance_resolve_against_response_url() {
    // Arrange
    let body = r#"{"type":"/type","title":"T","status":404,"detail":"D","instance":"/instance"}"#;

    // Act
    let details = problem_details_of(mock_problem_metadata(404), body);

    // Assert
    assert_eq!(details.problem_type().as_str(), "https://example.org/type");
    assert_eq!(details.title(), "T");
    assert_eq!(details.status(), 404);
    assert_eq!(details.detail(), Some("D"));
    assert_eq!(details.instance().map(Url::as_str), Some("https://example.org/instance"));
}

#[test]
fn test_absolute_urls_are_kept() {
    // Arrange
    let body = mock_problem_body(
        Some("https://errors.example.com/quota"),
        "Quota exceeded",
        429,
        Some("Try again tomorrow"),
        Some("https://errors.example.com/occurrences/42"),
    );

    // Act
    let details = problem_details_of(mock_problem_metadata(429), &body);

    // Assert
    assert_eq!(details.problem_type().as_str(), "https://errors.example.com/quota");
    assert_eq!(
        details.instance().map(Url::as_str),
        Some("https://errors.example.com/occurrences/42")
    );
}

#[test]
fn test_plain_text_response_gets_defaults() {
    // Arrange
    let metadata = mock_metadata(500)
        .with_header(CONTENT_TYPE, HeaderValue::from_static("text/plain"));

    // Act
    let details = problem_details_of(metadata, "Some response body");

    // Assert
    assert_eq!(details.problem_type().as_str(), DEFAULT_TYPE);
    assert_eq!(details.title(), "Internal Server Error");
    assert_eq!(details.status(), 500);
    assert_eq!(details.detail(), None);
    assert_eq!(details.instance(), None);
}

#[test]
fn test_missing_content_type_gets_defaults() {
    // Arrange
    let body = mock_problem_body(None, "Ignored", 418, Some("Ignored"), None);

    // Act
    let details = problem_details_of(mock_metadata(400), &body);

    // Assert
    assert!(details.has_default_type());
    assert_eq!(details.title(), "Bad Request");
    assert_eq!(details.status(), 400);
    assert_eq!(details.detail(), None);
}

#[test]
fn test_malformed_json_gets_defaults() {
    // Arrange
    let metadata = mock_problem_metadata(404);

    // Act
    let details = problem_details_of(metadata, "Not JSON");

    // Assert
    assert_eq!(details.problem_type().as_str(), DEFAULT_TYPE);
    assert_eq!(details.title(), "Not Found");
    assert_eq!(details.status(), 404);
    assert_eq!(details.detail(), None);
    assert_eq!(details.instance(), None);
}

#[test]
fn test_empty_body_gets_defaults() {
    // Arrange
    let metadata = mock_problem_metadata(410);

    // Act
    let details = problem_details_of(metadata, "");

    // Assert
    assert!(details.has_default_type());
    assert_eq!(details.title(), "Gone");
}

#[test]
fn test_optional_members_may_be_absent() {
    // Arrange
    let body = mock_problem_body(Some("https://example.org/problems/busy"), "Busy", 503, None, None);

    // Act
    let details = problem_details_of(mock_problem_metadata(503), &body);

    // Assert
    assert_eq!(details.problem_type().as_str(), "https://example.org/problems/busy");
    assert_eq!(details.title(), "Busy");
    assert_eq!(details.status(), 503);
    assert_eq!(details.detail(), None);
    assert_eq!(details.instance(), None);
}

#[test]
fn test_wrongly_typed_detail_is_dropped_alone() {
    for body in [r#"{"detail":7,"title":"T"}"#, r#"{"detail":{"text":"D"},"title":"T"}"#] {
        // Arrange
        let metadata = mock_problem_metadata(409);

        // Act
        let details = problem_details_of(metadata, body);

        // Assert
        assert_eq!(details.detail(), None, "body {body}");
        assert_eq!(details.title(), "T");
        assert_eq!(details.status(), 409);
        assert!(details.has_default_type());
    }
}

#[test]
fn test_payload_status_wins_over_response_status() {
    // Arrange
    let body = mock_problem_body(None, "Upstream failure", 502, None, None);

    // Act
    let details = problem_details_of(mock_problem_metadata(500), &body);

    // Assert
    assert_eq!(details.status(), 502);
}

#[test]
fn test_payload_status_in_float_form_wins() {
    // Arrange
    let body = r#"{"title":"Upstream failure","status":502.0}"#;

    // Act
    let details = problem_details_of(mock_problem_metadata(500), body);

    // Assert
    assert_eq!(details.status(), 502);
}

#[test]
fn test_unparsable_type_url_falls_back_to_default() {
    // Arrange
    let body = r#"{"type":"http://[invalid","title":"Broken type"}"#;

    // Act
    let details = problem_details_of(mock_problem_metadata(400), body);

    // Assert
    assert!(details.has_default_type());
    assert_eq!(details.title(), "Broken type");
}

#[test]
fn test_problem_details_reachable_through_boxed_error() {
    // Arrange
    let error: Box<dyn std::error::Error + Send + Sync> = Box::new(
        handle_error_response(mock_problem_metadata(412), r#"{"title":"Stale"}"#, "Update")
            .unwrap(),
    );

    // Act
    let details = has_problem_details(&*error).unwrap();

    // Assert
    assert_eq!(details.title(), "Stale");
}

#[test]
fn test_problem_details_serialize_to_wire_format() {
    // Arrange
    let body = r#"{"type":"/problems/conflict","title":"Conflict","status":409,"instance":"/log/7"}"#;
    let error = handle_error_response(mock_problem_metadata(409), body, "Save").unwrap();

    // Act
    let json = serde_json::to_value(error.problem_details()).unwrap();

    // Assert
    assert_eq!(
        json,
        serde_json::json!({
            "type": "https://example.org/problems/conflict",
            "title": "Conflict",
            "status": 409,
            "instance": "https://example.org/log/7"
        })
    );
}

#[test]
fn test_errors_are_independent_values() {
    // Arrange
    let first_body = r#"{"title":"A"}"#;
    let second_body = r#"{"title":"B"}"#;

    // Act
    let first = handle_error_response(mock_problem_metadata(404), first_body, "one").unwrap();
    let second = handle_error_response(mock_problem_metadata(404), second_body, "two").unwrap();

    // Assert
    assert!(matches!(first, ClientHttpError::NotFound { .. }));
    assert_eq!(first.problem_details().title(), "A");
    assert_eq!(second.problem_details().title(), "B");
    assert_ne!(first, second);
}
