//! Response fixtures for tests.

use http::header::{HeaderValue, CONTENT_TYPE};

use crate::problem_details::PROBLEM_DETAILS_MIME;
use crate::response::{canonical_reason, ResponseMetadata};

/// URL used by every fixture.
pub const MOCK_URL: &str = "https://example.org/resource";

/// Metadata with the canonical status text, [`MOCK_URL`] and no headers.
pub fn mock_metadata(status: u16) -> ResponseMetadata {
    ResponseMetadata::new(status, canonical_reason(status), MOCK_URL)
}

/// Same as [`mock_metadata`] with an `application/problem+json` content type.
pub fn mock_problem_metadata(status: u16) -> ResponseMetadata {
    mock_metadata(status).with_header(CONTENT_TYPE, HeaderValue::from_static(PROBLEM_DETAILS_MIME))
}

/// Serializes a problem details body from its members.
pub fn mock_problem_body(
    problem_type: Option<&str>,
    title: &str,
    status: u16,
    detail: Option<&str>,
    instance: Option<&str>,
) -> String {
    let mut body = serde_json::Map::new();
    if let Some(problem_type) = problem_type {
        body.insert("type".to_string(), problem_type.into());
    }
    body.insert("title".to_string(), title.into());
    body.insert("status".to_string(), status.into());
    if let Some(detail) = detail {
        body.insert("detail".to_string(), detail.into());
    }
    if let Some(instance) = instance {
        body.insert("instance".to_string(), instance.into());
    }
    serde_json::Value::Object(body).to_string()
}
