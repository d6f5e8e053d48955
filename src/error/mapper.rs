//! Maps an unsuccessful response to the matching [`ClientHttpError`] variant.

use super::http::ClientHttpError;
use super::kind::HttpErrorKind;
use super::types::ClientResult;
use crate::response::ResponseMetadata;

/// Builds the [`ClientHttpError`] variant matching the response status.
///
/// Statuses without a dedicated variant produce [`ClientHttpError::Other`].
/// No range check happens before the lookup, so a success status reaches the
/// generic constructor and is rejected there with
/// [`ClientError::SuccessfulResponse`](super::ClientError::SuccessfulResponse).
///
/// ```
/// use http::header::{HeaderValue, CONTENT_TYPE};
/// use integrations_http_errors::{handle_error_response, ClientHttpError, ResponseMetadata};
///
/// let metadata = ResponseMetadata::new(404, "Not Found", "https://example.org/resource")
///     .with_header(CONTENT_TYPE, HeaderValue::from_static("application/problem+json"));
/// let body = r#"{"title":"Not Found","status":404,"detail":"No resource at this URL"}"#;
///
/// let error = handle_error_response(metadata, body, "Fetching the resource failed").unwrap();
///
/// assert!(matches!(error, ClientHttpError::NotFound { .. }));
/// assert_eq!(error.problem_details().detail(), Some("No resource at this URL"));
/// ```
pub fn handle_error_response(
    metadata: ResponseMetadata,
    body: impl Into<String>,
    message: impl Into<String>,
) -> ClientResult<ClientHttpError> {
    let kind = HttpErrorKind::from_status(metadata.status);

    tracing::debug!(
        status = metadata.status,
        kind = %kind,
        url = %metadata.url,
        "Mapping HTTP error response"
    );

    ClientHttpError::with_kind(kind, metadata, body, message)
}
