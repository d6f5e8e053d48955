//! Typed errors for unsuccessful HTTP responses.

use std::fmt;
use std::time::Duration;

use http::header::RETRY_AFTER;
use thiserror::Error;

use super::kind::HttpErrorKind;
use super::types::{is_success_status, ClientError, ClientResult};
use crate::problem_details::ProblemDetails;
use crate::response::{ErrorResponse, ResponseMetadata};

/// Payload shared by every [`ClientHttpError`] variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpFailure {
    message: String,
    response: ErrorResponse,
    problem_details: ProblemDetails,
}

impl HttpFailure {
    fn new(metadata: ResponseMetadata, body: String, message: String) -> ClientResult<Self> {
        if is_success_status(metadata.status) {
            return Err(ClientError::SuccessfulResponse {
                status: metadata.status,
                status_text: metadata.status_text,
            });
        }

        let response = ErrorResponse::new(metadata, body);
        let problem_details = ProblemDetails::from_response(&response);

        Ok(Self {
            message,
            response,
            problem_details,
        })
    }

    /// Message supplied by the caller.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The unsuccessful response.
    pub fn response(&self) -> &ErrorResponse {
        &self.response
    }

    /// Problem details derived from the response.
    pub fn problem_details(&self) -> &ProblemDetails {
        &self.problem_details
    }
}

impl fmt::Display for HttpFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Error returned for an unsuccessful HTTP response.
///
/// Each well-known status has its own variant; any other status is
/// [`ClientHttpError::Other`]. Every variant carries the response and the
/// problem details derived from it.
///
/// Variants are matched with braces since they can only be built by the
/// constructors, which check the status:
///
/// ```
/// use integrations_http_errors::{handle_error_response, ClientHttpError, ResponseMetadata};
///
/// let metadata = ResponseMetadata::new(404, "Not Found", "https://example.org/resource");
/// let error = handle_error_response(metadata, "", "Could not load resource").unwrap();
///
/// match &error {
///     ClientHttpError::NotFound { 0: failure, .. } => {
///         assert_eq!(failure.problem_details().title(), "Not Found");
///     }
///     other => panic!("unexpected error: {other}"),
/// }
/// ```
///
/// A payload cannot be moved into a variant bound to another status:
///
/// ```compile_fail
/// use integrations_http_errors::{handle_error_response, ClientHttpError, ResponseMetadata};
///
/// let metadata = ResponseMetadata::new(500, "Internal Server Error", "https://example.org");
/// let error = handle_error_response(metadata, "", "Request failed").unwrap();
/// let forged = ClientHttpError::NotFound(error.into_failure());
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientHttpError {
    /// 400 Bad Request.
    #[error("{0}")]
    #[non_exhaustive]
    BadRequest(HttpFailure),
    /// 401 Unauthorized.
    #[error("{0}")]
    #[non_exhaustive]
    Unauthorized(HttpFailure),
    /// 403 Forbidden.
    #[error("{0}")]
    #[non_exhaustive]
    Forbidden(HttpFailure),
    /// 404 Not Found.
    #[error("{0}")]
    #[non_exhaustive]
    NotFound(HttpFailure),
    /// 405 Method Not Allowed.
    #[error("{0}")]
    #[non_exhaustive]
    MethodNotAllowed(HttpFailure),
    /// 406 Not Acceptable.
    #[error("{0}")]
    #[non_exhaustive]
    NotAcceptable(HttpFailure),
    /// 409 Conflict.
    #[error("{0}")]
    #[non_exhaustive]
    Conflict(HttpFailure),
    /// 410 Gone.
    #[error("{0}")]
    #[non_exhaustive]
    Gone(HttpFailure),
    /// 412 Precondition Failed.
    #[error("{0}")]
    #[non_exhaustive]
    PreconditionFailed(HttpFailure),
    /// 415 Unsupported Media Type.
    #[error("{0}")]
    #[non_exhaustive]
    UnsupportedMediaType(HttpFailure),
    /// 429 Too Many Requests.
    #[error("{0}")]
    #[non_exhaustive]
    TooManyRequests(HttpFailure),
    /// 500 Internal Server Error.
    #[error("{0}")]
    #[non_exhaustive]
    InternalServerError(HttpFailure),
    /// Any other unsuccessful status.
    #[error("{0}")]
    #[non_exhaustive]
    Other(HttpFailure),
}

impl ClientHttpError {
    /// Creates the generic [`ClientHttpError::Other`] error.
    ///
    /// Accepts any status outside 200..=399, well-known ones included.
    pub fn new(
        metadata: ResponseMetadata,
        body: impl Into<String>,
        message: impl Into<String>,
    ) -> ClientResult<Self> {
        Self::with_kind(HttpErrorKind::Other, metadata, body, message)
    }

    /// Creates the variant for `kind`.
    ///
    /// Fails if the status is in the success range, or if `kind` is bound to
    /// a status and the response has a different one.
    pub fn with_kind(
        kind: HttpErrorKind,
        metadata: ResponseMetadata,
        body: impl Into<String>,
        message: impl Into<String>,
    ) -> ClientResult<Self> {
        if let Some(expected) = kind.status() {
            if !is_success_status(metadata.status) && metadata.status != expected {
                return Err(ClientError::UnexpectedStatus {
                    kind,
                    expected,
                    found: metadata.status,
                });
            }
        }

        let failure = HttpFailure::new(metadata, body.into(), message.into())?;
        Ok(Self::from_failure(kind, failure))
    }

    /// Creates a [`ClientHttpError::BadRequest`] from a 400 response.
    pub fn bad_request(
        metadata: ResponseMetadata,
        body: impl Into<String>,
        message: impl Into<String>,
    ) -> ClientResult<Self> {
        Self::with_kind(HttpErrorKind::BadRequest, metadata, body, message)
    }

    /// Creates a [`ClientHttpError::Unauthorized`] from a 401 response.
    pub fn unauthorized(
        metadata: ResponseMetadata,
        body: impl Into<String>,
        message: impl Into<String>,
    ) -> ClientResult<Self> {
        Self::with_kind(HttpErrorKind::Unauthorized, metadata, body, message)
    }

    /// Creates a [`ClientHttpError::Forbidden`] from a 403 response.
    pub fn forbidden(
        metadata: ResponseMetadata,
        body: impl Into<String>,
        message: impl Into<String>,
    ) -> ClientResult<Self> {
        Self::with_kind(HttpErrorKind::Forbidden, metadata, body, message)
    }

    /// Creates a [`ClientHttpError::NotFound`] from a 404 response.
    pub fn not_found(
        metadata: ResponseMetadata,
        body: impl Into<String>,
        message: impl Into<String>,
    ) -> ClientResult<Self> {
        Self::with_kind(HttpErrorKind::NotFound, metadata, body, message)
    }

    /// Creates a [`ClientHttpError::MethodNotAllowed`] from a 405 response.
    pub fn method_not_allowed(
        metadata: ResponseMetadata,
        body: impl Into<String>,
        message: impl Into<String>,
    ) -> ClientResult<Self> {
        Self::with_kind(HttpErrorKind::MethodNotAllowed, metadata, body, message)
    }

    /// Creates a [`ClientHttpError::NotAcceptable`] from a 406 response.
    pub fn not_acceptable(
        metadata: ResponseMetadata,
        body: impl Into<String>,
        message: impl Into<String>,
    ) -> ClientResult<Self> {
        Self::with_kind(HttpErrorKind::NotAcceptable, metadata, body, message)
    }

    /// Creates a [`ClientHttpError::Conflict`] from a 409 response.
    pub fn conflict(
        metadata: ResponseMetadata,
        body: impl Into<String>,
        message: impl Into<String>,
    ) -> ClientResult<Self> {
        Self::with_kind(HttpErrorKind::Conflict, metadata, body, message)
    }

    /// Creates a [`ClientHttpError::Gone`] from a 410 response.
    pub fn gone(
        metadata: ResponseMetadata,
        body: impl Into<String>,
        message: impl Into<String>,
    ) -> ClientResult<Self> {
        Self::with_kind(HttpErrorKind::Gone, metadata, body, message)
    }

    /// Creates a [`ClientHttpError::PreconditionFailed`] from a 412 response.
    pub fn precondition_failed(
        metadata: ResponseMetadata,
        body: impl Into<String>,
        message: impl Into<String>,
    ) -> ClientResult<Self> {
        Self::with_kind(HttpErrorKind::PreconditionFailed, metadata, body, message)
    }

    /// Creates a [`ClientHttpError::UnsupportedMediaType`] from a 415 response.
    pub fn unsupported_media_type(
        metadata: ResponseMetadata,
        body: impl Into<String>,
        message: impl Into<String>,
    ) -> ClientResult<Self> {
        Self::with_kind(HttpErrorKind::UnsupportedMediaType, metadata, body, message)
    }

    /// Creates a [`ClientHttpError::TooManyRequests`] from a 429 response.
    pub fn too_many_requests(
        metadata: ResponseMetadata,
        body: impl Into<String>,
        message: impl Into<String>,
    ) -> ClientResult<Self> {
        Self::with_kind(HttpErrorKind::TooManyRequests, metadata, body, message)
    }

    /// Creates a [`ClientHttpError::InternalServerError`] from a 500 response.
    pub fn internal_server_error(
        metadata: ResponseMetadata,
        body: impl Into<String>,
        message: impl Into<String>,
    ) -> ClientResult<Self> {
        Self::with_kind(HttpErrorKind::InternalServerError, metadata, body, message)
    }

    fn from_failure(kind: HttpErrorKind, failure: HttpFailure) -> Self {
        match kind {
            HttpErrorKind::BadRequest => Self::BadRequest(failure),
            HttpErrorKind::Unauthorized => Self::Unauthorized(failure),
            HttpErrorKind::Forbidden => Self::Forbidden(failure),
            HttpErrorKind::NotFound => Self::NotFound(failure),
            HttpErrorKind::MethodNotAllowed => Self::MethodNotAllowed(failure),
            HttpErrorKind::NotAcceptable => Self::NotAcceptable(failure),
            HttpErrorKind::Conflict => Self::Conflict(failure),
            HttpErrorKind::Gone => Self::Gone(failure),
            HttpErrorKind::PreconditionFailed => Self::PreconditionFailed(failure),
            HttpErrorKind::UnsupportedMediaType => Self::UnsupportedMediaType(failure),
            HttpErrorKind::TooManyRequests => Self::TooManyRequests(failure),
            HttpErrorKind::InternalServerError => Self::InternalServerError(failure),
            HttpErrorKind::Other => Self::Other(failure),
        }
    }

    /// Gets the error kind.
    pub fn kind(&self) -> HttpErrorKind {
        match self {
            Self::BadRequest(_) => HttpErrorKind::BadRequest,
            Self::Unauthorized(_) => HttpErrorKind::Unauthorized,
            Self::Forbidden(_) => HttpErrorKind::Forbidden,
            Self::NotFound(_) => HttpErrorKind::NotFound,
            Self::MethodNotAllowed(_) => HttpErrorKind::MethodNotAllowed,
            Self::NotAcceptable(_) => HttpErrorKind::NotAcceptable,
            Self::Conflict(_) => HttpErrorKind::Conflict,
            Self::Gone(_) => HttpErrorKind::Gone,
            Self::PreconditionFailed(_) => HttpErrorKind::PreconditionFailed,
            Self::UnsupportedMediaType(_) => HttpErrorKind::UnsupportedMediaType,
            Self::TooManyRequests(_) => HttpErrorKind::TooManyRequests,
            Self::InternalServerError(_) => HttpErrorKind::InternalServerError,
            Self::Other(_) => HttpErrorKind::Other,
        }
    }

    /// Gets the shared payload.
    pub fn failure(&self) -> &HttpFailure {
        match self {
            Self::BadRequest(failure)
            | Self::Unauthorized(failure)
            | Self::Forbidden(failure)
            | Self::NotFound(failure)
            | Self::MethodNotAllowed(failure)
            | Self::NotAcceptable(failure)
            | Self::Conflict(failure)
            | Self::Gone(failure)
            | Self::PreconditionFailed(failure)
            | Self::UnsupportedMediaType(failure)
            | Self::TooManyRequests(failure)
            | Self::InternalServerError(failure)
            | Self::Other(failure) => failure,
        }
    }

    /// Consumes the error, returning the shared payload.
    pub fn into_failure(self) -> HttpFailure {
        match self {
            Self::BadRequest(failure)
            | Self::Unauthorized(failure)
            | Self::Forbidden(failure)
            | Self::NotFound(failure)
            | Self::MethodNotAllowed(failure)
            | Self::NotAcceptable(failure)
            | Self::Conflict(failure)
            | Self::Gone(failure)
            | Self::PreconditionFailed(failure)
            | Self::UnsupportedMediaType(failure)
            | Self::TooManyRequests(failure)
            | Self::InternalServerError(failure)
            | Self::Other(failure) => failure,
        }
    }

    /// Message supplied by the caller.
    pub fn message(&self) -> &str {
        self.failure().message()
    }

    /// The unsuccessful response.
    pub fn response(&self) -> &ErrorResponse {
        self.failure().response()
    }

    /// Problem details derived from the response.
    pub fn problem_details(&self) -> &ProblemDetails {
        self.failure().problem_details()
    }

    /// HTTP status of the response.
    pub fn status(&self) -> u16 {
        self.response().status()
    }

    /// Returns true for 4xx statuses.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status())
    }

    /// Returns true for 5xx statuses.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status())
    }

    /// Returns true if repeating the request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self.status(), 408 | 429 | 500 | 502 | 503 | 504)
    }

    /// Returns the `Retry-After` delay, when given in seconds.
    pub fn retry_after(&self) -> Option<Duration> {
        self.response()
            .header(RETRY_AFTER.as_str())
            .and_then(|value| value.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{mock_metadata, mock_problem_metadata};
    use http::header::HeaderValue;

    #[test]
    fn test_generic_error_keeps_response() {
        let error = ClientHttpError::new(mock_metadata(499), "Some response body", "Some error message")
            .unwrap();

        assert_eq!(error.kind(), HttpErrorKind::Other);
        assert_eq!(error.status(), 499);
        assert_eq!(error.message(), "Some error message");
        assert_eq!(error.response().body(), "Some response body");
        assert_eq!(error.to_string(), "Some error message");
    }

    #[test]
    fn test_generic_error_accepts_well_known_status() {
        let error = ClientHttpError::new(mock_metadata(404), "", "message").unwrap();

        assert!(matches!(error, ClientHttpError::Other(_)));
    }

    #[test]
    fn test_success_range_is_rejected_before_status_match() {
        let result = ClientHttpError::not_found(mock_metadata(200), "", "message");

        assert!(matches!(
            result,
            Err(ClientError::SuccessfulResponse { status: 200, .. })
        ));
    }

    #[test]
    fn test_mismatched_status_is_rejected() {
        let result = ClientHttpError::not_found(mock_metadata(500), "", "message");

        assert_eq!(
            result.unwrap_err(),
            ClientError::UnexpectedStatus {
                kind: HttpErrorKind::NotFound,
                expected: 404,
                found: 500,
            }
        );
    }

    #[test]
    fn test_problem_details_are_built_on_construction() {
        let error = ClientHttpError::conflict(
            mock_problem_metadata(409),
            r#"{"title":"Version mismatch","detail":"ETag changed"}"#,
            "Update failed",
        )
        .unwrap();

        assert_eq!(error.problem_details().title(), "Version mismatch");
        assert_eq!(error.problem_details().status(), 409);
        assert_eq!(error.problem_details().detail(), Some("ETag changed"));
    }

    #[test]
    fn test_classification_helpers() {
        let not_found = ClientHttpError::not_found(mock_metadata(404), "", "m").unwrap();
        assert!(not_found.is_client_error());
        assert!(!not_found.is_server_error());
        assert!(!not_found.is_retryable());

        let unavailable = ClientHttpError::new(mock_metadata(503), "", "m").unwrap();
        assert!(unavailable.is_server_error());
        assert!(unavailable.is_retryable());
    }

    #[test]
    fn test_retry_after_seconds() {
        let metadata = mock_metadata(429).with_header(RETRY_AFTER, HeaderValue::from_static("120"));
        let error = ClientHttpError::too_many_requests(metadata, "", "Slow down").unwrap();

        assert_eq!(error.retry_after(), Some(Duration::from_secs(120)));
    }

    #[test]
    fn test_retry_after_http_date_is_ignored() {
        let metadata = mock_metadata(503).with_header(
            RETRY_AFTER,
            HeaderValue::from_static("Wed, 21 Oct 2015 07:28:00 GMT"),
        );
        let error = ClientHttpError::new(metadata, "", "Unavailable").unwrap();

        assert_eq!(error.retry_after(), None);
    }

    #[test]
    fn test_into_failure() {
        let error = ClientHttpError::gone(mock_metadata(410), "body", "Removed").unwrap();

        let failure = error.into_failure();

        assert_eq!(failure.message(), "Removed");
        assert_eq!(failure.response().status(), 410);
    }
}
