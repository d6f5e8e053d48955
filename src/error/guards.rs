//! Access to the response and problem details of arbitrary errors.
//!
//! Useful when a [`ClientHttpError`] travels inside a boxed or wrapping
//! error: the helpers walk the `source()` chain looking for one.

use std::error::Error as StdError;

use super::http::{ClientHttpError, HttpFailure};
use crate::problem_details::ProblemDetails;
use crate::response::ErrorResponse;

/// Errors linked to an unsuccessful HTTP response.
pub trait WithErrorResponse {
    /// The unsuccessful response.
    fn error_response(&self) -> &ErrorResponse;
}

/// Errors linked to RFC 9457 problem details.
pub trait WithProblemDetails {
    /// The problem details.
    fn problem_details(&self) -> &ProblemDetails;
}

impl WithErrorResponse for HttpFailure {
    fn error_response(&self) -> &ErrorResponse {
        self.response()
    }
}

impl WithProblemDetails for HttpFailure {
    fn problem_details(&self) -> &ProblemDetails {
        HttpFailure::problem_details(self)
    }
}

impl WithErrorResponse for ClientHttpError {
    fn error_response(&self) -> &ErrorResponse {
        self.failure().response()
    }
}

impl WithProblemDetails for ClientHttpError {
    fn problem_details(&self) -> &ProblemDetails {
        self.failure().problem_details()
    }
}

/// Finds the first [`ClientHttpError`] in `error` or its sources.
pub fn find_http_error<'a>(error: &'a (dyn StdError + 'static)) -> Option<&'a ClientHttpError> {
    let mut current = Some(error);
    while let Some(candidate) = current {
        if let Some(found) = downcast_http_error(candidate) {
            return Some(found);
        }
        current = candidate.source();
    }
    None
}

#[cfg(feature = "reqwest")]
fn downcast_http_error<'a>(error: &'a (dyn StdError + 'static)) -> Option<&'a ClientHttpError> {
    use crate::response::ResponseError;

    error.downcast_ref::<ClientHttpError>().or_else(|| {
        match error.downcast_ref::<ResponseError>() {
            Some(ResponseError::Http(inner)) => Some(inner),
            _ => None,
        }
    })
}

#[cfg(not(feature = "reqwest"))]
fn downcast_http_error<'a>(error: &'a (dyn StdError + 'static)) -> Option<&'a ClientHttpError> {
    error.downcast_ref::<ClientHttpError>()
}

/// Returns the error response attached to `error`, if any.
pub fn has_error_response<'a>(error: &'a (dyn StdError + 'static)) -> Option<&'a ErrorResponse> {
    find_http_error(error).map(WithErrorResponse::error_response)
}

/// Returns the problem details attached to `error`, if any.
///
/// ```
/// use integrations_http_errors::{handle_error_response, has_problem_details, ResponseMetadata};
///
/// let metadata = ResponseMetadata::new(403, "Forbidden", "https://example.org/admin");
/// let error: Box<dyn std::error::Error> =
///     Box::new(handle_error_response(metadata, "", "Access denied").unwrap());
///
/// let details = has_problem_details(&*error).unwrap();
/// assert_eq!(details.status(), 403);
/// ```
pub fn has_problem_details<'a>(error: &'a (dyn StdError + 'static)) -> Option<&'a ProblemDetails> {
    find_http_error(error).map(WithProblemDetails::problem_details)
}
