//! # HTTP client errors with problem details
//!
//! Turns unsuccessful HTTP responses into typed errors carrying
//! [RFC 9457](https://www.rfc-editor.org/rfc/rfc9457) problem details, so
//! calling code can branch on the failure without re-reading status codes.
//!
//! ## Features
//!
//! - One error variant per well-known status, plus a generic fallback
//! - Problem details parsed from `application/problem+json` bodies, with
//!   per-member fallback to defaults for malformed payloads
//! - Read-only response and problem details on every error
//! - Optional adapter for `reqwest` responses (feature `reqwest`)
//!
//! ## Quick Start
//!
//! ```rust
//! use integrations_http_errors::{handle_error_response, ClientHttpError, ResponseMetadata};
//!
//! let metadata = ResponseMetadata::new(429, "Too Many Requests", "https://example.org/items");
//! let error = handle_error_response(metadata, "slow down", "Listing items failed")?;
//!
//! if let ClientHttpError::TooManyRequests { 0: failure, .. } = &error {
//!     assert_eq!(failure.problem_details().title(), "Too Many Requests");
//! }
//! assert!(error.to_string().contains("Listing items failed"));
//! # Ok::<(), integrations_http_errors::ClientError>(())
//! ```
//!
//! ## Module Organization
//!
//! - `response` - Response metadata and the sealed error response
//! - `problem_details` - RFC 9457 problem details
//! - `error` - Error variants, status registry and dispatch

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod problem_details;
pub mod response;

// Fixtures shared by unit and integration tests
pub mod mocks;

pub use error::{
    find_http_error, handle_error_response, has_error_response, has_problem_details,
    ClientError, ClientHttpError, ClientResult, HttpErrorKind, HttpFailure, WithErrorResponse,
    WithProblemDetails, BAD_REQUEST_STATUS, CONFLICT_STATUS, FORBIDDEN_STATUS, GONE_STATUS,
    INTERNAL_SERVER_ERROR_STATUS, METHOD_NOT_ALLOWED_STATUS, NOT_ACCEPTABLE_STATUS,
    NOT_FOUND_STATUS, PRECONDITION_FAILED_STATUS, TOO_MANY_REQUESTS_STATUS,
    UNAUTHORIZED_STATUS, UNSUPPORTED_MEDIA_TYPE_STATUS,
};
pub use problem_details::{default_type, ProblemDetails, DEFAULT_TYPE, PROBLEM_DETAILS_MIME};
pub use response::{ErrorResponse, ResponseMetadata};

#[cfg(feature = "reqwest")]
pub use response::{error_for_response, ResponseError};
