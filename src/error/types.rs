//! Library error raised when an HTTP error cannot be built.

use thiserror::Error;

use super::kind::HttpErrorKind;

/// Result type alias for fallible construction.
pub type ClientResult<T> = Result<T, ClientError>;

/// Misuse of the library, as opposed to the HTTP failure being modelled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// An HTTP error was requested for a response in the success range.
    #[error("A ClientHttpError cannot be built from a success response, got {status} {status_text}")]
    SuccessfulResponse {
        /// Status of the offending response.
        status: u16,
        /// Status text of the offending response.
        status_text: String,
    },

    /// A status-specific error was requested for a response with another status.
    #[error("Unexpected status found building {kind} error: expected {expected}, found {found}")]
    UnexpectedStatus {
        /// Kind that was requested.
        kind: HttpErrorKind,
        /// Status bound to that kind.
        expected: u16,
        /// Status of the response.
        found: u16,
    },
}

/// Returns true for statuses an HTTP error must never wrap (200 to 399).
pub(crate) fn is_success_status(status: u16) -> bool {
    (200..400).contains(&status)
}
