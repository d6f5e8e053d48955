//! Response metadata supplied by callers and the sealed error response built from it.
//!
//! The crate never performs network I/O. Callers hand over the parts of a
//! response they already received (status, status text, headers, url) together
//! with the body text they already drained.

#[cfg(feature = "reqwest")]
mod reqwest;

#[cfg(feature = "reqwest")]
pub use self::reqwest::{error_for_response, ResponseError};

use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::StatusCode;

/// Subset of an HTTP response used to classify a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseMetadata {
    /// HTTP status code.
    pub status: u16,
    /// Reason phrase sent with the status line.
    pub status_text: String,
    /// Final URL of the response, used as base for relative problem URLs.
    pub url: String,
    /// Response headers.
    pub headers: HeaderMap,
}

impl ResponseMetadata {
    /// Creates metadata without headers.
    pub fn new(status: u16, status_text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            url: url.into(),
            headers: HeaderMap::new(),
        }
    }

    /// Appends a header, keeping any existing values for the same name.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Replaces all headers.
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Builds metadata from the head of an `http` response.
    ///
    /// `http::Response` does not carry its URL, so it has to be supplied.
    /// The status text is the canonical reason phrase, or empty for
    /// non-standard codes.
    pub fn from_parts(parts: &http::response::Parts, url: impl Into<String>) -> Self {
        Self {
            status: parts.status.as_u16(),
            status_text: canonical_reason(parts.status.as_u16()).to_owned(),
            url: url.into(),
            headers: parts.headers.clone(),
        }
    }
}

/// Returns the canonical reason phrase for a status code, or `""`.
pub(crate) fn canonical_reason(status: u16) -> &'static str {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or_default()
}

/// Relevant details of an unsuccessful HTTP response.
///
/// Values of this type are only created while building a
/// [`ClientHttpError`](crate::ClientHttpError) and are never mutated afterwards.
/// Fields are private and every accessor hands out shared references:
///
/// ```compile_fail,E0616
/// use integrations_http_errors::{handle_error_response, ResponseMetadata};
///
/// let metadata = ResponseMetadata::new(404, "Not Found", "https://example.org/resource");
/// let error = handle_error_response(metadata, "", "Lookup failed").unwrap();
/// error.response().status = 200;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    status: u16,
    status_text: String,
    url: String,
    headers: HeaderMap,
    body: String,
}

impl ErrorResponse {
    pub(crate) fn new(metadata: ResponseMetadata, body: String) -> Self {
        let ResponseMetadata {
            status,
            status_text,
            url,
            headers,
        } = metadata;
        Self {
            status,
            status_text,
            url,
            headers,
            body,
        }
    }

    /// HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Reason phrase sent with the status line.
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Final URL of the response.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw response body text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Always `false`: an error response is never successful.
    pub fn ok(&self) -> bool {
        false
    }

    /// Returns the value of a header, combining repeated values with `", "`.
    ///
    /// Values that are not visible ASCII are skipped. Returns `None` when no
    /// usable value is present.
    pub fn header(&self, name: &str) -> Option<String> {
        let values: Vec<&str> = self
            .headers
            .get_all(name)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect();

        if values.is_empty() {
            None
        } else {
            Some(values.join(", "))
        }
    }
}
