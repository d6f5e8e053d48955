//! Adapter for `reqwest` responses.

use thiserror::Error;

use super::{canonical_reason, ResponseMetadata};
use crate::error::{handle_error_response, is_success_status, ClientError, ClientHttpError};

/// Error returned by [`error_for_response`].
#[derive(Error, Debug)]
pub enum ResponseError {
    /// The response was unsuccessful.
    #[error(transparent)]
    Http(#[from] ClientHttpError),

    /// The HTTP error could not be built.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The response body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}

impl ResponseMetadata {
    /// Captures the metadata of a `reqwest` response without consuming it.
    pub fn from_reqwest(response: &reqwest::Response) -> Self {
        let status = response.status().as_u16();
        Self {
            status,
            status_text: canonical_reason(status).to_owned(),
            url: response.url().to_string(),
            headers: response.headers().clone(),
        }
    }
}

/// Passes successful responses through and turns the others into errors.
///
/// Statuses from 200 to 399 are returned untouched. For any other status the
/// body is read once and handed to
/// [`handle_error_response`](crate::handle_error_response) with `message`.
pub async fn error_for_response(
    response: reqwest::Response,
    message: impl Into<String>,
) -> Result<reqwest::Response, ResponseError> {
    if is_success_status(response.status().as_u16()) {
        return Ok(response);
    }

    let metadata = ResponseMetadata::from_reqwest(&response);
    let body = response.text().await.map_err(ResponseError::Body)?;

    Err(handle_error_response(metadata, body, message)?.into())
}
