//! RFC 9457 problem details attached to every [`ClientHttpError`](crate::ClientHttpError).
//!
//! A response body is only read as problem details when the response carries
//! the `application/problem+json` content type. Each member is validated on
//! its own: a member with the wrong JSON shape is dropped and replaced by its
//! default, while the other members are kept. Building problem details never
//! fails.
//!
//! # Wire format
//!
//! ```json
//! {
//!   "type": "https://example.org/problems/out-of-credit",
//!   "title": "You do not have enough credit.",
//!   "status": 403,
//!   "detail": "Your current balance is 30, but that costs 50.",
//!   "instance": "/account/12345/msgs/abc"
//! }
//! ```

use http::header::CONTENT_TYPE;
use once_cell::sync::Lazy;
use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::response::ErrorResponse;

/// Media type identifying an RFC 9457 problem details body.
pub const PROBLEM_DETAILS_MIME: &str = "application/problem+json";

/// Problem type used when the response does not provide one.
pub const DEFAULT_TYPE: &str = "about:blank";

#[allow(clippy::expect_used)]
static DEFAULT_TYPE_URL: Lazy<Url> =
    Lazy::new(|| Url::parse(DEFAULT_TYPE).expect("about:blank is an absolute URL"));

/// Returns [`DEFAULT_TYPE`] as a parsed URL.
pub fn default_type() -> Url {
    DEFAULT_TYPE_URL.clone()
}

/// Structured description of the problem behind an error response.
///
/// Read-only once built; there is no way to change a member afterwards:
///
/// ```compile_fail,E0616
/// use integrations_http_errors::{handle_error_response, ResponseMetadata};
///
/// let metadata = ResponseMetadata::new(500, "Internal Server Error", "https://example.org");
/// let error = handle_error_response(metadata, "", "Request failed").unwrap();
/// error.problem_details().title = String::from("Fine");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    problem_type: Url,
    title: String,
    status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    instance: Option<Url>,
}

impl ProblemDetails {
    /// The problem type, [`DEFAULT_TYPE`] unless the response provided one.
    pub fn problem_type(&self) -> &Url {
        &self.problem_type
    }

    /// Short summary of the problem.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// HTTP status code reported for this occurrence.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Explanation specific to this occurrence.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// URL identifying this occurrence.
    pub fn instance(&self) -> Option<&Url> {
        self.instance.as_ref()
    }

    /// Returns true if the problem type is [`DEFAULT_TYPE`].
    pub fn has_default_type(&self) -> bool {
        self.problem_type.as_str() == DEFAULT_TYPE
    }

    /// Builds problem details from an error response.
    ///
    /// Members found in a conforming body win; anything missing falls back to
    /// the response: `type` to [`DEFAULT_TYPE`], `title` to the status text and
    /// `status` to the response status. `detail` and `instance` stay absent.
    pub(crate) fn from_response(response: &ErrorResponse) -> Self {
        let wire = WireProblemDetails::from_response(response).unwrap_or_default();
        let base = Url::parse(response.url()).ok();
        let resolve = |reference: Option<String>| -> Option<Url> {
            let reference = reference?;
            base.as_ref()?.join(&reference).ok()
        };

        Self {
            problem_type: resolve(wire.problem_type).unwrap_or_else(default_type),
            title: wire
                .title
                .unwrap_or_else(|| response.status_text().to_owned()),
            status: wire.status.unwrap_or(response.status()),
            detail: wire.detail,
            instance: resolve(wire.instance),
        }
    }
}

/// Problem details members as found on the wire.
///
/// Every member is optional and shape-checked independently.
#[derive(Debug, Default, Deserialize)]
struct WireProblemDetails {
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    problem_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient_status")]
    status: Option<u16>,
    #[serde(default, deserialize_with = "lenient")]
    detail: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    instance: Option<String>,
}

impl WireProblemDetails {
    fn from_response(response: &ErrorResponse) -> Option<Self> {
        let content_type = response.header(CONTENT_TYPE.as_str());
        if content_type.as_deref() != Some(PROBLEM_DETAILS_MIME) {
            tracing::trace!(
                status = response.status(),
                content_type = ?content_type,
                "Response is not problem details, applying defaults"
            );
            return None;
        }

        match serde_json::from_str::<Value>(response.body()) {
            Ok(value @ Value::Object(_)) => serde_json::from_value(value).ok(),
            Ok(_) => {
                tracing::debug!(
                    status = response.status(),
                    "Problem details body is not a JSON object, applying defaults"
                );
                None
            }
            Err(err) => {
                tracing::debug!(
                    status = response.status(),
                    error = %err,
                    "Malformed problem details body, applying defaults"
                );
                None
            }
        }
    }
}

/// Deserializes a member, turning a value of the wrong shape into `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// Deserializes `status` from any JSON number holding an integer in `u16` range.
fn lenient_status<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = match Value::deserialize(deserializer)? {
        Value::Number(number) => number,
        _ => return Ok(None),
    };

    let status = match number.as_u64() {
        Some(integer) => u16::try_from(integer).ok(),
        None => number
            .as_f64()
            .filter(|float| float.fract() == 0.0 && (0.0..=f64::from(u16::MAX)).contains(float))
            .map(|float| float as u16),
    };
    Ok(status)
}
