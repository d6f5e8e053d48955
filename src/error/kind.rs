//! Registry of the well-known error statuses.

use std::fmt;

/// Status of [`HttpErrorKind::BadRequest`].
pub const BAD_REQUEST_STATUS: u16 = 400;
/// Status of [`HttpErrorKind::Unauthorized`].
pub const UNAUTHORIZED_STATUS: u16 = 401;
/// Status of [`HttpErrorKind::Forbidden`].
pub const FORBIDDEN_STATUS: u16 = 403;
/// Status of [`HttpErrorKind::NotFound`].
pub const NOT_FOUND_STATUS: u16 = 404;
/// Status of [`HttpErrorKind::MethodNotAllowed`].
pub const METHOD_NOT_ALLOWED_STATUS: u16 = 405;
/// Status of [`HttpErrorKind::NotAcceptable`].
pub const NOT_ACCEPTABLE_STATUS: u16 = 406;
/// Status of [`HttpErrorKind::Conflict`].
pub const CONFLICT_STATUS: u16 = 409;
/// Status of [`HttpErrorKind::Gone`].
pub const GONE_STATUS: u16 = 410;
/// Status of [`HttpErrorKind::PreconditionFailed`].
pub const PRECONDITION_FAILED_STATUS: u16 = 412;
/// Status of [`HttpErrorKind::UnsupportedMediaType`].
pub const UNSUPPORTED_MEDIA_TYPE_STATUS: u16 = 415;
/// Status of [`HttpErrorKind::TooManyRequests`].
pub const TOO_MANY_REQUESTS_STATUS: u16 = 429;
/// Status of [`HttpErrorKind::InternalServerError`].
pub const INTERNAL_SERVER_ERROR_STATUS: u16 = 500;

/// Kind of a [`ClientHttpError`](super::ClientHttpError), one per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpErrorKind {
    /// 400 Bad Request.
    BadRequest,
    /// 401 Unauthorized.
    Unauthorized,
    /// 403 Forbidden.
    Forbidden,
    /// 404 Not Found.
    NotFound,
    /// 405 Method Not Allowed.
    MethodNotAllowed,
    /// 406 Not Acceptable.
    NotAcceptable,
    /// 409 Conflict.
    Conflict,
    /// 410 Gone.
    Gone,
    /// 412 Precondition Failed.
    PreconditionFailed,
    /// 415 Unsupported Media Type.
    UnsupportedMediaType,
    /// 429 Too Many Requests.
    TooManyRequests,
    /// 500 Internal Server Error.
    InternalServerError,
    /// Any other status.
    Other,
}

impl HttpErrorKind {
    /// Every kind bound to a fixed status.
    pub const WELL_KNOWN: [HttpErrorKind; 12] = [
        Self::BadRequest,
        Self::Unauthorized,
        Self::Forbidden,
        Self::NotFound,
        Self::MethodNotAllowed,
        Self::NotAcceptable,
        Self::Conflict,
        Self::Gone,
        Self::PreconditionFailed,
        Self::UnsupportedMediaType,
        Self::TooManyRequests,
        Self::InternalServerError,
    ];

    /// Looks up the kind for a status. Only exact matches count; every other
    /// status, success codes included, maps to [`HttpErrorKind::Other`].
    pub fn from_status(status: u16) -> Self {
        match status {
            BAD_REQUEST_STATUS => Self::BadRequest,
            UNAUTHORIZED_STATUS => Self::Unauthorized,
            FORBIDDEN_STATUS => Self::Forbidden,
            NOT_FOUND_STATUS => Self::NotFound,
            METHOD_NOT_ALLOWED_STATUS => Self::MethodNotAllowed,
            NOT_ACCEPTABLE_STATUS => Self::NotAcceptable,
            CONFLICT_STATUS => Self::Conflict,
            GONE_STATUS => Self::Gone,
            PRECONDITION_FAILED_STATUS => Self::PreconditionFailed,
            UNSUPPORTED_MEDIA_TYPE_STATUS => Self::UnsupportedMediaType,
            TOO_MANY_REQUESTS_STATUS => Self::TooManyRequests,
            INTERNAL_SERVER_ERROR_STATUS => Self::InternalServerError,
            _ => Self::Other,
        }
    }

    /// The status this kind is bound to, `None` for [`HttpErrorKind::Other`].
    pub const fn status(self) -> Option<u16> {
        match self {
            Self::BadRequest => Some(BAD_REQUEST_STATUS),
            Self::Unauthorized => Some(UNAUTHORIZED_STATUS),
            Self::Forbidden => Some(FORBIDDEN_STATUS),
            Self::NotFound => Some(NOT_FOUND_STATUS),
            Self::MethodNotAllowed => Some(METHOD_NOT_ALLOWED_STATUS),
            Self::NotAcceptable => Some(NOT_ACCEPTABLE_STATUS),
            Self::Conflict => Some(CONFLICT_STATUS),
            Self::Gone => Some(GONE_STATUS),
            Self::PreconditionFailed => Some(PRECONDITION_FAILED_STATUS),
            Self::UnsupportedMediaType => Some(UNSUPPORTED_MEDIA_TYPE_STATUS),
            Self::TooManyRequests => Some(TOO_MANY_REQUESTS_STATUS),
            Self::InternalServerError => Some(INTERNAL_SERVER_ERROR_STATUS),
            Self::Other => None,
        }
    }
}

impl fmt::Display for HttpErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest => write!(f, "bad_request"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::Forbidden => write!(f, "forbidden"),
            Self::NotFound => write!(f, "not_found"),
            Self::MethodNotAllowed => write!(f, "method_not_allowed"),
            Self::NotAcceptable => write!(f, "not_acceptable"),
            Self::Conflict => write!(f, "conflict"),
            Self::Gone => write!(f, "gone"),
            Self::PreconditionFailed => write!(f, "precondition_failed"),
            Self::UnsupportedMediaType => write!(f, "unsupported_media_type"),
            Self::TooManyRequests => write!(f, "too_many_requests"),
            Self::InternalServerError => write!(f, "internal_server_error"),
            Self::Other => write!(f, "other"),
        }
    }
}
