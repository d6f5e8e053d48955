//! Error types and the status-to-variant mapping.

mod guards;
mod http;
mod kind;
mod mapper;
mod types;

pub use self::guards::{
    find_http_error, has_error_response, has_problem_details, WithErrorResponse,
    WithProblemDetails,
};
pub use self::http::{ClientHttpError, HttpFailure};
pub use self::kind::*;
pub use self::mapper::handle_error_response;
pub use self::types::{ClientError, ClientResult};

pub(crate) use self::types::is_success_status;
