//! Rendering of domain [`Error`]s as JSON HTTP responses.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use tracing::{debug, error};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

impl ErrorCode {
    /// HTTP status reported for this code.
    pub fn http_status(self) -> StatusCode {
        match self {
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Body sent to clients: internal failures lose their message and details
/// but keep the trace so logs can be correlated.
fn public_body(error: &Error) -> Error {
    match error.code() {
        ErrorCode::InternalError => Error::new(ErrorCode::InternalError, "")
            .with_trace_id(error.trace_id().unwrap_or_default()),
        _ => error.clone(),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        self.code().http_status()
    }

    fn error_response(&self) -> HttpResponse {
        if self.code() == ErrorCode::InternalError {
            error!(error = %self, trace_id = ?self.trace_id(), "request failed");
        }
        let mut response = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            response.insert_header((TRACE_ID_HEADER, id));
        }
        response.json(public_body(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "unexpected framework error");
        Error::new(ErrorCode::InternalError, "")
    }
}

fn reject_body(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "malformed JSON body");
    Error::invalid_request(format!("invalid JSON body: {err}")).into()
}

/// Extractor config that reports unreadable JSON bodies as
/// `invalid_request` payloads.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(reject_body)
}
