//! Failures reported by the ticket and user services.
//!
//! [`Error`] knows nothing about HTTP; the inbound adapter decides status
//! codes and redaction from its [`ErrorCode`].

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::TraceId;

/// Response header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

/// Failure category, serialised as `snake_case`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Malformed identifier or body, or a blank description.
    InvalidRequest,
    /// A read addressed a ticket or user that does not exist.
    NotFound,
    /// A mutation addressed a ticket or user that does not exist.
    UnprocessableEntity,
    /// Storage failure or exhausted identifiers.
    InternalError,
}

impl ErrorCode {
    /// Message used when an error is raised without one.
    #[must_use]
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::InvalidRequest => "Invalid request",
            Self::NotFound => "Not found",
            Self::UnprocessableEntity => "Unprocessable entity",
            Self::InternalError => "Internal server error",
        }
    }
}

/// Service failure with an optional request trace and structured details.
///
/// Every constructor records [`TraceId::current`], so an error raised while a
/// request is in flight carries that request's trace without the caller
/// passing it along.
///
/// # Examples
/// ```
/// use tickets_backend::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("ticket 99 not found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(Error::new(ErrorCode::NotFound, "  ").message(), "Not found");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ErrorPayload", into = "ErrorPayload")]
pub struct Error {
    code: ErrorCode,
    message: String,
    trace_id: Option<String>,
    details: Option<Value>,
}

/// Why a serialised error payload was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorValidationError {
    /// `message` was blank.
    #[error("error message must not be empty")]
    EmptyMessage,
    /// `traceId` was present but blank.
    #[error("trace identifier must not be empty")]
    EmptyTraceId,
}

impl Error {
    /// Raise an error of kind `code`; a blank message falls back to
    /// [`ErrorCode::default_message`].
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            code.default_message().to_owned()
        } else {
            message
        };
        Self {
            code,
            message,
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    /// [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// [`ErrorCode::UnprocessableEntity`].
    pub fn unprocessable_entity(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UnprocessableEntity, message)
    }

    /// [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Trace of the request that raised the error, if any.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Replace the recorded trace; a blank id clears it.
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        let trace_id = trace_id.into();
        self.trace_id = (!trace_id.trim().is_empty()).then_some(trace_id);
        self
    }

    /// Attach structured details, e.g. the offending field.
    ///
    /// ```
    /// use serde_json::json;
    /// use tickets_backend::domain::Error;
    ///
    /// let err = Error::invalid_request("bad id").with_details(json!({ "field": "id" }));
    /// assert_eq!(err.details(), Some(&json!({ "field": "id" })));
    /// ```
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

/// Wire shape of [`Error`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorPayload {
    code: ErrorCode,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl From<Error> for ErrorPayload {
    fn from(error: Error) -> Self {
        Self {
            code: error.code,
            message: error.message,
            trace_id: error.trace_id,
            details: error.details,
        }
    }
}

impl TryFrom<ErrorPayload> for Error {
    type Error = ErrorValidationError;

    // Decoded payloads keep their own trace rather than the ambient one.
    fn try_from(payload: ErrorPayload) -> Result<Self, Self::Error> {
        if payload.message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        if payload
            .trace_id
            .as_deref()
            .is_some_and(|id| id.trim().is_empty())
        {
            return Err(ErrorValidationError::EmptyTraceId);
        }
        Ok(Self {
            code: payload.code,
            message: payload.message,
            trace_id: payload.trace_id,
            details: payload.details,
        })
    }
}
