//! Client-side error types.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Error payload returned by the server for non-2xx responses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    /// Stable machine-readable code such as `unprocessable_entity`.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Server-side correlation identifier.
    #[serde(default)]
    pub trace_id: Option<String>,
    /// Supplementary details, e.g. the offending field.
    #[serde(default)]
    pub details: Option<Value>,
}

/// Failure of a client call.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request was cancelled before a response arrived.
    #[error("request cancelled")]
    Cancelled,
    /// The request exceeded the configured timeout.
    #[error("request timed out: {message}")]
    Timeout {
        /// Transport detail.
        message: String,
    },
    /// Connection or protocol failure.
    #[error("transport failure: {message}")]
    Transport {
        /// Transport detail.
        message: String,
    },
    /// The server answered with a non-success status.
    #[error("{}", status_message(*status, body.as_deref()))]
    Status {
        /// HTTP status code.
        status: u16,
        /// Decoded error payload, when the body carried one.
        body: Option<Box<ApiErrorBody>>,
    },
    /// The response body did not match the expected shape.
    #[error("failed to decode response: {message}")]
    Decode {
        /// Decoder detail.
        message: String,
    },
    /// The base URL cannot carry endpoint paths.
    #[error("invalid base URL {url}: {message}")]
    InvalidUrl {
        /// Offending URL.
        url: String,
        /// Parser detail.
        message: String,
    },
}

fn status_message(status: u16, body: Option<&ApiErrorBody>) -> String {
    match body {
        Some(body) => format!("server returned {status} ({}): {}", body.code, body.message),
        None => format!("server returned {status}"),
    }
}

impl ClientError {
    /// Whether the call was abandoned through its cancellation token.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// HTTP status for [`ClientError::Status`] failures.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server error payload, if one was decoded.
    #[must_use]
    pub fn body(&self) -> Option<&ApiErrorBody> {
        match self {
            Self::Status { body, .. } => body.as_deref(),
            _ => None,
        }
    }

    pub(crate) fn from_reqwest(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout {
                message: error.to_string(),
            }
        } else if error.is_decode() {
            Self::Decode {
                message: error.to_string(),
            }
        } else {
            Self::Transport {
                message: error.to_string(),
            }
        }
    }

    pub(crate) fn from_status(status: u16, bytes: &[u8]) -> Self {
        Self::Status {
            status,
            body: serde_json::from_slice(bytes).ok().map(Box::new),
        }
    }
}
