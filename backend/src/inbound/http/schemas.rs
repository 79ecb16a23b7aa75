//! OpenAPI mirrors of the wire types.
//!
//! `ticket-models` does not depend on utoipa, so each type gets a
//! schema-only twin here with the same JSON field names.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The referenced ticket or user does not exist.
    #[schema(rename = "unprocessable_entity")]
    UnprocessableEntity,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "fields are read by the ToSchema derive only"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "unprocessable_entity")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "user 42 does not exist")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Ticket`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Ticket)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "fields are read by the ToSchema derive only"
)]
pub struct TicketSchema {
    /// Stable ticket identifier.
    #[schema(example = 4)]
    id: u64,
    /// Work description, never blank.
    #[schema(example = "Configure keyboard shortcuts")]
    description: String,
    /// Assigned user, or `null`.
    #[schema(example = 2, nullable = true)]
    assignee_id: Option<u64>,
    /// Whether the work is done.
    completed: bool,
}

/// OpenAPI schema for [`crate::domain::NewTicket`].
#[derive(ToSchema)]
#[schema(as = crate::domain::NewTicket)]
#[expect(
    dead_code,
    reason = "fields are read by the ToSchema derive only"
)]
pub struct NewTicketSchema {
    /// Description of the work; surrounding whitespace is trimmed.
    #[schema(example = "Fix the lamp")]
    description: String,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "fields are read by the ToSchema derive only"
)]
pub struct UserSchema {
    /// Stable user identifier.
    #[schema(example = 1)]
    id: u64,
    /// Display name.
    #[schema(example = "Alice")]
    name: String,
}
