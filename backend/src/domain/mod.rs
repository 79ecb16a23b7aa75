//! Domain layer: errors, ports and the services behind the REST API.
//!
//! Model types (`Ticket`, `User`, identifiers) come from `ticket-models` and
//! are re-exported here so adapters depend on a single path.
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failure payload.
//! - [`TraceId`]: request correlation identifier.
//! - [`TicketService`] / [`UserService`]: driving port implementations.

pub mod error;
pub mod ports;
mod ticket_service;
pub mod trace_id;
mod user_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::ticket_service::TicketService;
pub use self::trace_id::TraceId;
pub use self::user_service::UserService;
pub use ticket_models::{
    NewTicket, Ticket, TicketDescription, TicketId, TicketValidationError, User, UserId,
    UserName, UserValidationError,
};

/// Convenient result alias for domain operations.
///
/// # Examples
/// ```
/// use tickets_backend::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::not_found("ticket 99 not found"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
