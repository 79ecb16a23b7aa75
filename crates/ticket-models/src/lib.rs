//! Ticket and user model shared by the tickets server and client.
//!
//! Both sides of the HTTP boundary speak the same JSON shape, so the types
//! live here rather than being duplicated:
//!
//! - [`User`]: `{ "id": 1, "name": "Alice" }`
//! - [`Ticket`]: `{ "id": 4, "description": "…", "assigneeId": null, "completed": false }`
//! - [`NewTicket`]: request body for ticket creation.
//! - [`StatusFilter`]: completion filter applied to ticket lists.
//!
//! Constructors validate their invariants; serde deserialisation goes through
//! the same validation so malformed payloads never produce a model value.

mod filter;
mod ticket;
mod user;

pub use filter::{StatusFilter, StatusFilterParseError};
pub use ticket::{NewTicket, Ticket, TicketDescription, TicketId, TicketValidationError};
pub use user::{User, UserId, UserName, UserValidationError};
