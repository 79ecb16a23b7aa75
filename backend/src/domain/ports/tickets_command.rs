//! Driving port for ticket mutations.
//!
//! Mutations on a ticket or user that does not exist fail with
//! `unprocessable_entity` and leave the store unchanged. Each successful call
//! returns the ticket as stored afterwards.

use async_trait::async_trait;

use crate::domain::{Error, NewTicket, Ticket, TicketId, UserId};

/// Domain use-case port for creating and changing tickets.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsCommand: Send + Sync {
    /// Create an open, unassigned ticket.
    ///
    /// Blank descriptions are rejected with `invalid_request`.
    async fn create_ticket(&self, request: NewTicket) -> Result<Ticket, Error>;

    /// Assign `user` to `ticket`. Both must exist.
    async fn assign(&self, ticket: TicketId, user: UserId) -> Result<Ticket, Error>;

    /// Clear the assignee. Succeeds when already unassigned.
    async fn unassign(&self, ticket: TicketId) -> Result<Ticket, Error>;

    /// Mark the ticket complete or incomplete.
    async fn set_completed(&self, ticket: TicketId, completed: bool) -> Result<Ticket, Error>;
}
