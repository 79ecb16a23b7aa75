//! Driving port for reading tickets.
//!
//! Inbound adapters use this port to list and fetch tickets without knowing
//! which store backs them.

use async_trait::async_trait;

use crate::domain::{Error, Ticket, TicketId};

/// Domain use-case port for ticket reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsQuery: Send + Sync {
    /// All tickets in creation order.
    async fn list_tickets(&self) -> Result<Vec<Ticket>, Error>;

    /// A single ticket, or a `not_found` error.
    async fn get_ticket(&self, id: TicketId) -> Result<Ticket, Error>;
}
