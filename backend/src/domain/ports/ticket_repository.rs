//! Driven port for ticket storage.
//!
//! Adapters own id allocation and apply each [`TicketMutation`] to a single
//! record atomically. They do not validate user references; the ticket
//! service checks those before asking for an assignment.

use async_trait::async_trait;

use crate::domain::{Ticket, TicketDescription, TicketId, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by ticket repository adapters.
    pub enum TicketRepositoryError {
        /// The backing store could not complete the operation.
        Storage { message: String } => "ticket store failed: {message}",
        /// No further identifiers can be allocated.
        IdsExhausted => "ticket identifiers exhausted",
    }
}

/// Single-record change applied by [`TicketRepository::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketMutation {
    /// Set the assignee.
    Assign(UserId),
    /// Clear the assignee.
    Unassign,
    /// Set the completion flag.
    SetCompleted(bool),
}

impl TicketMutation {
    /// Apply the change to `ticket` in place.
    pub fn apply(self, ticket: &mut Ticket) {
        match self {
            Self::Assign(user) => ticket.assign(user),
            Self::Unassign => ticket.unassign(),
            Self::SetCompleted(completed) => ticket.set_completed(completed),
        }
    }
}

/// Port for ticket persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// All tickets in insertion order.
    async fn list(&self) -> Result<Vec<Ticket>, TicketRepositoryError>;

    /// Fetch a ticket by identifier.
    async fn find_by_id(&self, id: TicketId) -> Result<Option<Ticket>, TicketRepositoryError>;

    /// Append an open, unassigned ticket with a freshly allocated id.
    async fn create(&self, description: TicketDescription)
    -> Result<Ticket, TicketRepositoryError>;

    /// Apply `mutation` to the ticket with `id`.
    ///
    /// Returns the updated ticket, or `None` when no such ticket exists.
    async fn update(
        &self,
        id: TicketId,
        mutation: TicketMutation,
    ) -> Result<Option<Ticket>, TicketRepositoryError>;
}
