//! Ticket domain service.
//!
//! Implements [`TicketsQuery`] and [`TicketsCommand`] over a ticket store and
//! the user directory. Assignments check the user before touching the ticket
//! so a failed assignment never changes stored state.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{
    TicketMutation, TicketRepository, TicketRepositoryError, TicketsCommand, TicketsQuery,
    UserRepository, UserRepositoryError,
};
use crate::domain::{Error, NewTicket, Ticket, TicketDescription, TicketId, UserId};

/// Ticket service implementing the ticket driving ports.
#[derive(Clone)]
pub struct TicketService<T, U> {
    tickets: Arc<T>,
    users: Arc<U>,
}

impl<T, U> TicketService<T, U> {
    /// Create a service over the given stores.
    pub fn new(tickets: Arc<T>, users: Arc<U>) -> Self {
        Self { tickets, users }
    }
}

impl<T, U> TicketService<T, U>
where
    T: TicketRepository,
    U: UserRepository,
{
    fn map_ticket_error(error: TicketRepositoryError) -> Error {
        match error {
            TicketRepositoryError::Storage { message } => {
                Error::internal(format!("ticket repository error: {message}"))
            }
            TicketRepositoryError::IdsExhausted => {
                Error::internal("ticket identifiers exhausted")
            }
        }
    }

    fn map_user_error(error: UserRepositoryError) -> Error {
        match error {
            UserRepositoryError::Storage { message } => {
                Error::internal(format!("user repository error: {message}"))
            }
        }
    }

    fn unknown_ticket(id: TicketId) -> Error {
        Error::unprocessable_entity(format!("ticket {id} does not exist"))
            .with_details(json!({ "ticketId": id.get(), "code": "unknown_ticket" }))
    }

    fn unknown_user(id: UserId) -> Error {
        Error::unprocessable_entity(format!("user {id} does not exist"))
            .with_details(json!({ "userId": id.get(), "code": "unknown_user" }))
    }

    async fn mutate(&self, id: TicketId, mutation: TicketMutation) -> Result<Ticket, Error> {
        let updated = self
            .tickets
            .update(id, mutation)
            .await
            .map_err(Self::map_ticket_error)?
            .ok_or_else(|| Self::unknown_ticket(id))?;
        debug!(ticket_id = %id, ?mutation, "ticket updated");
        Ok(updated)
    }
}

#[async_trait]
impl<T, U> TicketsQuery for TicketService<T, U>
where
    T: TicketRepository,
    U: UserRepository,
{
    async fn list_tickets(&self) -> Result<Vec<Ticket>, Error> {
        self.tickets.list().await.map_err(Self::map_ticket_error)
    }

    async fn get_ticket(&self, id: TicketId) -> Result<Ticket, Error> {
        self.tickets
            .find_by_id(id)
            .await
            .map_err(Self::map_ticket_error)?
            .ok_or_else(|| Error::not_found(format!("ticket {id} not found")))
    }
}

#[async_trait]
impl<T, U> TicketsCommand for TicketService<T, U>
where
    T: TicketRepository,
    U: UserRepository,
{
    async fn create_ticket(&self, request: NewTicket) -> Result<Ticket, Error> {
        let description = TicketDescription::new(&request.description).map_err(|err| {
            Error::invalid_request(err.to_string())
                .with_details(json!({ "field": "description", "code": "empty_description" }))
        })?;
        let ticket = self
            .tickets
            .create(description)
            .await
            .map_err(Self::map_ticket_error)?;
        info!(ticket_id = %ticket.id(), "ticket created");
        Ok(ticket)
    }

    async fn assign(&self, ticket: TicketId, user: UserId) -> Result<Ticket, Error> {
        self.users
            .find_by_id(user)
            .await
            .map_err(Self::map_user_error)?
            .ok_or_else(|| Self::unknown_user(user))?;
        self.mutate(ticket, TicketMutation::Assign(user)).await
    }

    async fn unassign(&self, ticket: TicketId) -> Result<Ticket, Error> {
        self.mutate(ticket, TicketMutation::Unassign).await
    }

    async fn set_completed(&self, ticket: TicketId, completed: bool) -> Result<Ticket, Error> {
        self.mutate(ticket, TicketMutation::SetCompleted(completed))
            .await
    }
}

#[cfg(test)]
#[path = "ticket_service_tests.rs"]
mod tests;
