//! Typed calls for every REST endpoint.
//!
//! [`TicketsApi`] is the seam the query layer depends on; [`RestTicketsApi`]
//! implements it over [`HttpClient`] by delegating to the free functions in
//! [`tickets`] and [`users`].

pub mod tickets;
pub mod users;

use async_trait::async_trait;
use ticket_models::{Ticket, TicketId, User, UserId};

use crate::error::ClientError;
use crate::http::{HttpClient, RequestOptions};

/// Port over the tickets REST API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsApi: Send + Sync {
    /// Every ticket in store order.
    async fn get_tickets(&self, options: &RequestOptions) -> Result<Vec<Ticket>, ClientError>;

    /// One ticket by id.
    async fn get_ticket_by_id(
        &self,
        id: TicketId,
        options: &RequestOptions,
    ) -> Result<Ticket, ClientError>;

    /// Create an open, unassigned ticket.
    async fn create_ticket(
        &self,
        description: &str,
        options: &RequestOptions,
    ) -> Result<Ticket, ClientError>;

    /// Point a ticket at a user.
    async fn assign_user_to_ticket(
        &self,
        ticket_id: TicketId,
        user_id: UserId,
        options: &RequestOptions,
    ) -> Result<(), ClientError>;

    /// Clear a ticket's assignee.
    async fn unassign_user_from_ticket(
        &self,
        ticket_id: TicketId,
        options: &RequestOptions,
    ) -> Result<(), ClientError>;

    /// Mark a ticket completed.
    async fn mark_ticket_as_complete(
        &self,
        ticket_id: TicketId,
        options: &RequestOptions,
    ) -> Result<(), ClientError>;

    /// Reopen a ticket.
    async fn mark_ticket_as_incomplete(
        &self,
        ticket_id: TicketId,
        options: &RequestOptions,
    ) -> Result<(), ClientError>;

    /// The user directory.
    async fn get_users(&self, options: &RequestOptions) -> Result<Vec<User>, ClientError>;

    /// One user by id.
    async fn get_user_by_id(&self, id: UserId, options: &RequestOptions)
    -> Result<User, ClientError>;
}

/// [`TicketsApi`] backed by HTTP calls.
#[derive(Debug, Clone)]
pub struct RestTicketsApi {
    http: HttpClient,
}

impl RestTicketsApi {
    /// Wrap a configured transport.
    #[must_use]
    pub const fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl TicketsApi for RestTicketsApi {
    async fn get_tickets(&self, options: &RequestOptions) -> Result<Vec<Ticket>, ClientError> {
        tickets::get_tickets(&self.http, options).await
    }

    async fn get_ticket_by_id(
        &self,
        id: TicketId,
        options: &RequestOptions,
    ) -> Result<Ticket, ClientError> {
        tickets::get_ticket_by_id(&self.http, id, options).await
    }

    async fn create_ticket(
        &self,
        description: &str,
        options: &RequestOptions,
    ) -> Result<Ticket, ClientError> {
        tickets::create_ticket(&self.http, description, options).await
    }

    async fn assign_user_to_ticket(
        &self,
        ticket_id: TicketId,
        user_id: UserId,
        options: &RequestOptions,
    ) -> Result<(), ClientError> {
        tickets::assign_user_to_ticket(&self.http, ticket_id, user_id, options).await
    }

    async fn unassign_user_from_ticket(
        &self,
        ticket_id: TicketId,
        options: &RequestOptions,
    ) -> Result<(), ClientError> {
        tickets::unassign_user_from_ticket(&self.http, ticket_id, options).await
    }

    async fn mark_ticket_as_complete(
        &self,
        ticket_id: TicketId,
        options: &RequestOptions,
    ) -> Result<(), ClientError> {
        tickets::mark_ticket_as_complete(&self.http, ticket_id, options).await
    }

    async fn mark_ticket_as_incomplete(
        &self,
        ticket_id: TicketId,
        options: &RequestOptions,
    ) -> Result<(), ClientError> {
        tickets::mark_ticket_as_incomplete(&self.http, ticket_id, options).await
    }

    async fn get_users(&self, options: &RequestOptions) -> Result<Vec<User>, ClientError> {
        users::get_users(&self.http, options).await
    }

    async fn get_user_by_id(
        &self,
        id: UserId,
        options: &RequestOptions,
    ) -> Result<User, ClientError> {
        users::get_user_by_id(&self.http, id, options).await
    }
}
