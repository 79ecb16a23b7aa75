//! Query and mutation facade over [`TicketsApi`].
//!
//! Reads go through [`QueryCache`]; every mutation invalidates the whole
//! `tickets` prefix afterwards, whether or not it succeeded, so the next read
//! observes the server's state.

mod cache;
mod key;

pub use cache::QueryCache;
pub use key::{QueryDomain, QueryKey, QueryOperation, QueryPrefix};

use ticket_models::{StatusFilter, Ticket, TicketDescription, TicketId, User, UserId};
use tracing::{info, warn};

use crate::api::TicketsApi;
use crate::error::ClientError;
use crate::http::RequestOptions;

/// Validated input for [`Queries::create_ticket`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTicketRequest {
    /// Trimmed, non-empty description.
    pub description: TicketDescription,
    /// User to assign right after creation.
    pub assignee: Option<UserId>,
}

/// Cached reads plus invalidating mutations.
pub struct Queries<A> {
    api: A,
    cache: QueryCache,
}

impl<A: TicketsApi> Queries<A> {
    /// Facade over `api` with an empty cache.
    pub fn new(api: A) -> Self {
        Self {
            api,
            cache: QueryCache::new(),
        }
    }

    /// The underlying cache.
    pub const fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Tickets matching `filter`, in store order.
    ///
    /// The server has no filter parameter, so the full list is fetched and
    /// filtered here; each filter still caches under its own key.
    ///
    /// # Errors
    /// See [`ClientError`].
    pub async fn tickets(
        &self,
        filter: StatusFilter,
        options: &RequestOptions,
    ) -> Result<Vec<Ticket>, ClientError> {
        self.cache
            .fetch(QueryKey::ticket_list(filter), || async {
                let tickets = self.api.get_tickets(options).await?;
                Ok(filter.apply(tickets))
            })
            .await
    }

    /// One ticket.
    ///
    /// # Errors
    /// See [`ClientError`].
    pub async fn ticket(&self, id: TicketId, options: &RequestOptions) -> Result<Ticket, ClientError> {
        self.cache
            .fetch(QueryKey::ticket_details(id), || {
                self.api.get_ticket_by_id(id, options)
            })
            .await
    }

    /// The user directory.
    ///
    /// # Errors
    /// See [`ClientError`].
    pub async fn users(&self, options: &RequestOptions) -> Result<Vec<User>, ClientError> {
        self.cache
            .fetch(QueryKey::user_list(), || self.api.get_users(options))
            .await
    }

    /// One user.
    ///
    /// # Errors
    /// See [`ClientError`].
    pub async fn user(&self, id: UserId, options: &RequestOptions) -> Result<User, ClientError> {
        self.cache
            .fetch(QueryKey::user_details(id), || {
                self.api.get_user_by_id(id, options)
            })
            .await
    }

    /// Create a ticket, then assign it when the request names an assignee.
    ///
    /// The two calls are independent: when assignment fails the ticket stays
    /// created and unassigned, and the assignment error is returned.
    ///
    /// # Errors
    /// Returns the creation error, or the assignment error after a
    /// successful creation.
    pub async fn create_ticket(
        &self,
        request: &NewTicketRequest,
        options: &RequestOptions,
    ) -> Result<Ticket, ClientError> {
        let result = self.create_then_assign(request, options).await;
        self.invalidate_tickets().await;
        result
    }

    async fn create_then_assign(
        &self,
        request: &NewTicketRequest,
        options: &RequestOptions,
    ) -> Result<Ticket, ClientError> {
        let ticket = self
            .api
            .create_ticket(request.description.as_str(), options)
            .await?;
        info!(ticket_id = %ticket.id(), "ticket created");

        let Some(assignee) = request.assignee else {
            return Ok(ticket);
        };
        match self
            .api
            .assign_user_to_ticket(ticket.id(), assignee, options)
            .await
        {
            Ok(()) => Ok(ticket.with_assignee(Some(assignee))),
            Err(error) => {
                warn!(
                    ticket_id = %ticket.id(),
                    user_id = %assignee,
                    %error,
                    "ticket created but assignment failed"
                );
                Err(error)
            }
        }
    }

    /// Assign `assignee`, or unassign when `None`.
    ///
    /// # Errors
    /// See [`ClientError`].
    pub async fn change_assignee(
        &self,
        id: TicketId,
        assignee: Option<UserId>,
        options: &RequestOptions,
    ) -> Result<(), ClientError> {
        let result = match assignee {
            Some(user) => self.api.assign_user_to_ticket(id, user, options).await,
            None => self.api.unassign_user_from_ticket(id, options).await,
        };
        self.invalidate_tickets().await;
        result
    }

    /// Mark complete or reopen.
    ///
    /// # Errors
    /// See [`ClientError`].
    pub async fn set_completed(
        &self,
        id: TicketId,
        completed: bool,
        options: &RequestOptions,
    ) -> Result<(), ClientError> {
        let result = if completed {
            self.api.mark_ticket_as_complete(id, options).await
        } else {
            self.api.mark_ticket_as_incomplete(id, options).await
        };
        self.invalidate_tickets().await;
        result
    }

    async fn invalidate_tickets(&self) {
        self.cache.invalidate(&QueryPrefix::TICKETS).await;
    }
}

#[cfg(test)]
mod tests;
