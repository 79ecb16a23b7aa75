//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on driving ports and stay testable without a real store.

use std::sync::Arc;

use crate::domain::ports::{TicketsCommand, TicketsQuery, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Ticket reads.
    pub tickets: Arc<dyn TicketsQuery>,
    /// Ticket mutations.
    pub ticket_commands: Arc<dyn TicketsCommand>,
    /// User reads.
    pub users: Arc<dyn UsersQuery>,
}

impl HttpState {
    /// Construct state from port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use tickets_backend::domain::{TicketService, UserService};
    /// use tickets_backend::inbound::http::state::HttpState;
    /// use tickets_backend::outbound::memory::{InMemoryTicketRepository, InMemoryUserRepository};
    ///
    /// let users = Arc::new(InMemoryUserRepository::new(Vec::new()));
    /// let tickets = Arc::new(TicketService::new(
    ///     Arc::new(InMemoryTicketRepository::empty()),
    ///     users.clone(),
    /// ));
    /// let state = HttpState::new(tickets.clone(), tickets, Arc::new(UserService::new(users)));
    /// let _users = state.users.clone();
    /// ```
    pub fn new(
        tickets: Arc<dyn TicketsQuery>,
        ticket_commands: Arc<dyn TicketsCommand>,
        users: Arc<dyn UsersQuery>,
    ) -> Self {
        Self {
            tickets,
            ticket_commands,
            users,
        }
    }
}
