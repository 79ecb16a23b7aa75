//! Wiring of the in-memory stores into HTTP handler state.
//!
//! Shared by `tickets-server` and the integration tests so both serve the
//! same services over the same seed data.

use std::sync::Arc;

use tracing::info;

use crate::domain::{TicketService, UserService};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::{
    InMemoryTicketRepository, InMemoryUserRepository, seed_tickets, seed_users,
};

/// Seed the stores and wrap them in the domain services.
///
/// Users are always seeded; tickets only when `with_seed_tickets` is set,
/// otherwise the ticket store starts empty and allocates from id 1.
///
/// # Errors
/// Returns [`std::io::Error`] if the built-in seed data fails validation.
pub fn build_http_state(with_seed_tickets: bool) -> std::io::Result<HttpState> {
    let users = seed_users().map_err(std::io::Error::other)?;
    let tickets = if with_seed_tickets {
        seed_tickets().map_err(std::io::Error::other)?
    } else {
        Vec::new()
    };
    info!(
        users = users.len(),
        tickets = tickets.len(),
        "in-memory stores seeded"
    );

    let users = Arc::new(InMemoryUserRepository::new(users));
    let tickets = Arc::new(TicketService::new(
        Arc::new(InMemoryTicketRepository::new(tickets)),
        users.clone(),
    ));
    Ok(HttpState::new(
        tickets.clone(),
        tickets,
        Arc::new(UserService::new(users)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{TicketsQuery, UsersQuery};
    use crate::domain::{TicketId, UserId};
    use rstest::rstest;

    #[rstest]
    #[case(true, 20)]
    #[case(false, 0)]
    #[tokio::test]
    async fn ticket_seeding_is_optional(#[case] seed: bool, #[case] expected: usize) {
        let state = build_http_state(seed).expect("state");
        assert_eq!(state.tickets.list_tickets().await.expect("list").len(), expected);
        assert_eq!(state.users.list_users().await.expect("users").len(), 5);
    }

    #[tokio::test]
    async fn seeded_state_serves_ticket_four_and_bob() {
        let state = build_http_state(true).expect("state");
        let four = state
            .tickets
            .get_ticket(TicketId::new(4))
            .await
            .expect("ticket 4");
        assert_eq!(four.description().as_str(), "Configure keyboard shortcuts");
        let bob = state.users.get_user(UserId::new(2)).await.expect("user 2");
        assert_eq!(bob.name().as_str(), "Bob");
    }
}
