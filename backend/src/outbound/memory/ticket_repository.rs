//! In-memory [`TicketRepository`] adapter.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{TicketMutation, TicketRepository, TicketRepositoryError};
use crate::domain::{Ticket, TicketDescription, TicketId};

#[derive(Debug)]
struct TicketStore {
    tickets: Vec<Ticket>,
    next_id: Option<TicketId>,
}

impl TicketStore {
    fn find(&self, id: TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|ticket| ticket.id() == id)
    }

    fn find_mut(&mut self, id: TicketId) -> Option<&mut Ticket> {
        self.tickets.iter_mut().find(|ticket| ticket.id() == id)
    }
}

/// Process-local ticket store.
///
/// The first allocated id is one past the largest seeded id, or `1` when the
/// store starts empty. Ids are never reused.
#[derive(Debug)]
pub struct InMemoryTicketRepository {
    store: RwLock<TicketStore>,
}

impl InMemoryTicketRepository {
    /// Build a store holding `tickets` in the given order.
    pub fn new(tickets: Vec<Ticket>) -> Self {
        let next_id = match tickets.iter().map(Ticket::id).max() {
            None => Some(TicketId::FIRST),
            Some(max) => max.get().checked_add(1).map(TicketId::new),
        };
        Self {
            store: RwLock::new(TicketStore { tickets, next_id }),
        }
    }

    /// Build an empty store.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl TicketRepository for InMemoryTicketRepository {
    async fn list(&self) -> Result<Vec<Ticket>, TicketRepositoryError> {
        Ok(self.store.read().await.tickets.clone())
    }

    async fn find_by_id(&self, id: TicketId) -> Result<Option<Ticket>, TicketRepositoryError> {
        Ok(self.store.read().await.find(id).cloned())
    }

    async fn create(
        &self,
        description: TicketDescription,
    ) -> Result<Ticket, TicketRepositoryError> {
        let mut store = self.store.write().await;
        let id = store.next_id.ok_or_else(TicketRepositoryError::ids_exhausted)?;
        store.next_id = id.get().checked_add(1).map(TicketId::new);
        let ticket = Ticket::open(id, description);
        store.tickets.push(ticket.clone());
        Ok(ticket)
    }

    async fn update(
        &self,
        id: TicketId,
        mutation: TicketMutation,
    ) -> Result<Option<Ticket>, TicketRepositoryError> {
        let mut store = self.store.write().await;
        Ok(store.find_mut(id).map(|ticket| {
            mutation.apply(ticket);
            ticket.clone()
        }))
    }
}
