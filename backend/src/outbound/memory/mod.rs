//! In-memory stores backing the ticket and user ports.
//!
//! State lives for the lifetime of the process. Each store guards its records
//! with a `tokio::sync::RwLock` held across the whole read-modify-write, so
//! concurrent requests on the multi-threaded runtime see atomic updates.

mod seed;
mod ticket_repository;
mod user_repository;

pub use seed::{seed_tickets, seed_users};
pub use ticket_repository::InMemoryTicketRepository;
pub use user_repository::InMemoryUserRepository;
