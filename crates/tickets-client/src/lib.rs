//! Client data layer for the tickets REST API.
//!
//! The crate is layered the same way requests flow:
//!
//! - [`http`]: reqwest transport with per-request cancellation.
//! - [`api`]: one typed call per endpoint behind the [`TicketsApi`] trait.
//! - [`query`]: keyed cache plus the query/mutation facade that invalidates
//!   ticket entries after every mutation.
//! - [`views`]: view models for the ticket list, ticket details and the
//!   new-ticket form.
//! - [`cli`]: the `ticketctl` terminal front end.
//!
//! # Example
//!
//! ```no_run
//! use tickets_client::{HttpClient, Queries, RequestOptions, RestTicketsApi, StatusFilter};
//!
//! # async fn demo() -> Result<(), tickets_client::ClientError> {
//! let http = HttpClient::new("http://127.0.0.1:3333/api", None)?;
//! let queries = Queries::new(RestTicketsApi::new(http));
//! let open = queries
//!     .tickets(StatusFilter::Open, &RequestOptions::default())
//!     .await?;
//! assert!(open.iter().all(|ticket| !ticket.is_completed()));
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cli;
pub mod error;
pub mod http;
pub mod query;
pub mod views;

pub use api::{RestTicketsApi, TicketsApi};
pub use error::{ApiErrorBody, ClientError};
pub use http::{HttpClient, RequestOptions};
pub use query::{NewTicketRequest, Queries, QueryCache, QueryDomain, QueryKey, QueryOperation, QueryPrefix};
pub use ticket_models::{StatusFilter, Ticket, TicketId, User, UserId};
