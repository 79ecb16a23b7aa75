//! Tickets backend library modules.
//!
//! Hexagonal layout: [`domain`] holds services and ports, [`outbound`] the
//! in-memory stores, and [`inbound`] the actix-web adapter.
//! [`state_builders`] wires them together for the server and its tests.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
pub mod state_builders;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
