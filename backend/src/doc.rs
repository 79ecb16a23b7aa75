//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects the ticket, user and health endpoints together with
//! the schema wrappers from [`crate::inbound::http::schemas`]. The document
//! is served by Swagger UI in debug builds and exported with
//! `cargo run --bin openapi-dump`.

use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, NewTicketSchema, TicketSchema, UserSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the tickets REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tickets API",
        description = "In-memory ticket tracker: list, create, assign and complete tickets.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::tickets::list_tickets,
        crate::inbound::http::tickets::get_ticket,
        crate::inbound::http::tickets::create_ticket,
        crate::inbound::http::tickets::assign_ticket,
        crate::inbound::http::tickets::unassign_ticket,
        crate::inbound::http::tickets::complete_ticket,
        crate::inbound::http::tickets::reopen_ticket,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(TicketSchema, NewTicketSchema, UserSchema, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "tickets", description = "Ticket lifecycle operations"),
        (name = "users", description = "Read-only user directory"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
