//! Ticket API handlers.
//!
//! ```text
//! GET    /api/tickets
//! GET    /api/tickets/{id}
//! POST   /api/tickets {"description":"Fix the lamp"}
//! PUT    /api/tickets/{id}/assign/{userId}
//! PUT    /api/tickets/{id}/unassign
//! PUT    /api/tickets/{id}/complete
//! DELETE /api/tickets/{id}/complete
//! ```
//!
//! Mutations answer `204 No Content`; clients refetch to observe the change.

use actix_web::{HttpResponse, delete, get, post, put, web};
use tracing::info;

use crate::domain::{NewTicket, Ticket};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, NewTicketSchema, TicketSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{USER_ID, parse_ticket_id, parse_user_id};

/// List every ticket in creation order.
#[utoipa::path(
    get,
    path = "/api/tickets",
    responses(
        (status = 200, description = "Tickets", body = [TicketSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["tickets"],
    operation_id = "listTickets"
)]
#[get("/tickets")]
pub async fn list_tickets(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Ticket>>> {
    let tickets = state.tickets.list_tickets().await?;
    Ok(web::Json(tickets))
}

/// Fetch one ticket.
#[utoipa::path(
    get,
    path = "/api/tickets/{id}",
    params(("id" = u64, Path, description = "Ticket identifier")),
    responses(
        (status = 200, description = "Ticket", body = TicketSchema),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Ticket not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["tickets"],
    operation_id = "getTicket"
)]
#[get("/tickets/{id}")]
pub async fn get_ticket(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Ticket>> {
    let id = parse_ticket_id(&path)?;
    let ticket = state.tickets.get_ticket(id).await?;
    Ok(web::Json(ticket))
}

/// Create an open, unassigned ticket.
#[utoipa::path(
    post,
    path = "/api/tickets",
    request_body = NewTicketSchema,
    responses(
        (status = 201, description = "Created ticket", body = TicketSchema),
        (status = 400, description = "Blank description or malformed body", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["tickets"],
    operation_id = "createTicket"
)]
#[post("/tickets")]
pub async fn create_ticket(
    state: web::Data<HttpState>,
    payload: web::Json<NewTicket>,
) -> ApiResult<HttpResponse> {
    let ticket = state
        .ticket_commands
        .create_ticket(payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(ticket))
}

/// Assign a user to a ticket.
#[utoipa::path(
    put,
    path = "/api/tickets/{id}/assign/{userId}",
    params(
        ("id" = u64, Path, description = "Ticket identifier"),
        ("userId" = u64, Path, description = "User identifier")
    ),
    responses(
        (status = 204, description = "Assigned"),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 422, description = "Unknown ticket or user", body = ErrorSchema)
    ),
    tags = ["tickets"],
    operation_id = "assignTicket"
)]
#[put("/tickets/{id}/assign/{user_id}")]
pub async fn assign_ticket(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (ticket, user) = path.into_inner();
    let ticket = parse_ticket_id(&ticket)?;
    let user = parse_user_id(&user, USER_ID)?;
    state.ticket_commands.assign(ticket, user).await?;
    info!(ticket_id = %ticket, user_id = %user, "ticket assigned");
    Ok(HttpResponse::NoContent().finish())
}

/// Clear a ticket's assignee.
#[utoipa::path(
    put,
    path = "/api/tickets/{id}/unassign",
    params(("id" = u64, Path, description = "Ticket identifier")),
    responses(
        (status = 204, description = "Unassigned"),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 422, description = "Unknown ticket", body = ErrorSchema)
    ),
    tags = ["tickets"],
    operation_id = "unassignTicket"
)]
#[put("/tickets/{id}/unassign")]
pub async fn unassign_ticket(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let ticket = parse_ticket_id(&path)?;
    state.ticket_commands.unassign(ticket).await?;
    info!(ticket_id = %ticket, "ticket unassigned");
    Ok(HttpResponse::NoContent().finish())
}

/// Mark a ticket complete.
#[utoipa::path(
    put,
    path = "/api/tickets/{id}/complete",
    params(("id" = u64, Path, description = "Ticket identifier")),
    responses(
        (status = 204, description = "Completed"),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 422, description = "Unknown ticket", body = ErrorSchema)
    ),
    tags = ["tickets"],
    operation_id = "completeTicket"
)]
#[put("/tickets/{id}/complete")]
pub async fn complete_ticket(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    set_completed(&state, &path, true).await
}

/// Mark a ticket incomplete.
#[utoipa::path(
    delete,
    path = "/api/tickets/{id}/complete",
    params(("id" = u64, Path, description = "Ticket identifier")),
    responses(
        (status = 204, description = "Reopened"),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 422, description = "Unknown ticket", body = ErrorSchema)
    ),
    tags = ["tickets"],
    operation_id = "reopenTicket"
)]
#[delete("/tickets/{id}/complete")]
pub async fn reopen_ticket(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    set_completed(&state, &path, false).await
}

async fn set_completed(state: &HttpState, raw_id: &str, completed: bool) -> ApiResult<HttpResponse> {
    let ticket = parse_ticket_id(raw_id)?;
    state.ticket_commands.set_completed(ticket, completed).await?;
    info!(ticket_id = %ticket, completed, "ticket completion changed");
    Ok(HttpResponse::NoContent().finish())
}

/// Register every ticket handler on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_tickets)
        .service(get_ticket)
        .service(create_ticket)
        .service(assign_ticket)
        .service(unassign_ticket)
        .service(complete_ticket)
        .service(reopen_ticket);
}

#[cfg(test)]
#[path = "tickets_tests.rs"]
mod tests;
