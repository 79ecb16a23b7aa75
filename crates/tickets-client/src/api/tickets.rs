//! Typed wrappers for the `/tickets` endpoints.

use reqwest::Method;
use ticket_models::{NewTicket, Ticket, TicketId, UserId};

use crate::error::ClientError;
use crate::http::{HttpClient, RequestOptions};

const TICKETS: &str = "tickets";

/// `GET /tickets`
///
/// # Errors
/// See [`ClientError`].
pub async fn get_tickets(http: &HttpClient, options: &RequestOptions) -> Result<Vec<Ticket>, ClientError> {
    http.get_json(&[TICKETS], options).await
}

/// `GET /tickets/{id}`
///
/// # Errors
/// See [`ClientError`]; an unknown id yields a 404 status error.
pub async fn get_ticket_by_id(
    http: &HttpClient,
    id: TicketId,
    options: &RequestOptions,
) -> Result<Ticket, ClientError> {
    http.get_json(&[TICKETS, &id.to_string()], options).await
}

/// `POST /tickets`
///
/// # Errors
/// See [`ClientError`]; a blank description yields a 400 status error.
pub async fn create_ticket(
    http: &HttpClient,
    description: &str,
    options: &RequestOptions,
) -> Result<Ticket, ClientError> {
    http.post_json(&[TICKETS], &NewTicket::new(description), options)
        .await
}

/// `PUT /tickets/{id}/assign/{userId}`
///
/// # Errors
/// See [`ClientError`]; unknown tickets or users yield a 422 status error.
pub async fn assign_user_to_ticket(
    http: &HttpClient,
    ticket_id: TicketId,
    user_id: UserId,
    options: &RequestOptions,
) -> Result<(), ClientError> {
    let (ticket, user) = (ticket_id.to_string(), user_id.to_string());
    http.send_empty(Method::PUT, &[TICKETS, &ticket, "assign", &user], options)
        .await
}

/// `PUT /tickets/{id}/unassign`
///
/// # Errors
/// See [`ClientError`].
pub async fn unassign_user_from_ticket(
    http: &HttpClient,
    ticket_id: TicketId,
    options: &RequestOptions,
) -> Result<(), ClientError> {
    http.send_empty(Method::PUT, &[TICKETS, &ticket_id.to_string(), "unassign"], options)
        .await
}

/// `PUT /tickets/{id}/complete`
///
/// # Errors
/// See [`ClientError`].
pub async fn mark_ticket_as_complete(
    http: &HttpClient,
    ticket_id: TicketId,
    options: &RequestOptions,
) -> Result<(), ClientError> {
    http.send_empty(Method::PUT, &[TICKETS, &ticket_id.to_string(), "complete"], options)
        .await
}

/// `DELETE /tickets/{id}/complete`
///
/// # Errors
/// See [`ClientError`].
pub async fn mark_ticket_as_incomplete(
    http: &HttpClient,
    ticket_id: TicketId,
    options: &RequestOptions,
) -> Result<(), ClientError> {
    http.send_empty(Method::DELETE, &[TICKETS, &ticket_id.to_string(), "complete"], options)
        .await
}
