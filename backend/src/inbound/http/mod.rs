//! HTTP inbound adapter exposing the REST API under `/api`.

pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod tickets;
pub mod users;
pub mod validation;

pub use crate::domain::ApiResult;
pub use error::json_config;

use actix_web::web;

/// Mount the ticket and user handlers under `/api`.
pub fn api_scope() -> actix_web::Scope {
    web::scope("/api")
        .app_data(json_config())
        .configure(tickets::configure)
        .configure(users::configure)
}
