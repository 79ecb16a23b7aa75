//! Test helpers for inbound HTTP components.

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::inbound::http::api_scope;
use crate::inbound::http::state::HttpState;
use crate::state_builders::build_http_state;

/// State backed by freshly seeded in-memory stores.
pub fn seeded_state() -> HttpState {
    build_http_state(true).expect("seed data is valid")
}

/// App serving the `/api` scope over `state`.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .service(api_scope())
}
