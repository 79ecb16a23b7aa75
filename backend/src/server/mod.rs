//! Actix application assembly and socket binding.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use tickets_backend::Trace;
#[cfg(debug_assertions)]
use tickets_backend::doc::ApiDoc;
use tickets_backend::inbound::http::api_scope;
use tickets_backend::inbound::http::health::{HealthState, live, ready};
use tickets_backend::inbound::http::state::HttpState;
use tickets_backend::state_builders::build_http_state;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Handles cloned into every worker.
#[derive(Clone)]
struct Shared {
    health: web::Data<HealthState>,
    http: web::Data<HttpState>,
}

impl Shared {
    fn register(self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.health)
            .app_data(self.http)
            .service(api_scope())
            .service(ready)
            .service(live);
        #[cfg(debug_assertions)]
        cfg.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }
}

fn build_app(
    shared: Shared,
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
        .wrap(Trace)
        .configure(move |cfg| shared.register(cfg))
}

/// Seed the stores, bind `config.bind_addr` and return the running server.
///
/// `health` reports ready once the listener is bound.
///
/// # Errors
/// Seed validation, bind or start-up failures as [`std::io::Error`].
pub fn create_server(
    health: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let shared = Shared {
        health: health.clone(),
        http: web::Data::new(build_http_state(config.seed_tickets)?),
    };
    let server = HttpServer::new(move || build_app(shared.clone()))
        .bind(config.bind_addr)?;
    info!(addrs = ?server.addrs(), "listening");
    let server = server.run();

    health.mark_ready();
    Ok(server)
}
