//! Tickets server entry-point: loads settings, seeds the stores and serves
//! the REST API.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use tickets_backend::inbound::http::health::HealthState;
use tickets_backend::settings::ServerSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| eyre!("failed to load server settings: {e}"))?;
    let config = ServerConfig::from_settings(&settings)?;
    info!(addr = %config.bind_addr, seed_tickets = config.seed_tickets, "starting tickets server");

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config).wrap_err("failed to start server")?;
    actix_web::rt::spawn(async move {
        if actix_web::rt::signal::ctrl_c().await.is_ok() {
            info!("interrupt received; draining");
            health_state.begin_draining();
        }
    });
    server.await.wrap_err("server terminated with an error")
}
