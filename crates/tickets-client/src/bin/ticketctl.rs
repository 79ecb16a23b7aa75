//! `ticketctl`: terminal front end for the tickets API.

use std::io::{self, Write};

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt};

use tickets_client::cli::{Cli, run};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("interrupt received; cancelling request");
            on_interrupt.cancel();
        }
    });

    let mut out = io::stdout().lock();
    run(&cli, &mut out, cancel)
        .await
        .wrap_err("ticketctl command failed")?;
    out.flush().wrap_err("failed to flush output")
}
