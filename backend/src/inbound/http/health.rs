//! `/health/ready` and `/health/live` probes.

use std::sync::atomic::{AtomicU8, Ordering};

use actix_web::{HttpResponse, get, http::header, web};

/// Lifecycle stage reported by the probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ServerPhase {
    /// Stores are being seeded or the socket is not bound yet.
    Starting = 0,
    /// Accepting traffic.
    Serving = 1,
    /// Shutting down; both probes fail.
    Draining = 2,
}

impl ServerPhase {
    const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Starting,
            1 => Self::Serving,
            _ => Self::Draining,
        }
    }
}

/// Phase shared between the bootstrap code and the probe handlers.
#[derive(Debug)]
pub struct HealthState(AtomicU8);

impl Default for HealthState {
    fn default() -> Self {
        Self(AtomicU8::new(ServerPhase::Starting as u8))
    }
}

impl HealthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ServerPhase {
        ServerPhase::from_raw(self.0.load(Ordering::Acquire))
    }

    /// Called once the stores are seeded and the listener is bound.
    pub fn mark_ready(&self) {
        self.advance(ServerPhase::Serving);
    }

    pub fn begin_draining(&self) {
        self.advance(ServerPhase::Draining);
    }

    // Phases only move forward.
    fn advance(&self, to: ServerPhase) {
        self.0.fetch_max(to as u8, Ordering::AcqRel);
    }
}

fn probe(healthy: bool) -> HttpResponse {
    let mut builder = if healthy {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    builder
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// 200 while serving, 503 while starting or draining.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Accepting traffic"),
        (status = 503, description = "Starting up or draining")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    probe(state.phase() == ServerPhase::Serving)
}

/// 200 until draining starts.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Process is alive"),
        (status = 503, description = "Draining")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    probe(state.phase() != ServerPhase::Draining)
}
