//! Seeded server per scenario plus the last response it produced.
//!
//! Actix spawns its workers with `spawn_local`, so the server and every
//! request are driven on one current-thread runtime inside a `LocalSet`.

use std::cell::{Ref, RefCell};
use std::net::TcpListener;

use actix_web::dev::ServerHandle;
use actix_web::http::Method;
use actix_web::{App, HttpServer, web};
use awc::Client;
use serde_json::Value;
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

use tickets_backend::Trace;
use tickets_backend::domain::TRACE_ID_HEADER;
use tickets_backend::inbound::http::api_scope;
use tickets_backend::inbound::http::state::HttpState;
use tickets_backend::state_builders::build_http_state;

/// What the server answered to the most recent request.
#[derive(Debug, Default)]
pub(crate) struct Recorded {
    pub(crate) status: u16,
    pub(crate) trace_id: Option<String>,
    /// `None` for empty bodies such as 204 responses.
    pub(crate) body: Option<Value>,
}

impl Recorded {
    pub(crate) fn json(&self) -> &Value {
        self.body.as_ref().expect("response had a JSON body")
    }
}

/// Scenario state; stops its server when dropped.
pub(crate) struct TicketsWorld {
    runtime: Runtime,
    local: LocalSet,
    base_url: String,
    server: ServerHandle,
    last: RefCell<Recorded>,
}

impl TicketsWorld {
    pub(crate) fn start() -> Self {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("tokio runtime");
        let local = LocalSet::new();
        let (base_url, server) = local
            .block_on(&runtime, async { build_http_state(true).and_then(serve) })
            .expect("server starts");
        Self {
            runtime,
            local,
            base_url,
            server,
            last: RefCell::default(),
        }
    }

    pub(crate) fn last(&self) -> Ref<'_, Recorded> {
        self.last.borrow()
    }

    /// Send a request and record the response.
    pub(crate) fn send(&self, method: Method, path: &str, payload: Option<Value>) {
        let url = format!("{}{path}", self.base_url);
        let recorded = self.local.block_on(&self.runtime, async move {
            let request = Client::default().request(method, url);
            let mut response = match payload {
                Some(payload) => request.send_json(&payload).await,
                None => request.send().await,
            }
            .expect("request reaches the server");
            let bytes = response.body().await.expect("response body");
            Recorded {
                status: response.status().as_u16(),
                trace_id: response
                    .headers()
                    .get(TRACE_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_owned),
                body: (!bytes.is_empty())
                    .then(|| serde_json::from_slice(&bytes).expect("JSON body")),
            }
        });
        self.last.replace(recorded);
    }
}

impl Drop for TicketsWorld {
    fn drop(&mut self) {
        let server = self.server.clone();
        self.local
            .block_on(&self.runtime, async move { server.stop(true).await });
    }
}

fn serve(state: HttpState) -> std::io::Result<(String, ServerHandle)> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let base_url = format!("http://{}", listener.local_addr()?);
    let state = web::Data::new(state);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Trace)
            .service(api_scope())
    })
    .disable_signals()
    .workers(1)
    .listen(listener)?
    .run();
    let handle = server.handle();
    actix_web::rt::spawn(server);
    Ok((base_url, handle))
}
