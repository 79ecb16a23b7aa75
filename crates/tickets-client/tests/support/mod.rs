//! In-process tickets server for client tests.
//!
//! Each test gets its own seeded server bound to an ephemeral port, so
//! mutations never leak between tests. Call from inside an actix runtime
//! (`#[actix_web::test]`); dropping the returned guard stops the server.

use std::net::TcpListener;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};

use tickets_backend::Trace;
use tickets_backend::inbound::http::api_scope;
use tickets_backend::state_builders::build_http_state;
use tickets_client::{HttpClient, Queries, RestTicketsApi};

pub struct TestServer {
    pub api_url: String,
    handle: ServerHandle,
}

impl TestServer {
    pub fn http(&self) -> HttpClient {
        HttpClient::new(&self.api_url, None).expect("http client")
    }

    pub fn queries(&self) -> Queries<RestTicketsApi> {
        Queries::new(RestTicketsApi::new(self.http()))
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        // The stop command is sent eagerly; completion is not awaited.
        drop(self.handle.stop(false));
    }
}

pub fn spawn_server() -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    let state = web::Data::new(build_http_state(true).expect("seeded state"));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Trace)
            .service(api_scope())
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .expect("listen")
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    TestServer {
        api_url: format!("http://{addr}/api"),
        handle,
    }
}
