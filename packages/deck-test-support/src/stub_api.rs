//! In-process stand-in for the Deck of Cards HTTP service.
//!
//! The stub serves the two routes the client uses with canned replies and
//! records every request it sees, so tests can assert both on what was
//! printed and on which calls were (or were not) made.
//!
//! The server is spawned on the current actix runtime: start it from an
//! `#[actix_web::test]` test.

use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use parking_lot::Mutex;
use serde_json::Value;
use tracing::debug;

pub const SHUFFLE_PATH: &str = "/api/deck/new/shuffle/";

/// A canned HTTP response.
#[derive(Debug, Clone)]
pub struct StubReply {
    status: u16,
    content_type: &'static str,
    body: String,
}

impl StubReply {
    /// 200 with a JSON body
    pub fn json(body: Value) -> Self {
        Self::json_with_status(200, body)
    }

    pub fn json_with_status(status: u16, body: Value) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.to_string(),
        }
    }

    /// Arbitrary text body, e.g. an HTML error page or truncated JSON
    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: body.into(),
        }
    }

    /// Empty body with the given status
    pub fn status(status: u16) -> Self {
        Self::text(status, "")
    }

    fn respond(&self) -> HttpResponse {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        HttpResponse::build(status)
            .content_type(self.content_type)
            .body(self.body.clone())
    }
}

/// A request the stub received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub path: String,
    pub query: String,
}

struct StubState {
    shuffle: StubReply,
    draw: StubReply,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl StubState {
    fn record(&self, req: &HttpRequest) {
        let recorded = RecordedRequest {
            path: req.path().to_string(),
            query: req.query_string().to_string(),
        };
        debug!(path = %recorded.path, query = %recorded.query, "stub deck service hit");
        self.requests.lock().push(recorded);
    }
}

async fn shuffle(req: HttpRequest, state: web::Data<StubState>) -> HttpResponse {
    state.record(&req);
    state.shuffle.respond()
}

async fn draw(req: HttpRequest, state: web::Data<StubState>) -> HttpResponse {
    state.record(&req);
    state.draw.respond()
}

/// Running stub server bound to an ephemeral localhost port.
pub struct StubDeckApi {
    base_url: String,
    handle: ServerHandle,
    state: Arc<StubState>,
}

impl StubDeckApi {
    pub async fn start(shuffle_reply: StubReply, draw_reply: StubReply) -> std::io::Result<Self> {
        let state = Arc::new(StubState {
            shuffle: shuffle_reply,
            draw: draw_reply,
            requests: Mutex::new(Vec::new()),
        });

        let listener = TcpListener::bind("127.0.0.1:0")?;
        let port = listener.local_addr()?.port();

        let data = web::Data::from(state.clone());
        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .route(SHUFFLE_PATH, web::get().to(shuffle))
                .route("/api/deck/{deck_id}/draw/", web::get().to(draw))
        })
        .workers(1)
        .disable_signals()
        .listen(listener)?
        .run();

        let handle = server.handle();
        actix_web::rt::spawn(server);

        Ok(Self {
            base_url: format!("http://127.0.0.1:{port}/"),
            handle,
            state,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Every request received so far, in arrival order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().clone()
    }

    pub fn shuffle_requests(&self) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == SHUFFLE_PATH)
            .collect()
    }

    pub fn draw_requests(&self) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path.ends_with("/draw/"))
            .collect()
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}
