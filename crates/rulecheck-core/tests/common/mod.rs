//! In-process mock of the evaluation service

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    routing::post,
    Router,
};

pub const CHECK_PATH: &str = "/api/check-results/check";

/// What the mock saw in one multipart request
#[derive(Debug, Default, Clone)]
pub struct ReceivedCheck {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub pdf: Vec<u8>,
    pub rules: Vec<String>,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    received: Arc<Mutex<Vec<ReceivedCheck>>>,
}

pub struct MockService {
    pub addr: SocketAddr,
    received: Arc<Mutex<Vec<ReceivedCheck>>>,
}

impl MockService {
    /// Serve `body` with `status` for every check request
    pub async fn start(status: StatusCode, body: impl Into<String>) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status,
            body: body.into(),
            received: Arc::clone(&received),
        };

        let app = Router::new()
            .route(CHECK_PATH, post(handle_check))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, received }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}{}", self.addr, CHECK_PATH)
    }

    pub fn received(&self) -> Vec<ReceivedCheck> {
        self.received.lock().unwrap().clone()
    }
}

async fn handle_check(
    State(state): State<MockState>,
    mut multipart: Multipart,
) -> (StatusCode, String) {
    let mut received = ReceivedCheck::default();

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("pdf") => {
                received.file_name = field.file_name().map(str::to_string);
                received.content_type = field.content_type().map(str::to_string);
                received.pdf = field.bytes().await.unwrap().to_vec();
            }
            Some("rules") => {
                let text = field.text().await.unwrap();
                received.rules = serde_json::from_str(&text).unwrap();
            }
            _ => {}
        }
    }

    state.received.lock().unwrap().push(received);
    (state.status, state.body.clone())
}

/// An address nothing is listening on
pub async fn closed_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}{}", addr, CHECK_PATH)
}
