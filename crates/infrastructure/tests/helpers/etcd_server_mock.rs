#![allow(dead_code)]
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::IntoResponse,
    Router,
};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

#[derive(Clone)]
pub struct MockReply {
    pub status: StatusCode,
    pub body: String,
    pub delay: Option<Duration>,
}

impl MockReply {
    pub fn value(key: &str, value: &str) -> Self {
        let body = serde_json::json!({
            "action": "get",
            "node": {
                "key": key,
                "value": value,
                "modifiedIndex": 7,
                "createdIndex": 7
            }
        });
        Self {
            status: StatusCode::OK,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn key_not_found(key: &str) -> Self {
        let body = serde_json::json!({
            "errorCode": 100,
            "message": "Key not found",
            "cause": key,
            "index": 7
        });
        Self {
            status: StatusCode::NOT_FOUND,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn directory(key: &str) -> Self {
        let body = serde_json::json!({
            "action": "get",
            "node": { "key": key, "dir": true, "nodes": [] }
        });
        Self {
            status: StatusCode::OK,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn raw(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[derive(Clone)]
struct MockState {
    reply: MockReply,
    requests: Arc<Mutex<Vec<String>>>,
}

pub struct MockEtcdServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockEtcdServer {
    pub async fn start(reply: MockReply) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;
        let requests = Arc::new(Mutex::new(Vec::new()));

        let state = MockState {
            reply,
            requests: requests.clone(),
        };
        let app = Router::new().fallback(handle).with_state(state);

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Ok(Self {
            addr,
            requests,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requested_paths(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for MockEtcdServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn handle(State(state): State<MockState>, uri: Uri) -> impl IntoResponse {
    state.requests.lock().unwrap().push(uri.path().to_string());
    if let Some(delay) = state.reply.delay {
        tokio::time::sleep(delay).await;
    }
    (state.reply.status, state.reply.body.clone())
}

/// Address with nothing listening on it.
pub async fn closed_endpoint() -> String {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
