//! In-process stand-in for the chat completion API.
//!
//! Each fake binds its own axum server on 127.0.0.1:0, answers every
//! `POST /v1/chat/completions` with a fixed reply, and records what it received.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub enum FakeReply {
    /// A single choice whose message content is this string.
    Content(String),
    NullContent,
    NoChoices,
    Error { status: u16, message: String },
}

impl FakeReply {
    pub fn content(content: impl Into<String>) -> Self {
        Self::Content(content.into())
    }

    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self::Error {
            status,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct FakeState {
    reply: FakeReply,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

pub struct FakeCompletionApi {
    /// Suitable for `OPENAI_BASE_URL`.
    pub base_url: String,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl FakeCompletionApi {
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

pub async fn spawn_fake_completion_api(reply: FakeReply) -> FakeCompletionApi {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let state = FakeState {
        reply,
        calls: calls.clone(),
    };

    let app = Router::new()
        .route("/v1/chat/completions", post(handle_completion))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeCompletionApi {
        base_url: format!("http://{addr}/v1"),
        calls,
    }
}

async fn handle_completion(
    State(state): State<FakeState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state
        .calls
        .lock()
        .unwrap()
        .push(RecordedCall { authorization, body });

    match state.reply {
        FakeReply::Content(content) => (StatusCode::OK, Json(completion(json!(content)))),
        FakeReply::NullContent => (StatusCode::OK, Json(completion(Value::Null))),
        FakeReply::NoChoices => (StatusCode::OK, Json(json!({ "choices": [] }))),
        FakeReply::Error { status, message } => (
            StatusCode::from_u16(status).unwrap(),
            Json(json!({ "error": { "message": message, "type": "invalid_request_error" } })),
        ),
    }
}

fn completion(content: Value) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}
