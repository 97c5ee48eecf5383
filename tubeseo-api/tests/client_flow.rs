//! The page's form controller against a real listening server.

use tokio::net::TcpListener;
use tubeseo_api::api_router;
use tubeseo_app::domain::{AnalysisRequest, AnalysisResult};
use tubeseo_app::test_helpers::{spawn_fake_completion_api, FakeCompletionApi, FakeReply};
use tubeseo_app::{AppConfig, AppContext};
use tubeseo_errors::ErrorResponse;
use tubeseo_ui::state::FormState;

const MODEL_REPLY: &str =
    r#"{"title":"What They Announced Next...","tags":["merger"],"hashtags":["Merger"]}"#;

async fn spawn_server(reply: FakeReply, default_key: Option<&str>) -> (String, FakeCompletionApi) {
    let fake = spawn_fake_completion_api(reply).await;
    let config = AppConfig::new(default_key.map(str::to_string))
        .with_base_url(&fake.base_url)
        .unwrap();
    let app = api_router::<()>(AppContext::new(config));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), fake)
}

async fn send(base_url: &str, request: AnalysisRequest) -> Result<AnalysisResult, String> {
    let resp = reqwest::Client::new()
        .post(format!("{base_url}/api/analyze"))
        .json(&request)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if resp.status().is_success() {
        resp.json().await.map_err(|e| e.to_string())
    } else {
        let body: ErrorResponse = resp.json().await.map_err(|e| e.to_string())?;
        Err(body.error)
    }
}

async fn submit(state: &mut FormState, base_url: &str) -> bool {
    let Some(request) = state.begin_submit() else {
        return false;
    };
    assert!(state.loading);
    let outcome = send(base_url, request).await;
    state.finish(outcome);
    true
}

#[tokio::test]
async fn empty_content_never_reaches_the_network() {
    let (base_url, fake) = spawn_server(FakeReply::content(MODEL_REPLY), Some("sk-default")).await;
    let mut state = FormState::default();

    assert!(!submit(&mut state, &base_url).await);
    assert_eq!(state.error.as_deref(), Some("Please enter your news content"));
    assert!(!state.loading);
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn default_credential_flow_populates_result() {
    let (base_url, fake) = spawn_server(FakeReply::content(MODEL_REPLY), Some("sk-default")).await;
    let mut state = FormState {
        content: "Company X announces merger".to_string(),
        ..Default::default()
    };

    assert!(submit(&mut state, &base_url).await);
    assert!(!state.loading);
    assert_eq!(state.error, None);

    let result = state.result.expect("result populated");
    assert_eq!(result.title, "What They Announced Next...");
    assert_eq!(result.hashtags, vec!["#Merger"]);
    assert_eq!(fake.calls().len(), 1);
}

#[tokio::test]
async fn server_error_message_is_shown() {
    let (base_url, _fake) = spawn_server(FakeReply::content(MODEL_REPLY), None).await;
    let mut state = FormState {
        content: "Company X announces merger".to_string(),
        ..Default::default()
    };

    assert!(submit(&mut state, &base_url).await);
    assert!(!state.loading);
    assert_eq!(state.result, None);
    assert!(state.error.unwrap().contains("API key is required"));
}

#[tokio::test]
async fn transport_failure_still_clears_loading() {
    let mut state = FormState {
        content: "news".to_string(),
        ..Default::default()
    };

    assert!(submit(&mut state, "http://127.0.0.1:1").await);
    assert!(!state.loading);
    assert!(!state.error.unwrap().is_empty());
}
