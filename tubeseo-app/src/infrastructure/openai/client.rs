use super::types::{ApiErrorEnvelope, ChatCompletionRequest, ChatCompletionResponse, Message};
use crate::config::AppConfig;
use tubeseo_errors::AppError;

pub struct OpenAiClient {
    http_client: reqwest::Client,
    completions_url: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            completions_url: config.completions_url(),
            model: config.model.clone(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends one chat completion and returns the first choice's content,
    /// which may legitimately be `None`.
    pub async fn complete(
        &self,
        api_key: &str,
        messages: Vec<Message>,
    ) -> Result<Option<String>, AppError> {
        let request = ChatCompletionRequest::new(&self.model, messages);

        let response = self
            .http_client
            .post(&self.completions_url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::upstream(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Completion API error: {} - {}", status, body);
            return Err(AppError::upstream(upstream_error_message(status, &body)));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::upstream(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| AppError::upstream("No response from AI"))
    }
}

fn upstream_error_message(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => {
            format!("{} {}", status.as_u16(), envelope.error.message)
        }
        _ => format!("API error: {}", status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::openai::build_messages;
    use crate::test_helpers::{spawn_fake_completion_api, FakeReply};

    async fn client_for(reply: FakeReply) -> (OpenAiClient, crate::test_helpers::FakeCompletionApi) {
        let fake = spawn_fake_completion_api(reply).await;
        let config = AppConfig::new(None).with_base_url(&fake.base_url).unwrap();
        (OpenAiClient::new(&config), fake)
    }

    #[tokio::test]
    async fn test_complete_returns_first_choice() {
        let (client, fake) = client_for(FakeReply::content(r#"{"title":"Hi"}"#)).await;

        let content = client
            .complete("sk-test", build_messages("news"))
            .await
            .unwrap();
        assert_eq!(content.as_deref(), Some(r#"{"title":"Hi"}"#));

        let calls = fake.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].authorization.as_deref(), Some("Bearer sk-test"));
        assert_eq!(calls[0].body["model"], "gpt-4o");
        assert_eq!(calls[0].body["response_format"]["type"], "json_object");
        assert_eq!(calls[0].body["messages"][0]["role"], "system");
        assert_eq!(calls[0].body["messages"][1]["role"], "user");
    }

    #[tokio::test]
    async fn test_complete_null_content() {
        let (client, _fake) = client_for(FakeReply::NullContent).await;
        let content = client.complete("sk-test", build_messages("news")).await.unwrap();
        assert_eq!(content, None);
    }

    #[tokio::test]
    async fn test_complete_no_choices_is_upstream_error() {
        let (client, _fake) = client_for(FakeReply::NoChoices).await;
        let err = client
            .complete("sk-test", build_messages("news"))
            .await
            .unwrap_err();
        assert_eq!(err, AppError::Upstream("No response from AI".to_string()));
    }

    #[tokio::test]
    async fn test_complete_passes_upstream_message_through() {
        let (client, _fake) = client_for(FakeReply::error(401, "Incorrect API key provided")).await;
        let err = client
            .complete("sk-bad", build_messages("news"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            AppError::Upstream("401 Incorrect API key provided".to_string())
        );
    }

    #[tokio::test]
    async fn test_complete_transport_failure() {
        let config = AppConfig::new(None)
            .with_base_url("http://127.0.0.1:1/v1")
            .unwrap();
        let err = OpenAiClient::new(&config)
            .complete("sk-test", build_messages("news"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Upstream(ref msg) if !msg.is_empty()));
    }

    #[test]
    fn test_upstream_error_message_without_envelope() {
        let msg = upstream_error_message(reqwest::StatusCode::BAD_GATEWAY, "<html>");
        assert_eq!(msg, "API error: 502 Bad Gateway");
    }
}
