use crate::config::AppConfig;
use crate::domain::{AnalysisRequest, AnalysisResult};
use crate::infrastructure::openai::{build_messages, OpenAiClient};
use crate::infrastructure::security::InputValidator;
use tracing::Instrument;
use tubeseo_errors::AppError;

pub struct AnalyzeContent {
    client: OpenAiClient,
    default_api_key: Option<String>,
}

impl AnalyzeContent {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: OpenAiClient::new(config),
            default_api_key: config.default_api_key.clone(),
        }
    }

    pub async fn execute(&self, request: AnalysisRequest) -> Result<AnalysisResult, AppError> {
        let request_id = uuid::Uuid::new_v4();
        let span = tracing::info_span!("analyze", %request_id);
        self.run(&request).instrument(span).await
    }

    async fn run(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AppError> {
        let content = InputValidator::validate_content(request)?;
        let api_key = InputValidator::resolve_api_key(request, self.default_api_key.as_deref())?;

        tracing::info!(
            model = self.client.model(),
            content_chars = content.chars().count(),
            "Requesting SEO analysis"
        );

        let reply = self.client.complete(api_key, build_messages(content)).await?;

        let result = match AnalysisResult::from_model_reply(reply.as_deref()) {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("Model reply is not a usable JSON object: {}", e);
                AnalysisResult::default()
            }
        };

        let result = result.normalize_hashtags();
        tracing::info!(
            tags = result.tags.len(),
            hashtags = result.hashtags.len(),
            "SEO analysis ready"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{spawn_fake_completion_api, FakeCompletionApi, FakeReply};

    async fn use_case(reply: FakeReply, default_key: Option<&str>) -> (AnalyzeContent, FakeCompletionApi) {
        let fake = spawn_fake_completion_api(reply).await;
        let config = AppConfig::new(default_key.map(str::to_string))
            .with_base_url(&fake.base_url)
            .unwrap();
        (AnalyzeContent::new(&config), fake)
    }

    const MODEL_REPLY: &str = r##"{
        "title": "This Deal Changes Everything...",
        "tags": ["merger", "company x", "business"],
        "hashtags": ["Merger", "#CompanyX", "BreakingNews"],
        "trendAnalysis": "M&A coverage is trending",
        "explanation": "Withholds the buyer to create curiosity"
    }"##;

    #[tokio::test]
    async fn test_blank_content_never_calls_upstream() {
        let (analyze, fake) = use_case(FakeReply::content(MODEL_REPLY), Some("sk-default")).await;

        let err = analyze.execute(AnalysisRequest::new("   ")).await.unwrap_err();
        assert_eq!(err, AppError::content_required());
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_key_never_calls_upstream() {
        let (analyze, fake) = use_case(FakeReply::content(MODEL_REPLY), None).await;

        let err = analyze
            .execute(AnalysisRequest::new("Company X announces merger"))
            .await
            .unwrap_err();
        assert_eq!(err, AppError::api_key_required());
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn test_content_is_checked_before_key() {
        let (analyze, _fake) = use_case(FakeReply::content(MODEL_REPLY), None).await;
        let err = analyze.execute(AnalysisRequest::new("")).await.unwrap_err();
        assert_eq!(err, AppError::content_required());
    }

    #[tokio::test]
    async fn test_success_normalizes_hashtags_only() {
        let (analyze, fake) = use_case(FakeReply::content(MODEL_REPLY), Some("sk-default")).await;

        let result = analyze
            .execute(AnalysisRequest::new("Company X announces merger"))
            .await
            .unwrap();

        assert_eq!(result.title, "This Deal Changes Everything...");
        assert_eq!(result.tags, vec!["merger", "company x", "business"]);
        assert_eq!(result.hashtags, vec!["#Merger", "#CompanyX", "#BreakingNews"]);
        assert_eq!(result.trend_analysis.as_deref(), Some("M&A coverage is trending"));

        let calls = fake.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].authorization.as_deref(), Some("Bearer sk-default"));
        assert_eq!(
            calls[0].body["messages"][1]["content"],
            "Analyze this news content and generate optimized SEO content:\n\nCompany X announces merger"
        );
    }

    #[tokio::test]
    async fn test_supplied_key_is_forwarded() {
        let (analyze, fake) = use_case(FakeReply::content(MODEL_REPLY), Some("sk-default")).await;

        analyze
            .execute(AnalysisRequest::new("news").with_api_key(Some("sk-user".to_string())))
            .await
            .unwrap();
        assert_eq!(fake.calls()[0].authorization.as_deref(), Some("Bearer sk-user"));
    }

    #[tokio::test]
    async fn test_malformed_reply_degrades_to_empty_result() {
        let (analyze, _fake) = use_case(FakeReply::content("Sure! Here is your title"), Some("sk")).await;

        let result = analyze.execute(AnalysisRequest::new("news")).await.unwrap();
        assert_eq!(result, AnalysisResult::default());
    }

    #[tokio::test]
    async fn test_null_reply_degrades_to_empty_result() {
        let (analyze, _fake) = use_case(FakeReply::NullContent, Some("sk")).await;

        let result = analyze.execute(AnalysisRequest::new("news")).await.unwrap();
        assert_eq!(result, AnalysisResult::default());
    }

    #[tokio::test]
    async fn test_upstream_failure() {
        let (analyze, _fake) = use_case(FakeReply::error(500, "The server had an error"), Some("sk")).await;

        let err = analyze.execute(AnalysisRequest::new("news")).await.unwrap_err();
        assert_eq!(err, AppError::Upstream("500 The server had an error".to_string()));
    }
}
