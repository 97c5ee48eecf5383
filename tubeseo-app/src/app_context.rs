use crate::application::AnalyzeContent;
use crate::config::AppConfig;
use std::sync::Arc;
use tubeseo_errors::AppError;

#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<AppConfig>,
    pub analyze_content: Arc<AnalyzeContent>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            analyze_content: Arc::new(AnalyzeContent::new(&config)),
            config: Arc::new(config),
        }
    }

    pub fn from_env() -> Result<Self, AppError> {
        let config = AppConfig::from_env()?;
        if config.default_api_key.is_some() {
            tracing::info!("Default OpenAI API key configured");
        } else {
            tracing::warn!("OPENAI_API_KEY not set; requests must supply their own key");
        }
        tracing::info!("Using completion API at {} ({})", config.base_url, config.model);
        Ok(Self::new(config))
    }
}
