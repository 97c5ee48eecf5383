use std::fmt;
use tubeseo_errors::AppError;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";

const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

/// Process-wide settings, loaded once at startup.
#[derive(Clone)]
pub struct AppConfig {
    /// Used when a request does not carry its own key.
    pub default_api_key: Option<String>,
    /// Base of the chat completion API, without trailing slash.
    pub base_url: String,
    pub model: String,
}

impl AppConfig {
    pub fn new(default_api_key: Option<String>) -> Self {
        Self {
            default_api_key: non_blank(default_api_key),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, AppError> {
        self.base_url = validate_base_url(base_url)?;
        Ok(self)
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads `OPENAI_API_KEY`, `OPENAI_BASE_URL` and `OPENAI_MODEL` through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(lookup("OPENAI_API_KEY"));

        if let Some(base_url) = non_blank(lookup("OPENAI_BASE_URL")) {
            config = config.with_base_url(&base_url)?;
        }
        if let Some(model) = non_blank(lookup("OPENAI_MODEL")) {
            config = config.with_model(&model);
        }

        Ok(config)
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "default_api_key",
                &self.default_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn validate_base_url(raw: &str) -> Result<String, AppError> {
    let parsed = url::Url::parse(raw.trim())
        .map_err(|e| AppError::Internal(format!("Invalid OPENAI_BASE_URL: {e}")))?;

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(AppError::Internal(
            "OPENAI_BASE_URL must use http or https".to_string(),
        ));
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
