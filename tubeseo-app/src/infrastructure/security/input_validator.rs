use crate::domain::AnalysisRequest;
use tubeseo_errors::AppError;

pub struct InputValidator;

impl InputValidator {
    /// Returns the content untouched; it is only trimmed for the emptiness check.
    pub fn validate_content(request: &AnalysisRequest) -> Result<&str, AppError> {
        if !request.has_content() {
            return Err(AppError::content_required());
        }
        Ok(&request.content)
    }

    /// The caller's key wins; otherwise the configured default is used.
    pub fn resolve_api_key<'a>(
        request: &'a AnalysisRequest,
        default_api_key: Option<&'a str>,
    ) -> Result<&'a str, AppError> {
        if let Some(key) = request.supplied_api_key() {
            tracing::debug!("Using caller-supplied API key");
            return Ok(key);
        }

        match default_api_key.map(str::trim).filter(|k| !k.is_empty()) {
            Some(key) => {
                tracing::debug!("Using configured default API key");
                Ok(key)
            }
            None => Err(AppError::api_key_required()),
        }
    }
}
