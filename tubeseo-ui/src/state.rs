//! State behind the analysis form, kept free of any rendering concerns.

use tubeseo_app::domain::{AnalysisRequest, AnalysisResult};
use tubeseo_errors::DEFAULT_FAILURE;

pub const EMPTY_CONTENT_MESSAGE: &str = "Please enter your news content";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub content: String,
    pub api_key: String,
    pub loading: bool,
    pub result: Option<AnalysisResult>,
    pub error: Option<String>,
}

impl FormState {
    /// Starts a submission and returns the request to send, or `None` when
    /// nothing should go out: blank content (an error is set instead) or a
    /// request already in flight (state left untouched).
    pub fn begin_submit(&mut self) -> Option<AnalysisRequest> {
        if self.loading {
            return None;
        }

        if self.content.trim().is_empty() {
            self.error = Some(EMPTY_CONTENT_MESSAGE.to_string());
            return None;
        }

        self.error = None;
        self.result = None;
        self.loading = true;

        let api_key = Some(self.api_key.trim().to_string()).filter(|key| !key.is_empty());
        Some(AnalysisRequest::new(self.content.clone()).with_api_key(api_key))
    }

    /// Records the outcome of the request started by `begin_submit`.
    pub fn finish(&mut self, outcome: Result<AnalysisResult, String>) {
        self.loading = false;
        match outcome {
            Ok(result) => self.result = Some(result),
            Err(message) if message.trim().is_empty() => {
                self.error = Some(DEFAULT_FAILURE.to_string())
            }
            Err(message) => self.error = Some(message),
        }
    }
}
