use serde::{Deserialize, Serialize};

pub const CONTENT_REQUIRED: &str = "Content is required";
pub const API_KEY_REQUIRED: &str =
    "OpenAI API key is required. Please provide one or set OPENAI_API_KEY environment variable.";
pub const DEFAULT_FAILURE: &str = "Failed to analyze content";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    /// Rejected before anything leaves the process.
    #[error("{0}")]
    Validation(String),

    /// The completion API failed or answered with something unusable.
    #[error("{0}")]
    Upstream(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn content_required() -> Self {
        Self::Validation(CONTENT_REQUIRED.to_string())
    }

    pub fn api_key_required() -> Self {
        Self::Validation(API_KEY_REQUIRED.to_string())
    }

    /// Wraps an upstream message, falling back to the generic failure text
    /// when the upstream gave nothing usable.
    pub fn upstream(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Upstream(DEFAULT_FAILURE.to_string())
        } else {
            Self::Upstream(message)
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn user_message(&self) -> &str {
        let message = match self {
            Self::Validation(msg) | Self::Upstream(msg) | Self::Internal(msg) => msg.as_str(),
        };
        if message.is_empty() {
            DEFAULT_FAILURE
        } else {
            message
        }
    }
}

/// Wire shape of every failed `/api/analyze` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            error: err.user_message().to_string(),
        }
    }
}

#[cfg(feature = "ssr")]
mod ssr_impl {
    use super::{AppError, ErrorResponse};
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    impl AppError {
        pub fn status_code(&self) -> StatusCode {
            match self {
                AppError::Validation(_) => StatusCode::BAD_REQUEST,
                AppError::Upstream(_) | AppError::Internal(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
        }
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            (self.status_code(), Json(ErrorResponse::from(&self))).into_response()
        }
    }
}
