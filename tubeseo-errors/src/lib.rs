mod app_error;

pub use app_error::{AppError, ErrorResponse, API_KEY_REQUIRED, CONTENT_REQUIRED, DEFAULT_FAILURE};
