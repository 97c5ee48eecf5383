use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tubeseo_app::domain::{AnalysisRequest, AnalysisResult};
use tubeseo_app::AppContext;
use tubeseo_errors::AppError;

/// JSON surface of the analyzer, generic over the outer router's state so it
/// can be merged into the Leptos router.
pub fn api_router<S>(ctx: AppContext) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/api/analyze", post(analyze))
        .with_state(ctx)
}

async fn analyze(
    State(ctx): State<AppContext>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("Rejected analyze body: {}", e);
        AppError::Validation(e.body_text())
    })?;

    match ctx.analyze_content.execute(request).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            if e.is_validation() {
                tracing::warn!("Analyze request rejected: {}", e);
            } else {
                tracing::error!("Analyze request failed: {}", e);
            }
            Err(e)
        }
    }
}
