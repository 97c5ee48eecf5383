use crate::components::{AnalysisDisplay, ContentForm, ErrorDisplay, LoadingSpinner};
use crate::state::FormState;
use leptos::prelude::*;
use server_fn::ServerFnError;
use tubeseo_app::domain::AnalysisResult;

#[server(AnalyzeNewsFn, "/api", endpoint = "analyze_news")]
pub async fn analyze_news(
    content: String,
    api_key: Option<String>,
) -> Result<AnalysisResult, ServerFnError> {
    use tubeseo_app::domain::AnalysisRequest;
    use tubeseo_app::AppContext;

    let ctx = expect_context::<AppContext>();

    ctx.analyze_content
        .execute(AnalysisRequest::new(content).with_api_key(api_key))
        .await
        .map_err(|e| ServerFnError::new(e.user_message()))
}

/// The message the server put in the error, without the transport prefix.
fn server_error_message(err: ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(message) => message,
        other => other.to_string(),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let state = RwSignal::new(FormState::default());

    let on_submit = Callback::new(move |_: ()| {
        let mut request = None;
        state.update(|s| request = s.begin_submit());
        let Some(request) = request else {
            return;
        };

        leptos::task::spawn_local(async move {
            let outcome = analyze_news(request.content, request.api_key)
                .await
                .map_err(server_error_message);
            state.update(|s| s.finish(outcome));
        });
    });

    view! {
        <div class="hero">
            <h1 class="hero__title">"YouTube News SEO Optimizer"</h1>
            <p class="hero__subtitle">
                "AI-powered title, tags, and hashtags generator for news channels"
            </p>
        </div>

        <div class="card">
            <ContentForm state=state on_submit=on_submit/>
            {move || state.with(|s| s.error.clone()).map(|message| view! {
                <ErrorDisplay message=message/>
            })}
        </div>

        {move || state.with(|s| s.loading).then(|| view! { <LoadingSpinner/> })}

        {move || state.with(|s| s.result.clone()).map(|result| view! {
            <div class="card">
                <AnalysisDisplay result=result/>
            </div>
        })}

        <UsageGuide/>
    }
}

#[component]
fn UsageGuide() -> impl IntoView {
    view! {
        <div class="card">
            <h2 class="section__title">"How to Use This Tool"</h2>
            <ol class="guide">
                <li>"Enter your news content in detail"</li>
                <li>"Optionally provide your OpenAI API key for better results"</li>
                <li>"Click \"Generate SEO Content\""</li>
                <li>"The AI will analyze trending content and generate optimized titles, tags, and hashtags"</li>
                <li>"The title will be crafted to create curiosity without revealing the full news"</li>
                <li>"Copy and use the generated content for your YouTube video"</li>
            </ol>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_message_strips_prefix() {
        let err: ServerFnError = ServerFnError::new("Content is required");
        assert_eq!(server_error_message(err), "Content is required");
    }
}
