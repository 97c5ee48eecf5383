use axum::{routing::post, Router};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, handle_server_fns_with_context, LeptosRoutes};
use tower_http::compression::CompressionLayer;
use tubeseo_api::api_router;
use tubeseo_app::AppContext;
use tubeseo_ui::pages::AnalyzeNewsFn;
use tubeseo_ui::App;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let conf = get_configuration(Some("Cargo.toml")).expect("Failed to load Leptos config");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app_context = match AppContext::from_env() {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let routes = generate_route_list(App);

    server_fn::axum::register_explicit::<AnalyzeNewsFn>();
    tracing::info!("Registered server function: AnalyzeNewsFn");

    let app = Router::new()
        .merge(api_router(app_context.clone()))
        .route("/api/{*fn_name}", post({
            let ctx = app_context.clone();
            move |req| {
                let ctx = ctx.clone();
                async move {
                    handle_server_fns_with_context(
                        move || provide_context(ctx.clone()),
                        req
                    ).await
                }
            }
        }))
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let ctx = app_context.clone();
                move || provide_context(ctx.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

fn shell(options: LeptosOptions) -> impl IntoView {
    use leptos_meta::*;

    let css = r#"
        :root {
            --base: #faf4ed;
            --surface: #fffaf3;
            --overlay: #f2e9e1;
            --muted: #9893a5;
            --subtle: #797593;
            --text: #575279;
            --love: #b4637a;
            --gold: #ea9d34;
            --pine: #286983;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: 'Inter', -apple-system, sans-serif;
            background: var(--base);
            color: var(--text);
            min-height: 100vh;
        }
        .container { max-width: 860px; margin: 0 auto; padding: 1.5rem; }
        .hero { text-align: center; padding: 3rem 0 2rem; }
        .hero__title { font-size: clamp(2rem, 5vw, 2.75rem); color: var(--pine); font-weight: 800; margin-bottom: 0.5rem; }
        .hero__subtitle { color: var(--subtle); font-size: 1.1rem; }
        .card {
            background: var(--surface); border: 2px solid var(--overlay);
            border-radius: 12px; padding: 1.5rem; margin-bottom: 1.5rem;
        }
        .analyze-form { display: flex; flex-direction: column; gap: 0.5rem; }
        .analyze-form__label { font-size: 0.9rem; font-weight: 600; color: var(--subtle); margin-top: 0.5rem; }
        .analyze-form__input, .analyze-form__textarea {
            width: 100%; padding: 0.75rem 1rem; border: 2px solid var(--overlay);
            border-radius: 8px; background: var(--base); color: var(--text); font-size: 1rem; font-family: inherit;
        }
        .analyze-form__input:focus, .analyze-form__textarea:focus { outline: none; border-color: var(--pine); }
        .analyze-form__button {
            margin-top: 1rem; padding: 0.9rem 2rem; background: var(--pine); color: var(--base);
            border: none; border-radius: 8px; font-size: 1rem; font-weight: 600; cursor: pointer;
        }
        .analyze-form__button:hover { opacity: 0.9; }
        .analyze-form__button:disabled { background: var(--muted); cursor: not-allowed; }
        .loading { display: flex; flex-direction: column; align-items: center; padding: 2rem; }
        .loading__spinner {
            width: 50px; height: 50px; border: 4px solid var(--overlay);
            border-top-color: var(--gold); border-radius: 50%; animation: spin 1s linear infinite;
        }
        @keyframes spin { to { transform: rotate(360deg); } }
        .loading__text { margin-top: 1rem; color: var(--subtle); font-style: italic; }
        .analysis { display: flex; flex-direction: column; gap: 1.5rem; }
        .section__header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 0.5rem; }
        .section__title { font-size: 1.2rem; color: var(--text); font-weight: 700; margin-bottom: 0.5rem; }
        .section__header .section__title { margin-bottom: 0; }
        .section__copy { background: none; border: none; color: var(--pine); font-weight: 600; cursor: pointer; }
        .section__body { background: var(--overlay); padding: 1rem; border-radius: 8px; }
        .section__body--prose { white-space: pre-line; line-height: 1.7; }
        .chips { display: flex; flex-wrap: wrap; gap: 0.5rem; }
        .chip { padding: 0.25rem 0.75rem; border-radius: 999px; font-size: 0.9rem; }
        .chip--tag { background: #dfe9ee; color: var(--pine); }
        .chip--hashtag { background: #e3efe9; color: #3e7c5d; font-family: monospace; }
        .guide { list-style: decimal inside; display: flex; flex-direction: column; gap: 0.5rem; color: var(--subtle); }
        .error { background: #fce8ec; border: 2px solid var(--love); border-radius: 8px; padding: 1rem; margin-top: 1rem; }
        .error__message { color: #8b3d4d; }
    "#;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>📰</text></svg>"/>
                <style>{css}</style>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}
