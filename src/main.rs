//! todo-api binary: serves the router over HTTP, or behind API Gateway when running in Lambda.

use todo_api::{build_app, lambda_app, AppState, Hosting, LogFormat, Settings, TodoStore};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;
    init_tracing(settings.log_format);

    let state = AppState::new(TodoStore::new());
    let app = build_app(state, &settings);

    match settings.hosting {
        Hosting::Lambda => {
            tracing::info!("starting in Lambda hosting mode");
            lambda_http::run(lambda_app(app)).await?;
        }
        Hosting::Server => {
            let listener = TcpListener::bind(settings.bind_addr()).await?;
            tracing::info!("listening on http://{}", listener.local_addr()?);
            if settings.api_docs {
                tracing::info!("API docs at /docs");
            }
            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }
    }
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("todo_api=info,tower_http=info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
