use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hindi_translator::{build_app, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("hindi_translator=debug,tower_http=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::load_first(&Config::candidate_paths())?;

    // Initialize app state
    let app_state = AppState::new(config.clone())?;

    if config.translator.preload_models {
        let preload_state = app_state.clone();
        tokio::spawn(async move { preload_state.preload_models().await });
    }
    app_state.spawn_session_sweeper();

    let app = build_app(app_state);

    // Start server
    let addr = config.server.bind_address();
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
