//! Voxify proxy server
//!
//! Main application entry point

use std::sync::Arc;
use anyhow::Context;
use tracing::{info, warn};

use voxify::{
    config::Settings,
    handlers::create_router,
    services::ServiceFactory,
    state::AppState,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let settings = Settings::new().context("failed to load configuration")?;
    settings.validate()?;

    // Initialize logging; the guard flushes the log file on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", voxify::info());

    if !settings.has_api_key() {
        warn!("GROQ_API_KEY is not set; translations fall back to the dictionary and generator");
    }
    if let Some(url) = settings.proxy.url.as_deref() {
        warn!(proxy_url = url, "proxy.url is ignored by the server, it serves the proxy routes");
    }

    info!("Loading phrase dictionaries...");
    let dictionary = ServiceFactory::load_dictionary(&settings).await?;
    for (language, entries) in dictionary.stats() {
        info!(language = %language, entries = entries, "Dictionary loaded");
    }

    info!("Initializing services...");
    let services = ServiceFactory::for_server(&settings, dictionary)?;
    for issue in services.health_check().get_issues() {
        warn!("{}", issue);
    }

    let address = format!("{}:{}", settings.server.host, settings.server.port);
    let state = Arc::new(AppState::new(settings, services));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;

    info!("Server running at http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Voxify server has been shut down.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
