use creator_portal::config::ServerConfig;
use creator_portal::{app, routes, state};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    // A bad route table is a startup fault: refuse to serve.
    let registry = match app::build_registry() {
        Ok(registry) => registry,
        Err(e) => {
            tracing::error!(error = %e, "route registration failed");
            std::process::exit(1);
        }
    };
    for pattern in registry.patterns() {
        tracing::debug!(%pattern, "route available");
    }
    tracing::info!(routes = registry.len(), "route registry initialized");

    let router = routes::app(state::AppState::new(registry));
    let addr = config.socket_addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(%addr, "creator-portal listening");
    if let Err(e) = axum::serve(listener, router).await {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }
}
