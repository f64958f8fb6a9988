use norikae_server::config::AppConfig;
use norikae_server::network::NetworkClient;
use norikae_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "norikae_server=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    info!(
        addr = %config.addr,
        network_url = %config.network.url,
        timeout_secs = config.network.timeout_secs,
        "configuration loaded"
    );

    let network = NetworkClient::new(config.network.clone())?;
    let state = AppState::new(network);
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("listening on http://{}", config.addr);
    info!("  GET       /         - Landing page");
    info!("  GET       /health   - Health check");
    info!("  GET|POST  /pata     - Interleave a and b");
    info!("  GET|POST  /norikae  - Find the line serving start or dest");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
