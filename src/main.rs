use siloam_portal::{app, config, is_production, with_cors, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up BACKEND_URL, SESSION_COOKIE_NAME, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("siloam_portal=info,tower_http=info")),
        )
        .init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting SiloamXperience portal in {:?} mode", config.environment);

    if config.backend.base_url.is_none() {
        if is_production!() {
            tracing::error!("BACKEND_URL is not set; every proxied route will fail");
        } else {
            tracing::warn!("BACKEND_URL is not set; proxied routes will answer 500");
        }
    }

    let state = AppState::from_config(config);
    let app = with_cors(app(state), &config.security);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind {}: {}", bind_addr, e))?;

    tracing::info!("Portal listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
