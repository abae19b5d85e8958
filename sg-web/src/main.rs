// main.rs only boots the router and server

mod handlers;
mod models;
mod router;
mod state;

use state::AppState;
use tracing::info;

use sg_grapher::config::GrapherConfig;
use sg_grapher::observability::{logging, metrics};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();

    if let Err(e) = metrics::init() {
        tracing::warn!("metrics recorder not installed: {}", e);
    }

    let config = GrapherConfig::from_env();
    let state = AppState::new(&config);

    let app = router::app_router(state);

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("web boundary listening on {}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
