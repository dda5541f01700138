//! Blue-green sample app: serves a version banner and a health check.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use bg_app::config::AppConfig;
use bg_app::routes;
use bg_app::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        tag = bg_app::VERSION_TAG,
        "bg-app starting"
    );

    let config = AppConfig::from_env()?;
    let app = routes::build_router(AppState::new());

    let addr = config.addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
