//! Diagnoze API: symptom triage REST server.
//!
//! Serves the symptom classifier, the structured-attribute pipeline and the
//! chat proxy. Configured from `DIAGNOZE_CONFIG` (TOML) or the environment.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use dz_api::config::ApiConfig;
use dz_api::routes;
use dz_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "dz-api starting");

    let config = ApiConfig::load()?;
    let state = AppState::from_config(&config)?;

    if !state.pipeline.has_predictors() {
        tracing::warn!("structured models unavailable, attribute requests use the symptom fallback");
    }

    let app = routes::build_router_with_origins(state, &config.cors_origins);

    let addr = config.addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
