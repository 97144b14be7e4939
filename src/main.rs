//! Cardash Server
//!
//! Run with: cargo run --bin cardash
//!
//! Serves the dashboard page on http://127.0.0.1:8050 in development mode.
//! Settings come from `cardash.toml` and `CARDASH_*` environment variables
//! (see `cardash-cli config`); `RUST_LOG` overrides the log filter.

use cardash::api::{serve, AppState};
use cardash::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, report) = Config::load_default();

    // Initialize tracing
    let json = config.logging.is_json();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter(config.server.debug).into()),
        )
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .init();

    tracing::info!("Starting Cardash v{}", env!("CARGO_PKG_VERSION"));
    report.log();

    let state = AppState::new();
    tracing::info!(
        "Theme {:?} enabled (registered: {:?})",
        state.theme().name,
        state.themes.names()
    );

    serve(state, &config.server).await?;

    tracing::info!("Cardash stopped");
    Ok(())
}
