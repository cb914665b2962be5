use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

mod config;
mod cricket;
mod model;
mod presenter;
mod web;

use config::Config;
use model::{LogisticPipeline, WinPredictor};
use presenter::Presenter;
use web::{AppState, TeamAssets};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    // Load the model once; it is shared read-only by every request
    let pipeline = LogisticPipeline::load(&config.model_path)
        .with_context(|| format!("Failed to load model from {}", config.model_path.display()))?;
    let (batting, bowling, cities) = pipeline.category_counts();
    info!(
        "Model {} loaded from {} ({} batting, {} bowling, {} city categories)",
        pipeline.name(),
        config.model_path.display(),
        batting,
        bowling,
        cities
    );
    let presenter = Presenter::new(Arc::new(pipeline));

    let assets = TeamAssets::new(web::ASSETS_PREFIX);
    let missing = assets.missing_in(&config.assets_dir);
    if !missing.is_empty() {
        warn!(
            "{} team logo(s) missing from {}; the form will show captions only",
            missing.len(),
            config.assets_dir.display()
        );
    }

    let app = web::router(AppState { presenter, assets }, &config.assets_dir);
    let addr: SocketAddr = config.listen_addr.parse()?;
    info!("Form listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    axum::serve(listener, app).await?;

    Ok(())
}
