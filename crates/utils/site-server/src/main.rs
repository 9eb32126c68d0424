//! # Site Server
//!
//! Serves the Trunk build of the web app (`dist/` by default) with an
//! `index.html` fallback so deep links still load the app.

mod config;
mod router;

use config::SiteConfig;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = SiteConfig::from_env()?;
    if !config.dist_dir.join("index.html").is_file() {
        tracing::warn!(dist_dir = %config.dist_dir.display(), "index.html not found; run `trunk build` in web/ first");
    }

    let app = router::build_router(&config.dist_dir);
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    info!("Renewal site running at http://{}", config.bind_address);
    info!("Serving from {}", config.dist_dir.display());

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing() {
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let filter = tracing_subscriber::EnvFilter::try_new(&log_level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
