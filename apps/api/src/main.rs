mod analysis;
mod config;
mod documents;
mod errors;
mod export;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::dictionaries::KeywordDictionary;
use crate::analysis::engine::CareerAnalyzer;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Advisor API v{}", env!("CARGO_PKG_VERSION"));

    let dictionary = match &config.keyword_dictionary_path {
        Some(path) => {
            let dictionary = KeywordDictionary::from_json_file(path)
                .with_context(|| format!("Failed to load keyword dictionary from {}", path.display()))?;
            info!("Keyword dictionary loaded from {}", path.display());
            dictionary
        }
        None => KeywordDictionary::builtin(),
    };
    info!(
        "Scoring profile: {:?}, {} industries, upload limit {} bytes",
        config.scoring_profile,
        dictionary.industries.len(),
        config.max_upload_bytes
    );

    let analyzer = CareerAnalyzer::new(Arc::new(dictionary), config.scoring_profile.weights());
    let state = AppState::new(analyzer, config.clone());

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
