use std::sync::Arc;

use crate::analysis::engine::CareerAnalyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only after startup; concurrent requests share it without locking.
    pub analyzer: Arc<CareerAnalyzer>,
    pub config: Config,
}

impl AppState {
    pub fn new(analyzer: CareerAnalyzer, config: Config) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            config,
        }
    }
}
