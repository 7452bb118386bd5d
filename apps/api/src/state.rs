use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextModel;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup; read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Model behind both pipeline steps. Default: `GeminiClient`.
    pub model: Arc<dyn TextModel>,
    pub config: Config,
}
