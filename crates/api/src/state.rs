use std::sync::Arc;

use projecthub_db::store::ProjectStore;
use projecthub_genai::TextGenerator;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once at startup and cheaply cloneable (everything is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Project persistence.
    pub store: Arc<dyn ProjectStore>,
    /// External text generator used by the AI summary.
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProjectStore>, generator: Arc<dyn TextGenerator>) -> Self {
        Self { store, generator }
    }
}
