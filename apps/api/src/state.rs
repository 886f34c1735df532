use crate::config::Config;
use crate::layout::StyleRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Static role → style table. Read-only, shared by every generation.
    pub styles: &'static StyleRegistry,
}
