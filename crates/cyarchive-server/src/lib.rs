//! Cybiko archive HTTP front.
//!
//! Serves paginated listing pages and per-game detail pages rendered from an
//! in-memory [`Catalog`], plus the raw game assets under `/public`.

pub mod config;
pub mod error;
pub mod routes;
pub mod views;

pub use config::{Args, ArchiveConfig};
pub use error::{ArchiveError, TemplateError};
pub use views::Templates;

use std::sync::Arc;

use axum::Router;
use cyarchive_catalog::Catalog;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    /// Catalog loaded at startup. Read-only from here on.
    pub catalog: Arc<Catalog>,
    /// Page templates, compiled at startup.
    pub templates: Arc<Templates>,
    /// Server configuration.
    pub config: ArchiveConfig,
}

impl AppState {
    /// Create new application state.
    pub fn new(catalog: Catalog, templates: Templates, config: ArchiveConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            templates: Arc::new(templates),
            config,
        }
    }
}

/// Create the router with all routes.
pub fn create_router(state: AppState) -> Router {
    // Mirrors the request origin so credentials stay allowed for any origin.
    let cors = CorsLayer::very_permissive();
    let assets = ServeDir::new(&state.config.static_dir);

    Router::new()
        .merge(routes::index::routes())
        .merge(routes::pages::routes())
        .merge(routes::games::routes())
        .nest_service("/public", assets)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
