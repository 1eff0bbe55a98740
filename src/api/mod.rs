//! HTTP surface over the catalog.

pub mod error;
pub mod handlers;

use crate::core::{Catalog, ConfigProvider};
use axum::{routing::get, Router};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub default_limit: usize,
    pub static_dir: PathBuf,
    pub templates_dir: PathBuf,
}

impl AppState {
    pub fn new(catalog: Catalog, config: &dyn ConfigProvider) -> Self {
        Self {
            catalog: Arc::new(catalog),
            default_limit: config.default_limit(),
            static_dir: PathBuf::from(config.static_dir()),
            templates_dir: PathBuf::from(config.templates_dir()),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/api/products", get(handlers::list_products))
        .route("/api/products/:product_id", get(handlers::get_product))
        .route("/api/pincode/:pincode", get(handlers::get_pincode))
        .nest_service("/static", static_files)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
