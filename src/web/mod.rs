use axum::{http::Method, routing::get, Router};
use once_cell::sync::Lazy;
use std::sync::Arc;
use tera::Tera;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ServerConfig;
use crate::sheets::SheetsClient;

pub mod error;
pub mod routes;

/// Page templates are compiled into the binary; there is nothing to
/// deploy next to the executable.
pub static TEMPLATES: Lazy<Tera> = Lazy::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("chart.html", include_str!("../../templates/chart.html")),
        (
            "benchmarks.html",
            include_str!("../../templates/benchmarks.html"),
        ),
    ])
    .expect("built-in templates must parse");
    tera
});

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub sheets: Arc<SheetsClient>,
}

pub fn create_router(config: Arc<ServerConfig>, sheets: Arc<SheetsClient>) -> Router {
    let app_state = Arc::new(AppState { config, sheets });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(vec![Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health_check_handler))
        .merge(routes::chart_routes::create_router())
        .with_state(app_state)
        .layer(cors)
}

async fn health_check_handler() -> &'static str {
    "OK"
}
