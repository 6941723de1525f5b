use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use std::sync::Arc;
use tera::Context;
use tracing::warn;

use crate::charts::{plotly, png};
use crate::data::BenchmarkTable;
use crate::web::{error::AppError, AppState, TEMPLATES};

pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/benchmarks", get(benchmarks))
        .route("/benchmarks/chart.png", get(benchmarks_png))
}

/// Landing page with the static demo line chart.
async fn index() -> Result<Html<String>, AppError> {
    let mut context = Context::new();
    context.insert("title", "Interactive Plotly Chart");
    context.insert("figure", &plotly::demo_line_figure());

    let page = TEMPLATES.render("chart.html", &context)?;
    Ok(Html(page))
}

/// Benchmark page: bar chart plus scatter plot over the sheet rows, or
/// over the fallback table when the sheet cannot be reached.
async fn benchmarks(State(app_state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let table = load_table(&app_state).await;

    let mut context = Context::new();
    context.insert("title", "GPU Benchmarks");
    context.insert("worksheet", &app_state.config.worksheet);
    context.insert("bar_figure", &plotly::fps_bar_figure(&table));
    context.insert("scatter_figure", &plotly::power_fps_scatter_figure(&table));
    context.insert("rows", &table.rows);

    let page = TEMPLATES.render("benchmarks.html", &context)?;
    Ok(Html(page))
}

/// The same bar chart rendered server-side as a PNG.
async fn benchmarks_png(State(app_state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let table = load_table(&app_state).await;
    let bytes = png::render_fps_bar_png(&table)?;
    Ok(([(header::CONTENT_TYPE, "image/png")], bytes))
}

/// Fetches the benchmark table, substituting the fallback rows on any
/// failure. The caller always gets a table to chart.
async fn load_table(app_state: &AppState) -> BenchmarkTable {
    match app_state.sheets.fetch_table().await {
        Ok(table) if !table.is_empty() => table,
        Ok(_) => {
            warn!("sheet returned no rows, serving fallback data");
            BenchmarkTable::fallback()
        }
        Err(e) => {
            warn!("failed to fetch sheet data, serving fallback: {e}");
            BenchmarkTable::fallback()
        }
    }
}
