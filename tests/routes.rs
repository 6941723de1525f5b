use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use benchview::config::ServerConfig;
use benchview::sheets::SheetsClient;
use benchview::web;

/// A router with no credentials configured, so every data fetch takes
/// the fallback path.
fn unconfigured_router() -> axum::Router {
    let config = Arc::new(ServerConfig::default());
    let sheets = Arc::new(SheetsClient::from_config(&config));
    web::create_router(config, sheets)
}

async fn body_string(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn index_renders_the_demo_line_chart() {
    let response = unconfigured_router()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response.into_body()).await;
    assert!(body.contains("Interactive Plotly Chart"));
    assert!(body.contains("lines+markers"));
}

#[tokio::test]
async fn benchmarks_page_serves_fallback_data_without_credentials() {
    let response = unconfigured_router()
        .oneshot(
            Request::builder()
                .uri("/benchmarks")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response.into_body()).await;
    assert!(body.contains("Cyberpunk 2077"));
    assert!(body.contains("fps-bar"));
    assert!(body.contains("power-scatter"));
}

#[tokio::test]
async fn chart_png_returns_an_image() {
    let response = unconfigured_router()
        .oneshot(
            Request::builder()
                .uri("/benchmarks/chart.png")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("image/png")
    );

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(!bytes.is_empty());
    assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
}

#[tokio::test]
async fn health_check_is_ok() {
    let response = unconfigured_router()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response.into_body()).await, "OK");
}
