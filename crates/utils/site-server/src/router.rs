//! Static routes for the built web app

use std::path::Path;

use axum::{routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Router serving `dist_dir`, falling back to its `index.html` for unknown paths
pub fn build_router(dist_dir: &Path) -> Router {
    let index = ServeFile::new(dist_dir.join("index.html"));
    let assets = ServeDir::new(dist_dir).fallback(index);

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn dist_fixture() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("renewal-dist-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<!DOCTYPE html><title>Renewal</title>").unwrap();
        std::fs::write(dir.join("style.css"), "body { margin: 0; }").unwrap();
        dir
    }

    async fn get(dist: &Path, uri: &str) -> axum::response::Response {
        build_router(dist)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    fn content_type(response: &axum::response::Response) -> &str {
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_serves_index_at_root() {
        let dist = dist_fixture();
        let response = get(&dist, "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(content_type(&response).starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_serves_assets_with_mime_type() {
        let dist = dist_fixture();
        let response = get(&dist, "/style.css").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(content_type(&response).starts_with("text/css"));
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_index() {
        let dist = dist_fixture();
        let response = get(&dist, "/booking/anything").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(content_type(&response).starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_health() {
        let dist = dist_fixture();
        let response = get(&dist, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
