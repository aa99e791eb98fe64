use axum::body::Body;
use axum::http::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{routing::get, Router};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

/// Конфигурация всех роутов приложения
///
/// Кроме `/health` сервер отдает только статику собранного фронтенда;
/// неизвестные пути получают `index.html`.
pub fn configure_routes(static_dir: &Path) -> Router {
    let index = ServeFile::new(static_dir.join("index.html"));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .fallback_service(ServeDir::new(static_dir).fallback(index))
        .layer(middleware::from_fn(request_logger))
}

/// Простой middleware для логирования запросов
async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let elapsed_ms = start.elapsed().as_millis() as u64;
    if response.status().is_success() || response.status().is_redirection() {
        tracing::info!(%method, %path, status, elapsed_ms, "request");
    } else {
        tracing::warn!(%method, %path, status, elapsed_ms, "request");
    }

    response
}
