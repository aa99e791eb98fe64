pub mod routes;
pub mod shared;

use anyhow::Context;
use contracts::projections::p001_product_catalog::Catalog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tokio::net::TcpListener;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Создаем директорию для логов
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    let config = shared::config::load_config()?;

    // Фронтенд соединяет те же встроенные наборы; битые ссылки не должны дойти до браузера
    let catalog = Catalog::from_fixtures().context("catalog fixtures failed integrity check")?;
    tracing::info!(
        users = catalog.users().len(),
        categories = catalog.categories().len(),
        products = catalog.products().len(),
        "catalog fixtures verified"
    );

    let static_dir = shared::config::get_static_dir(&config);
    if !static_dir.join("index.html").exists() {
        tracing::warn!(
            "index.html not found in {}; build the frontend first",
            static_dir.display()
        );
    }
    tracing::info!("Serving static files from {}", static_dir.display());

    let app = routes::configure_routes(&static_dir);

    let (host, port) = config.server.bind_addr();

    tracing::info!("Attempting to bind server to http://{}:{}", host, port);
    let listener = match TcpListener::bind((host, port)).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", listener.local_addr()?);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    port
                );
            } else {
                tracing::error!("Failed to bind to {}:{}. Error: {}", host, port, e);
            }
            // Propagate the error to stop the application
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
