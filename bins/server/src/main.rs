//! FotoBoo API Server
//!
//! Main entry point for the FotoBoo photo service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fotoboo_api::{AppState, create_router};
use fotoboo_core::photo::PhotoService;
use fotoboo_shared::AppConfig;
use fotoboo_store::FilePhotoRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fotoboo=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Open photo store; a directory that cannot be created stops startup
    let repo = FilePhotoRepository::open(&config.storage.path).with_context(|| {
        format!(
            "Failed to open photo storage at {}",
            config.storage.path.display()
        )
    })?;
    info!(
        storage_path = %config.storage.path.display(),
        records = repo.len(),
        "Photo storage ready"
    );

    // Create application state
    let state = AppState {
        photos: PhotoService::new(Arc::new(repo)),
        max_upload_bytes: config.storage.max_upload_bytes,
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("FotoBoo API server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
