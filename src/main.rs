use std::sync::Arc;

use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use users_api::config::{AppConfig, AppState};
use users_api::middleware::setup_logging;
use users_api::repositories::InMemoryUserRepository;
use users_api::routes::create_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    setup_logging();

    tracing::info!("Starting application...");

    // Load configuration
    let app_config = AppConfig::from_env()?;

    tracing::info!("Loaded configuration for environment: {}", app_config.environment);

    // Users live in process memory for the lifetime of the server
    let repository = Arc::new(InMemoryUserRepository::new());

    // Create AppState
    let app_state = AppState::new(repository, app_config.clone());

    // Create router
    let app = create_router(app_state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CompressionLayer::new())
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
    );

    // Create server address
    let addr = app_config.server_address();
    tracing::info!("Server starting on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        "{} v{} is running on {}",
        app_config.app_name,
        app_config.app_version,
        addr
    );

    axum::serve(listener, app).await?;

    Ok(())
}
