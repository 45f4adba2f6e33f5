//! Tillbook API Server
//!
//! Main entry point for the Tillbook ledger service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tillbook_api::{AppState, create_router};
use tillbook_db::{AccountRepository, TransactionRepository, connect_with};
use tillbook_shared::{AppConfig, JwtConfig, JwtService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tillbook=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Connect to database
    let db = connect_with(&config.database)
        .await
        .context("Failed to connect to database")?;
    info!("Connected to database");

    let jwt_config = JwtConfig::try_from(&config.jwt).context("Invalid JWT settings")?;
    let jwt_service = JwtService::new(jwt_config);
    let state = AppState::new(
        Arc::new(AccountRepository::new(db.clone())),
        Arc::new(TransactionRepository::new(db)),
        jwt_service,
    );

    // Provision the bootstrap administrator
    match config.bootstrap.admin() {
        Some(admin) => {
            let (account, created) = state
                .directory
                .ensure_admin(&admin.name, &admin.email, &admin.secret)
                .await
                .context("Failed to provision bootstrap administrator")?;
            info!(account_id = %account.id, created, "Bootstrap administrator ready");
        }
        None => warn!("No bootstrap administrator configured"),
    }

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
