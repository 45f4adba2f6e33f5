//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes
//! - Authentication middleware
//! - Request extractors
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;

use axum::{Router, http::StatusCode, response::Response};
use std::sync::Arc;
use tillbook_core::{
    AccountStore, DirectoryService, LedgerService, SessionAuthenticator, TransactionStore,
};
use tillbook_shared::JwtService;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::json_error;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// JWT service for token validation.
    pub jwt_service: Arc<JwtService>,
    /// Credential check and token issue.
    pub sessions: SessionAuthenticator,
    /// Cashier account management.
    pub directory: DirectoryService,
    /// Transaction ledger.
    pub ledger: LedgerService,
}

impl AppState {
    /// Wires the services over the given stores.
    #[must_use]
    pub fn new(
        accounts: Arc<dyn AccountStore>,
        transactions: Arc<dyn TransactionStore>,
        jwt_service: JwtService,
    ) -> Self {
        Self {
            sessions: SessionAuthenticator::new(accounts.clone(), jwt_service.clone()),
            directory: DirectoryService::new(accounts),
            ledger: LedgerService::new(transactions),
            jwt_service: Arc::new(jwt_service),
        }
    }
}

/// Creates the main application router.
///
/// Unknown paths and unsupported methods answer with the same JSON error
/// body as handler failures.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes_with_state(state.clone()))
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn route_not_found() -> Response {
    json_error(StatusCode::NOT_FOUND, "NOT_FOUND", "route not found")
}

async fn method_not_allowed() -> Response {
    json_error(
        StatusCode::METHOD_NOT_ALLOWED,
        "METHOD_NOT_ALLOWED",
        "method not allowed for this route",
    )
}
