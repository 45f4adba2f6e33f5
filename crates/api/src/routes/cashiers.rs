//! Cashier directory routes. Every route requires an administrator session.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get},
};
use serde::Deserialize;
use tillbook_core::AccountProfile;
use tillbook_shared::types::AccountId;

use super::Ack;
use crate::{
    AppState,
    error::ApiResult,
    extractors::{ApiJson, ApiPath},
    middleware::auth::AdminUser,
};

/// Creates the cashier router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/cashiers", get(list_cashiers).post(create_cashier))
        .route("/cashiers/{id}", delete(delete_cashier))
}

/// Request body for registering a cashier.
#[derive(Debug, Deserialize)]
pub struct CreateCashierRequest {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Email, unique among cashiers.
    #[serde(default)]
    pub email: String,
    /// Initial secret.
    #[serde(default, alias = "password")]
    pub secret: String,
}

/// GET /cashiers - List cashiers, newest first.
async fn list_cashiers(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<AccountProfile>>> {
    Ok(Json(state.directory.list().await?))
}

/// POST /cashiers - Register a cashier.
async fn create_cashier(
    _admin: AdminUser,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateCashierRequest>,
) -> ApiResult<(StatusCode, Json<AccountProfile>)> {
    let account = state
        .directory
        .create(&payload.name, &payload.email, &payload.secret)
        .await?;
    Ok((StatusCode::CREATED, Json(account)))
}

/// DELETE /cashiers/{id} - Remove a cashier. Their transactions remain.
async fn delete_cashier(
    _admin: AdminUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<AccountId>,
) -> ApiResult<Json<Ack>> {
    state.directory.delete(id).await?;
    Ok(Json(Ack {
        message: "Cashier deleted",
    }))
}
