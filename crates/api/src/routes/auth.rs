//! Authentication routes.

use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};
use tillbook_shared::{AppError, Role, types::AccountId};

use crate::{
    AppState,
    error::ApiResult,
    extractors::{ApiJson, ApiPath},
};

/// Creates the auth router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/auth/login/{role}", post(login))
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Account email.
    #[serde(default)]
    pub email: String,
    /// Plain secret.
    #[serde(default, alias = "password")]
    pub secret: String,
}

/// Summary of the authenticated account.
#[derive(Debug, Serialize)]
pub struct IdentitySummary {
    /// Account ID.
    pub id: AccountId,
    /// Session role.
    pub role: Role,
    /// Display name.
    pub name: String,
    /// Email.
    pub email: String,
}

/// Login response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Bearer token.
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    /// The authenticated account.
    pub identity: IdentitySummary,
}

/// POST /auth/login/{role} - Authenticate and return a session token.
async fn login(
    State(state): State<AppState>,
    ApiPath(role): ApiPath<String>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let role: Role = role.parse().map_err(AppError::Validation)?;

    let session = state
        .sessions
        .authenticate(role, &payload.email, &payload.secret)
        .await?;

    Ok(Json(LoginResponse {
        token: session.token,
        expires_in: session.expires_in,
        identity: IdentitySummary {
            id: session.account.id,
            role: session.account.role,
            name: session.account.name,
            email: session.account.email,
        },
    }))
}
