//! Ledger routes.
//!
//! Cashiers act on their own ledger only; administrators act on any.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tillbook_core::{
    BalanceSummary, Transaction, auth::authorize_owner, ledger::RecordTransactionInput,
};
use tillbook_shared::types::{AccountId, TransactionId};

use super::Ack;
use crate::{
    AppState,
    error::ApiResult,
    extractors::{ApiJson, ApiPath},
    middleware::auth::{AdminUser, AuthUser},
};

/// Creates the transactions router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", get(list_all).post(record_transaction))
        .route("/transactions/summary", get(global_summary))
        .route(
            "/transactions/{id}",
            get(list_by_owner).delete(delete_transaction),
        )
        .route("/transactions/{id}/summary", get(owner_summary))
}

/// Request body for recording a transaction.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordTransactionRequest {
    /// Owner; defaults to the caller.
    pub owner_id: Option<AccountId>,
    /// Owner display name.
    #[serde(default)]
    pub owner_name: String,
    /// Strictly positive amount.
    pub amount: Decimal,
    /// One of sale, refund, void, income, expense.
    #[serde(default)]
    pub kind: String,
    /// Free text.
    pub description: Option<String>,
}

/// GET /transactions - Every owner's transactions, newest first.
async fn list_all(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Transaction>>> {
    Ok(Json(state.ledger.list_all().await?))
}

/// GET /transactions/summary - Balance across all owners.
async fn global_summary(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> ApiResult<Json<BalanceSummary>> {
    Ok(Json(state.ledger.summary(None).await?))
}

/// GET /transactions/{ownerId} - One owner's transactions, newest first.
async fn list_by_owner(
    user: AuthUser,
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<AccountId>,
) -> ApiResult<Json<Vec<Transaction>>> {
    authorize_owner(user.identity(), owner_id)?;
    Ok(Json(state.ledger.list_by_owner(owner_id).await?))
}

/// GET /transactions/{ownerId}/summary - One owner's balance.
async fn owner_summary(
    user: AuthUser,
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<AccountId>,
) -> ApiResult<Json<BalanceSummary>> {
    authorize_owner(user.identity(), owner_id)?;
    Ok(Json(state.ledger.summary(Some(owner_id)).await?))
}

/// POST /transactions - Record a transaction.
///
/// A cashier may only record for themselves; an administrator may record on
/// anyone's behalf.
async fn record_transaction(
    user: AuthUser,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RecordTransactionRequest>,
) -> ApiResult<(StatusCode, Json<Transaction>)> {
    let owner_id = payload.owner_id.unwrap_or_else(|| user.subject_id());
    authorize_owner(user.identity(), owner_id)?;

    let transaction = state
        .ledger
        .record(RecordTransactionInput {
            owner_id,
            owner_name: payload.owner_name,
            amount: payload.amount,
            kind: payload.kind,
            description: payload.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(transaction)))
}

/// DELETE /transactions/{id} - Delete a transaction.
///
/// Cashier deletes are scoped to their own entries; anything else is not
/// found.
async fn delete_transaction(
    user: AuthUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<TransactionId>,
) -> ApiResult<Json<Ack>> {
    let scope = (!user.identity().is_admin()).then(|| user.subject_id());
    state.ledger.remove(id, scope).await?;
    Ok(Json(Ack {
        message: "Transaction deleted",
    }))
}
