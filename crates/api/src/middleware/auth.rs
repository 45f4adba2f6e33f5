//! Authentication middleware and identity extractors for protected routes.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tillbook_core::{
    Identity,
    auth::{authorize, require_role},
};
use tillbook_shared::{AppError, Role, types::AccountId};

use crate::{AppState, error::ApiError};

/// Authentication middleware that validates bearer tokens.
///
/// This middleware:
/// 1. Extracts the Bearer token from the Authorization header
/// 2. Validates signature and expiry with the JWT service
/// 3. Stores the [`Identity`] in request extensions for handlers to access
///
/// The credential store is never consulted.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    match authorize(&state.jwt_service, header, None) {
        Ok(identity) => {
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

fn identity_from(parts: &Parts) -> Result<Identity, ApiError> {
    parts
        .extensions
        .get::<Identity>()
        .copied()
        .ok_or(ApiError(AppError::MissingToken))
}

/// Extractor for any authenticated caller.
///
/// ```ignore
/// async fn handler(user: AuthUser) -> impl IntoResponse {
///     let subject = user.subject_id();
///     // ...
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Identity);

impl AuthUser {
    /// Returns the authenticated account ID.
    #[must_use]
    pub fn subject_id(&self) -> AccountId {
        self.0.subject_id
    }

    /// Returns the session role.
    #[must_use]
    pub fn role(&self) -> Role {
        self.0.role
    }

    /// Returns the inner identity.
    #[must_use]
    pub fn identity(&self) -> &Identity {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        identity_from(parts).map(AuthUser)
    }
}

/// Extractor that admits administrator sessions only.
///
/// Rejects with `Forbidden` before any body extractor runs.
#[derive(Debug, Clone, Copy)]
pub struct AdminUser(pub Identity);

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let identity = identity_from(parts)?;
        require_role(&identity, Role::Admin)?;
        Ok(AdminUser(identity))
    }
}
