//! User routes

use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::user::RegisterRequest;
use crate::error::ApiError;
use crate::middleware::auth::AuthContext;
use rw_core::errors::DomainError;

/// Handler for POST /api/users
///
/// Public registration; validation and duplicate-email failures surface as
/// 400 with the aggregated message.
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    let profile = state
        .users
        .create_user(
            body.email.as_deref().unwrap_or(""),
            body.password.as_deref().unwrap_or(""),
            body.name.as_deref().unwrap_or(""),
        )
        .await?;

    Ok(HttpResponse::Created().json(profile))
}

/// Handler for GET /api/users
///
/// Returns the caller's own profile. The 404 arm is defensive: users are
/// never deleted, so a verified token should always resolve.
pub async fn current_user(
    identity: AuthContext,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    match state.users.find_by_id(identity.user_id).await? {
        Some(profile) => Ok(HttpResponse::Ok().json(profile)),
        None => Err(DomainError::NotFound { resource: "User" }.into()),
    }
}
