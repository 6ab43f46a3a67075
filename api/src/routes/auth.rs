//! Authentication routes

use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::auth::{AuthPayload, LoginRequest};
use crate::error::ApiError;
use rw_core::errors::DomainError;

/// Handler for POST /api/auth/login
///
/// A structurally incomplete body (missing email or password) is a 400,
/// distinct from the 401 a credential mismatch produces, so callers can
/// tell a malformed request from a wrong password. Unknown-user and
/// wrong-password failures collapse into the same 401 message to avoid
/// account enumeration.
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let (email, password) = match (body.email.as_deref(), body.password.as_deref()) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            (email, password)
        }
        _ => return Err(ApiError::BadRequest("Email and password required")),
    };

    let user = state
        .users
        .authenticate(email, password)
        .await
        .map_err(|err| match err {
            DomainError::NotFound { .. } | DomainError::InvalidCredentials => {
                DomainError::InvalidCredentials
            }
            other => other,
        })?;

    let token = state.tokens.issue(user.id, &user.email)?;
    Ok(HttpResponse::Ok().json(AuthPayload { token }))
}
