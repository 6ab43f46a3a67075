//! Rental routes

use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::rental::CreateRentalRequest;
use crate::error::ApiError;
use crate::middleware::auth::AuthContext;
use rw_core::errors::DomainError;

/// Handler for POST /api/rentals
///
/// The owner is the caller's verified identity; a client-supplied user id
/// is never accepted.
pub async fn create_rental(
    identity: AuthContext,
    state: web::Data<AppState>,
    body: web::Json<CreateRentalRequest>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    let rental = state
        .rentals
        .rent_car(identity.user_id, body.car_id, body.start_date, body.end_date)
        .await?;

    Ok(HttpResponse::Created().json(rental))
}

/// Handler for GET /api/rentals
///
/// Lists only the caller's rentals, in creation order.
pub async fn list_rentals(
    identity: AuthContext,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let rentals = state.rentals.get_rentals_by_user(identity.user_id).await?;
    Ok(HttpResponse::Ok().json(rentals))
}

/// Handler for DELETE /api/rentals/{id}
///
/// The check order is parse, then existence, then ownership; each failure
/// maps to a distinct status (400 / 404 / 403).
pub async fn cancel_rental(
    identity: AuthContext,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let rental_id: u64 = match path.parse() {
        Ok(id) if id > 0 => id,
        _ => return Err(ApiError::BadRequest("Invalid rental ID")),
    };

    let rental = state
        .rentals
        .get_rental_by_id(rental_id)
        .await?
        .ok_or(DomainError::NotFound { resource: "Rental" })?;

    if rental.user_id != identity.user_id {
        return Err(DomainError::Forbidden.into());
    }

    let cancelled = state.rentals.cancel_rental(rental_id).await?;
    Ok(HttpResponse::Ok().json(cancelled))
}
