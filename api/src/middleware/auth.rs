//! Bearer-token identity middleware.
//!
//! Extracts and verifies a JWT from the Authorization header and attaches
//! the resolved identity to the request. The policy is deliberately
//! fail-open-to-anonymous: a missing, malformed, expired or forged token
//! leaves the request unauthenticated instead of rejecting it, and the
//! rejection happens later, when a protected handler finds no identity.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use crate::app::AppState;
use crate::error::ApiError;
use rw_core::errors::DomainError;
use rw_core::services::token::Claims;

/// Identity resolved from a verified bearer token
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User id from the token claims
    pub user_id: u64,
    /// Email from the token claims
    pub email: String,
}

impl From<Claims> for AuthContext {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.id,
            email: claims.email,
        }
    }
}

/// Identity-attaching middleware factory
pub struct BearerIdentity;

impl<S, B> Transform<S, ServiceRequest> for BearerIdentity
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = BearerIdentityMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BearerIdentityMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Identity-attaching middleware service
pub struct BearerIdentityMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for BearerIdentityMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if let Some(token) = extract_bearer_token(&req) {
            let verified = req
                .app_data::<web::Data<AppState>>()
                .map(|state| state.tokens.verify(&token));

            match verified {
                Some(Ok(claims)) => {
                    req.extensions_mut().insert(AuthContext::from(claims));
                }
                Some(Err(err)) => {
                    // Fail open: an unverifiable token is the same as no
                    // token at all.
                    log::debug!("discarding bearer token: {}", err);
                }
                None => {}
            }
        }

        let fut = self.service.call(req);
        Box::pin(fut)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Extractor for required authentication.
///
/// Protected handlers take this as an argument; requests with no resolved
/// identity are rejected with 401 before the handler body runs.
impl FromRequest for AuthContext {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or(ApiError::Domain(DomainError::Unauthorized));

        ready(result)
    }
}

/// Extractor for optional authentication (GraphQL context)
pub struct MaybeAuth(pub Option<AuthContext>);

impl FromRequest for MaybeAuth {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let auth = req.extensions().get::<AuthContext>().cloned();
        ready(Ok(MaybeAuth(auth)))
    }
}
