//! Application state and factory
//!
//! This module handles the initialization of the application state
//! and provides the factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{body::MessageBody, middleware::Logger, web, App, HttpResponse};

use crate::graphql::{self, ApiSchema};
use crate::middleware::{auth::BearerIdentity, cors::create_cors};
use crate::routes::{auth, rentals, users};

use rw_core::repositories::{InMemoryRentalStore, InMemoryUserStore};
use rw_core::services::{RentalService, TokenService, UserService};
use rw_shared::config::JwtConfig;
use rw_shared::types::ErrorBody;

/// Concrete service types over the in-memory stores
pub type UserSvc = UserService<InMemoryUserStore>;
pub type RentalSvc = RentalService<InMemoryRentalStore>;

/// Shared services behind every request.
///
/// Each store is created once per process, so all workers see the same
/// collections; building a fresh state gives tests a fully isolated world.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserSvc>,
    pub rentals: Arc<RentalSvc>,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    /// Wire up services over fresh in-memory stores
    pub fn new(jwt: &JwtConfig) -> Self {
        Self {
            users: Arc::new(UserService::new(InMemoryUserStore::new())),
            rentals: Arc::new(RentalService::new(InMemoryRentalStore::new())),
            tokens: Arc::new(TokenService::new(jwt)),
        }
    }
}

/// Create and configure the application with all routes and middleware
pub fn create_app(
    state: web::Data<AppState>,
    schema: web::Data<ApiSchema>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        // Shared state
        .app_data(state)
        .app_data(schema)
        // Malformed JSON bodies get the same error envelope as every
        // other failure.
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // Middleware (identity attachment runs for REST and GraphQL alike)
        .wrap(BearerIdentity)
        .wrap(create_cors())
        .wrap(Logger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // REST surface
        .service(
            web::scope("/api")
                .service(web::scope("/auth").route("/login", web::post().to(auth::login)))
                .service(
                    web::scope("/users")
                        .route("", web::post().to(users::register))
                        .route("", web::get().to(users::current_user)),
                )
                .service(
                    web::scope("/rentals")
                        .route("", web::post().to(rentals::create_rental))
                        .route("", web::get().to(rentals::list_rentals))
                        .route("/{id}", web::delete().to(rentals::cancel_rental)),
                ),
        )
        // GraphQL surface
        .route("/graphql", web::post().to(graphql::graphql_handler))
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "rentwheels-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::new("The requested resource was not found"))
}

/// Wraps JSON deserialization failures in the standard error envelope
fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    let body = HttpResponse::BadRequest().json(ErrorBody::new(&err));
    actix_web::error::InternalError::from_response(err, body).into()
}
