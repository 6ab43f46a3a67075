use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{info, warn};

use rw_api::app::{create_app, AppState};
use rw_api::graphql::build_schema;
use rw_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting RentWheels API server");

    // Load configuration
    let config = AppConfig::from_env();
    if config.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set; using the insecure development default");
    }

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    // One state for the whole process: the in-memory stores are shared
    // across all workers and reset on restart.
    let state = web::Data::new(AppState::new(&config.jwt));
    let schema = web::Data::new(build_schema(state.get_ref().clone()));

    HttpServer::new(move || create_app(state.clone(), schema.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
