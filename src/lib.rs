use actix_web::{http, web, App, HttpServer};
use actix_web::dev::Server;
use tracing_actix_web::TracingLogger;
use sqlx::PgPool;
use std::net::TcpListener;
use std::sync::Arc;
use actix_cors::Cors;

pub mod auth;
pub mod config;
pub mod db;
pub mod models;
pub mod services;
pub mod telemetry;
pub mod utils;
mod handlers;
mod middleware;
mod routes;

use crate::config::jwt::JwtSettings;
use crate::routes::init_routes;
use crate::services::MatchBroadcaster;

pub fn run(
    listener: TcpListener,
    db_pool: PgPool,
    jwt_settings: JwtSettings,
    redis_client: Arc<redis::Client>,
) -> Result<Server, std::io::Error> {
    // Wrap using web::Data, which boils down to an Arc smart pointer
    let db_pool_data = web::Data::new(db_pool);
    let jwt_settings = web::Data::new(jwt_settings);
    let redis_client_data = web::Data::new(redis_client.clone());
    // One dispatcher for the whole process; everything that emits live
    // match events gets a handle to this instance.
    let broadcaster = web::Data::new(MatchBroadcaster::new(redis_client));

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://localhost:5173")
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH"])
            .allowed_headers(vec![
                http::header::AUTHORIZATION,
                http::header::ACCEPT,
                http::header::CONTENT_TYPE,
                http::header::UPGRADE,
                http::header::CONNECTION,
            ])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            // Get a pointer copy and attach it to the application state
            .app_data(db_pool_data.clone())
            .app_data(jwt_settings.clone())
            .app_data(redis_client_data.clone())
            .app_data(broadcaster.clone())
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
