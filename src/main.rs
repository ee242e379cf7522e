//! # Surl Server
//!
//! Backend service managing customers, TLS certificates, and shortened URLs
//! with access logging. Built with actix-web and SQLite.

mod config;
mod constants;
mod db;
mod errors;
mod handlers;
mod models;
mod notifier;
mod password;
mod queries;
mod services;
#[cfg(test)]
mod test_utils;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Load configuration
    let config = config::Config::from_env();

    // Initialize database connection pool and reconcile the schema.
    // An unusable store aborts startup instead of serving without persistence.
    let pool = db::init_pool(&config.database_url).expect("Failed to create database pool");
    db::run_migrations(&pool).expect("Failed to run database migrations");

    // Build the webhook notifier for certificate state changes
    let notifier = notifier::Notifier::new(
        config.notifier_webhook_url.clone(),
        config.notifier_timeout_secs,
    )
    .expect("Failed to build notifier");

    info!(
        "Starting surl server at http://{}:{}",
        config.host, config.port
    );
    info!("API:");
    info!("   POST /customer/create              - Create a customer");
    info!("   GET  /customer/{{id}}                - Get a customer");
    info!("   GET  /customer/{{id}}/certificates   - List a customer's certificates");
    info!("   POST /customer/{{id}}/delete         - Delete a customer and certificates");
    info!("   POST /certificate/create           - Create a certificate");
    info!("   GET  /certificate/{{id}}             - Get a certificate");
    info!("   POST /certificate/{{id}}/activate    - Activate a certificate");
    info!("   POST /certificate/{{id}}/deactivate  - Deactivate a certificate");
    info!("   POST /surls                        - Create a short URL");
    info!("   POST /surls/getURL                 - Resolve a short URL (302)");
    info!("   GET  /surls/{{id}}/accessions        - Accession counts");

    let bind_addr = format!("{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(notifier.clone()))
            .configure(handlers::configure_routes)
    })
    .bind(bind_addr)?
    .run()
    .await
}
