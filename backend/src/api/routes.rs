//! # API Route Configuration
//!
//! This module sets up all the HTTP routes for the API.

use actix_web::web;

use super::handlers;

/// Configure all API routes.
///
/// ## Route Structure
///
/// ```text
/// /
/// ├── /health                      GET - Health check
/// └── /api
///     ├── /hello                   GET - Greeting
///     └── /banks                   GET - List, POST - Create, PATCH - Update
///         └── /{accountNumber}     GET - Fetch, DELETE - Remove
/// ```
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Root endpoint - API information
        .route("/", web::get().to(handlers::api_info))

        // Health check endpoint
        .route("/health", web::get().to(handlers::health_check))

        .service(
            web::scope("/api")
                .route("/hello", web::get().to(handlers::hello))

                // Collection: list, create, update
                .service(
                    web::resource("/banks")
                        .route(web::get().to(handlers::get_banks))
                        .route(web::post().to(handlers::add_bank))
                        .route(web::patch().to(handlers::patch_bank)),
                )

                // Single bank by account number
                .service(
                    web::resource("/banks/{account_number}")
                        .route(web::get().to(handlers::get_bank))
                        .route(web::delete().to(handlers::delete_bank)),
                ),
        );
}
