//! # Bank Service
//!
//! This is the main entry point for a small CRUD service over bank
//! records. It provides:
//!
//! - REST API for listing, fetching, creating, updating and deleting banks
//! - A pluggable data source: in-memory (default) or PostgreSQL
//! - Health and API information endpoints
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                 BANK SERVICE                  │
//! │                                               │
//! │  ┌─────────────────────────────────────────┐  │
//! │  │         REST API (Actix)                │  │
//! │  │  /api/banks   /api/hello   /health      │  │
//! │  └─────────────────────────────────────────┘  │
//! │                      │                        │
//! │  ┌─────────────────────────────────────────┐  │
//! │  │             BankService                 │  │
//! │  └─────────────────────────────────────────┘  │
//! │                      │                        │
//! │  ┌─────────────────────────────────────────┐  │
//! │  │          dyn BankDataSource             │  │
//! │  └─────────────────────────────────────────┘  │
//! │           │                       │           │
//! │    ┌──────┴──────┐         ┌──────┴──────┐    │
//! │    │  In-memory  │         │ PostgreSQL  │    │
//! │    └─────────────┘         └─────────────┘    │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! 1. Copy `.env.example` to `.env` and configure
//! 2. Start the server: `cargo run`
//! 3. `curl http://127.0.0.1:8080/api/banks`
//!
//! With `DATA_SOURCE=postgres` the `banks` table is created on startup.

use std::io;
use std::sync::Arc;
use actix_web::{web, App, HttpServer, middleware};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod datasource;
mod db;
mod models;
mod services;

use config::{AppConfig, DataSourceConfig};
use datasource::{BankDataSource, InMemoryBankDataSource, PostgresBankDataSource};
use db::{Database, DatabaseError};
use services::BankService;

/// Application state shared across all handlers.
pub struct AppState {
    /// Bank business logic over the configured data source
    pub bank_service: BankService,

    /// Application configuration
    pub config: AppConfig,
}

/// Build the data source selected by `config.data_source`.
async fn build_data_source(
    config: &AppConfig,
) -> Result<Arc<dyn BankDataSource>, DatabaseError> {
    match &config.data_source {
        DataSourceConfig::Memory => {
            info!("Using in-memory data source with demo banks");
            Ok(Arc::new(InMemoryBankDataSource::seeded()))
        }
        DataSourceConfig::Postgres { database_url, pool_size } => {
            let db = Database::connect(database_url, *pool_size).await?;
            db.run_migrations().await?;

            info!("Using PostgreSQL data source");
            Ok(Arc::new(PostgresBankDataSource::new(db)))
        }
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load .env first so RUST_LOG from it applies
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Bank Service");

    let config = AppConfig::from_env().map_err(io::Error::other)?;

    info!("Configuration loaded");
    info!("   Data source: {}", config.data_source);

    let data_source = build_data_source(&config).await.map_err(io::Error::other)?;

    let app_state = Arc::new(AppState {
        bank_service: BankService::new(data_source),
        config: config.clone(),
    });

    let server_host = config.server_host.clone();
    let server_port = config.server_port;

    info!("Starting HTTP server on {}:{}", server_host, server_port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(middleware::Logger::default())
            .configure(api::configure_routes)
    })
    .bind((server_host, server_port))?
    .run()
    .await
}
