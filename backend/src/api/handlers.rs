//! # API Request Handlers
//!
//! This module contains the handler functions for each API endpoint.
//! Each handler:
//! 1. Extracts request data
//! 2. Validates input
//! 3. Calls the bank service
//! 4. Returns a formatted response
//!
//! ## Error Handling
//!
//! Service errors are mapped to a status code and returned as JSON:
//!
//! | Error | Status | Code |
//! |-------|--------|------|
//! | `NotFound` | 404 | `BANK_NOT_FOUND` |
//! | `Conflict` | 400 | `BANK_ALREADY_EXISTS` |
//! | `DataSource` | 500 | `DATA_SOURCE_ERROR` |
//! | blank account number | 400 | `INVALID_ACCOUNT_NUMBER` |

use std::sync::Arc;
use actix_web::{http::StatusCode, web, HttpResponse};
use chrono::Utc;
use serde_json::json;
use tracing::{error, info, warn};

use crate::AppState;
use crate::models::{ApiResponse, Bank, HealthResponse};
use crate::services::BankError;

/// Build the error response for a failed service call.
fn error_response(e: &BankError) -> HttpResponse {
    let (status, code) = match e {
        BankError::NotFound(_) => (StatusCode::NOT_FOUND, "BANK_NOT_FOUND"),
        BankError::Conflict(_) => (StatusCode::BAD_REQUEST, "BANK_ALREADY_EXISTS"),
        BankError::DataSource(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATA_SOURCE_ERROR"),
    };

    if status.is_server_error() {
        error!("Bank request failed: {}", e);
    } else {
        warn!("Bank request rejected: {}", e);
    }

    HttpResponse::build(status).json(ApiResponse::<()>::error(code, &e.to_string()))
}

fn invalid_bank(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::<()>::error("INVALID_ACCOUNT_NUMBER", message))
}

/// API information endpoint (root).
///
/// ## Endpoint
///
/// `GET /`
pub async fn api_info() -> HttpResponse {
    let info = json!({
        "name": "Bank API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "CRUD API for banks",
        "endpoints": {
            "health": { "method": "GET", "path": "/health" },
            "hello": { "method": "GET", "path": "/api/hello" },
            "banks": {
                "list": { "method": "GET", "path": "/api/banks" },
                "get": { "method": "GET", "path": "/api/banks/{accountNumber}" },
                "create": { "method": "POST", "path": "/api/banks" },
                "update": { "method": "PATCH", "path": "/api/banks" },
                "delete": { "method": "DELETE", "path": "/api/banks/{accountNumber}" }
            }
        }
    });

    HttpResponse::Ok().json(ApiResponse::success(info))
}

/// Health check endpoint.
///
/// ## Endpoint
///
/// `GET /health`
///
/// ## Response
///
/// ```json
/// {
///     "success": true,
///     "data": {
///         "status": "healthy",
///         "dataSource": "memory",
///         "dataSourceHealthy": true,
///         "version": "0.1.0",
///         "timestamp": "2025-12-08T12:00:00Z"
///     }
/// }
/// ```
pub async fn health_check(state: web::Data<Arc<AppState>>) -> HttpResponse {
    let healthy = state.bank_service.is_healthy().await;

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "unhealthy" }.to_string(),
        data_source: state.config.data_source.to_string(),
        data_source_healthy: healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    };

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    HttpResponse::build(status_code).json(ApiResponse::success(response))
}

/// `GET /api/hello`
pub async fn hello() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Hello, this is a REST Endpoint")
}

/// List all banks.
///
/// ## Endpoint
///
/// `GET /api/banks`
///
/// ## Example
///
/// ```bash
/// curl http://127.0.0.1:8080/api/banks
/// ```
pub async fn get_banks(state: web::Data<Arc<AppState>>) -> HttpResponse {
    match state.bank_service.get_banks().await {
        Ok(banks) => HttpResponse::Ok().json(banks),
        Err(e) => error_response(&e),
    }
}

/// Get a bank by account number.
///
/// ## Endpoint
///
/// `GET /api/banks/{accountNumber}`
///
/// ## Errors
///
/// - `BANK_NOT_FOUND` (404) - No bank with this account number
pub async fn get_bank(
    state: web::Data<Arc<AppState>>,
    path: web::Path<String>,
) -> HttpResponse {
    let account_number = path.into_inner();

    match state.bank_service.get_bank(&account_number).await {
        Ok(bank) => HttpResponse::Ok().json(bank),
        Err(e) => error_response(&e),
    }
}

/// Create a bank.
///
/// ## Endpoint
///
/// `POST /api/banks`
///
/// ## Example
///
/// ```bash
/// curl -X POST http://127.0.0.1:8080/api/banks \
///   -H "Content-Type: application/json" \
///   -d '{"accountNumber": "acc123", "trust": 31.415, "transactionFee": 2}'
/// ```
///
/// Responds `201 Created` with the stored bank.
///
/// ## Errors
///
/// - `BANK_ALREADY_EXISTS` (400) - Account number is taken
/// - `INVALID_ACCOUNT_NUMBER` (400) - Account number is blank
pub async fn add_bank(
    state: web::Data<Arc<AppState>>,
    body: web::Json<Bank>,
) -> HttpResponse {
    info!("Create bank request for: {}", body.account_number);

    if let Err(message) = body.validate() {
        return invalid_bank(&message);
    }

    match state.bank_service.add_bank(body.into_inner()).await {
        Ok(bank) => HttpResponse::Created().json(bank),
        Err(e) => error_response(&e),
    }
}

/// Update an existing bank.
///
/// The body carries the full bank; the account number selects which
/// record is replaced.
///
/// ## Endpoint
///
/// `PATCH /api/banks`
///
/// ## Errors
///
/// - `BANK_NOT_FOUND` (404) - No bank with this account number
/// - `INVALID_ACCOUNT_NUMBER` (400) - Account number is blank
pub async fn patch_bank(
    state: web::Data<Arc<AppState>>,
    body: web::Json<Bank>,
) -> HttpResponse {
    info!("Update bank request for: {}", body.account_number);

    if let Err(message) = body.validate() {
        return invalid_bank(&message);
    }

    match state.bank_service.patch_bank(body.into_inner()).await {
        Ok(bank) => HttpResponse::Ok().json(bank),
        Err(e) => error_response(&e),
    }
}

/// Delete a bank.
///
/// ## Endpoint
///
/// `DELETE /api/banks/{accountNumber}`
///
/// Responds `204 No Content`.
///
/// ## Errors
///
/// - `BANK_NOT_FOUND` (404) - No bank with this account number
pub async fn delete_bank(
    state: web::Data<Arc<AppState>>,
    path: web::Path<String>,
) -> HttpResponse {
    let account_number = path.into_inner();
    info!("Delete bank request for: {}", account_number);

    match state.bank_service.delete_bank(&account_number).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e),
    }
}
