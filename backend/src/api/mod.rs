//! # REST API Module
//!
//! This module defines all HTTP endpoints for the bank service.
//!
//! ## Endpoint Overview
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/api/banks` | List banks |
//! | GET | `/api/banks/{accountNumber}` | Get one bank |
//! | POST | `/api/banks` | Create a bank |
//! | PATCH | `/api/banks` | Update a bank |
//! | DELETE | `/api/banks/{accountNumber}` | Delete a bank |
//! | GET | `/api/hello` | Greeting |
//! | GET | `/health` | Health check |
//! | GET | `/` | API information |
//!
//! ## Request/Response Format
//!
//! Bank endpoints take and return bare `Bank` JSON:
//!
//! ```json
//! { "accountNumber": "1234", "trust": 3.14, "transactionFee": 17 }
//! ```
//!
//! Errors use the standard envelope:
//!
//! ```json
//! {
//!     "success": false,
//!     "data": null,
//!     "error": {
//!         "code": "BANK_NOT_FOUND",
//!         "message": "Bank not found: 9999"
//!     }
//! }
//! ```

pub mod routes;
pub mod handlers;

pub use routes::configure_routes;
