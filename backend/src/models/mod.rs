//! # API Models
//!
//! This module defines the bank entity and the response structures for the
//! REST API.
//!
//! ## Organization
//!
//! - `bank.rs` - The `Bank` record, used for request and response bodies
//! - `responses.rs` - Error envelope and operational responses
//!
//! ## Serialization
//!
//! All models use Serde for JSON serialization/deserialization.
//! Field names are converted to camelCase for JavaScript clients.

pub mod bank;
pub mod responses;

pub use bank::*;
pub use responses::*;
