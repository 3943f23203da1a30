//! # Services Module
//!
//! Business rules on top of the data source.
//!
//! | Service | Responsibility |
//! |---------|---------------|
//! | `BankService` | Presence checks before creating, updating and deleting banks |

pub mod bank_service;

pub use bank_service::{BankError, BankService};
