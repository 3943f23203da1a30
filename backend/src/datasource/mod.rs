//! # Data Source Module
//!
//! Persistence abstraction for banks. The service layer only talks to
//! `dyn BankDataSource`, so the backing store is chosen at startup.
//!
//! ## Implementations
//!
//! | Type | Backing store |
//! |------|---------------|
//! | `InMemoryBankDataSource` | Process-local list, seeded with demo banks |
//! | `PostgresBankDataSource` | `banks` table through the connection pool |

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Bank;

pub use memory::InMemoryBankDataSource;
pub use postgres::PostgresBankDataSource;

/// Errors returned by data sources.
#[derive(Error, Debug)]
pub enum DataSourceError {
    /// No bank with this account number.
    #[error("Bank not found: {0}")]
    NotFound(String),

    /// A bank with this account number is already stored.
    #[error("Bank already exists: {0}")]
    AlreadyExists(String),

    /// The backing store failed.
    #[error("Database error: {0}")]
    Database(String),
}

impl From<crate::db::DatabaseError> for DataSourceError {
    fn from(e: crate::db::DatabaseError) -> Self {
        match e {
            crate::db::DatabaseError::NotFound(id) => Self::NotFound(id),
            other => Self::Database(other.to_string()),
        }
    }
}

/// Storage operations for banks.
///
/// Mutations check existence and write atomically: `create_bank` never
/// overwrites and `update_bank`/`delete_bank` never insert.
#[async_trait]
pub trait BankDataSource: Send + Sync {
    /// All banks, in insertion order.
    async fn retrieve_banks(&self) -> Result<Vec<Bank>, DataSourceError>;

    async fn find_by_account_number(
        &self,
        account_number: &str,
    ) -> Result<Option<Bank>, DataSourceError>;

    /// Store a new bank and return it.
    async fn create_bank(&self, bank: Bank) -> Result<Bank, DataSourceError>;

    /// Replace the bank with the same account number, returning the previous value.
    async fn update_bank(&self, bank: Bank) -> Result<Bank, DataSourceError>;

    async fn delete_bank(&self, account_number: &str) -> Result<(), DataSourceError>;

    /// Whether the backing store is reachable.
    async fn is_healthy(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DatabaseError;

    #[test]
    fn test_database_error_mapping() {
        let err: DataSourceError = DatabaseError::NotFound("1234".to_string()).into();
        assert!(matches!(err, DataSourceError::NotFound(id) if id == "1234"));

        let err: DataSourceError = DatabaseError::ConnectionError("refused".to_string()).into();
        assert!(matches!(err, DataSourceError::Database(msg) if msg.contains("refused")));
    }
}
