//! # Bank Service
//!
//! Thin layer between the HTTP handlers and the data source. It turns
//! "already there" and "not there" into `BankError`s the handlers map to
//! status codes.
//!
//! ## Flow Example: Create
//!
//! ```text
//! 1. POST /api/banks
//!          ↓
//! 2. BankService.add_bank()
//!          ↓
//! 3. Reject if the account number is taken
//!          ↓
//! 4. BankDataSource.create_bank()
//!          ↓
//! 5. Return the stored bank
//! ```

use std::sync::Arc;

use tracing::{debug, info};

use crate::datasource::{BankDataSource, DataSourceError};
use crate::models::Bank;

/// Errors that can occur in bank operations.
#[derive(Debug, thiserror::Error)]
pub enum BankError {
    /// No bank with the given account number.
    #[error("Bank not found: {0}")]
    NotFound(String),

    /// A bank with the given account number already exists.
    #[error("Bank with account number {0} already exists")]
    Conflict(String),

    /// The data source failed.
    #[error("Data source error: {0}")]
    DataSource(String),
}

impl From<DataSourceError> for BankError {
    fn from(e: DataSourceError) -> Self {
        match e {
            DataSourceError::NotFound(id) => Self::NotFound(id),
            DataSourceError::AlreadyExists(id) => Self::Conflict(id),
            DataSourceError::Database(msg) => Self::DataSource(msg),
        }
    }
}

/// The service for reading and changing banks.
///
/// ## Usage
///
/// ```rust,ignore
/// let service = BankService::new(Arc::new(InMemoryBankDataSource::seeded()));
///
/// let banks = service.get_banks().await?;
/// let created = service.add_bank(Bank::new("acc123", 31.415, 2)).await?;
/// ```
#[derive(Clone)]
pub struct BankService {
    data_source: Arc<dyn BankDataSource>,
}

impl BankService {
    pub fn new(data_source: Arc<dyn BankDataSource>) -> Self {
        Self { data_source }
    }

    /// Whether the underlying data source is reachable.
    pub async fn is_healthy(&self) -> bool {
        self.data_source.is_healthy().await
    }

    /// All banks.
    pub async fn get_banks(&self) -> Result<Vec<Bank>, BankError> {
        Ok(self.data_source.retrieve_banks().await?)
    }

    /// A single bank by account number.
    ///
    /// ## Errors
    ///
    /// - `NotFound` - No such account number
    pub async fn get_bank(&self, account_number: &str) -> Result<Bank, BankError> {
        self.data_source
            .find_by_account_number(account_number)
            .await?
            .ok_or_else(|| BankError::NotFound(account_number.to_string()))
    }

    /// Create a bank.
    ///
    /// ## Errors
    ///
    /// - `Conflict` - The account number is already used
    pub async fn add_bank(&self, bank: Bank) -> Result<Bank, BankError> {
        if self
            .data_source
            .find_by_account_number(&bank.account_number)
            .await?
            .is_some()
        {
            debug!("Rejecting duplicate bank {}", bank.account_number);
            return Err(BankError::Conflict(bank.account_number));
        }

        // The data source re-checks under its own lock or constraint.
        let created = self.data_source.create_bank(bank).await?;
        info!("Created bank {}", created.account_number);
        Ok(created)
    }

    /// Replace an existing bank and return the new value.
    ///
    /// ## Errors
    ///
    /// - `NotFound` - No such account number
    pub async fn patch_bank(&self, bank: Bank) -> Result<Bank, BankError> {
        if self
            .data_source
            .find_by_account_number(&bank.account_number)
            .await?
            .is_none()
        {
            return Err(BankError::NotFound(bank.account_number));
        }

        let previous = self.data_source.update_bank(bank.clone()).await?;
        info!(
            "Updated bank {} (trust {} -> {}, fee {} -> {})",
            bank.account_number,
            previous.trust,
            bank.trust,
            previous.transaction_fee,
            bank.transaction_fee
        );
        Ok(bank)
    }

    /// Delete a bank.
    ///
    /// ## Errors
    ///
    /// - `NotFound` - No such account number
    pub async fn delete_bank(&self, account_number: &str) -> Result<(), BankError> {
        if self
            .data_source
            .find_by_account_number(account_number)
            .await?
            .is_none()
        {
            return Err(BankError::NotFound(account_number.to_string()));
        }

        self.data_source.delete_bank(account_number).await?;
        info!("Deleted bank {}", account_number);
        Ok(())
    }
}
