//! # In-Memory Data Source
//!
//! Keeps banks in a list guarded by an async `RwLock`. Used by default
//! and by the tests.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::{demo_banks, Bank};

use super::{BankDataSource, DataSourceError};

#[derive(Debug, Default)]
pub struct InMemoryBankDataSource {
    banks: RwLock<Vec<Bank>>,
}

impl InMemoryBankDataSource {
    /// Build a data source holding `banks`.
    ///
    /// Later duplicates of an account number are dropped.
    pub fn with_banks(banks: impl IntoIterator<Item = Bank>) -> Self {
        let mut unique: Vec<Bank> = Vec::new();
        for bank in banks {
            if !unique.iter().any(|b| b.account_number == bank.account_number) {
                unique.push(bank);
            }
        }
        Self {
            banks: RwLock::new(unique),
        }
    }

    /// Data source with the demo banks.
    pub fn seeded() -> Self {
        Self::with_banks(demo_banks())
    }
}

#[async_trait]
impl BankDataSource for InMemoryBankDataSource {
    async fn retrieve_banks(&self) -> Result<Vec<Bank>, DataSourceError> {
        Ok(self.banks.read().await.clone())
    }

    async fn find_by_account_number(
        &self,
        account_number: &str,
    ) -> Result<Option<Bank>, DataSourceError> {
        let banks = self.banks.read().await;
        Ok(banks
            .iter()
            .find(|b| b.account_number == account_number)
            .cloned())
    }

    async fn create_bank(&self, bank: Bank) -> Result<Bank, DataSourceError> {
        let mut banks = self.banks.write().await;
        if banks.iter().any(|b| b.account_number == bank.account_number) {
            return Err(DataSourceError::AlreadyExists(bank.account_number));
        }
        debug!("Storing bank {}", bank.account_number);
        banks.push(bank.clone());
        Ok(bank)
    }

    async fn update_bank(&self, bank: Bank) -> Result<Bank, DataSourceError> {
        let mut banks = self.banks.write().await;
        match banks.iter_mut().find(|b| b.account_number == bank.account_number) {
            Some(slot) => Ok(std::mem::replace(slot, bank)),
            None => Err(DataSourceError::NotFound(bank.account_number)),
        }
    }

    async fn delete_bank(&self, account_number: &str) -> Result<(), DataSourceError> {
        let mut banks = self.banks.write().await;
        match banks.iter().position(|b| b.account_number == account_number) {
            Some(index) => {
                banks.remove(index);
                Ok(())
            }
            None => Err(DataSourceError::NotFound(account_number.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::approx_constant)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_seeded_banks_in_order() {
        let source = InMemoryBankDataSource::seeded();
        let numbers: Vec<_> = source
            .retrieve_banks()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.account_number)
            .collect();
        assert_eq!(numbers, vec!["1234", "1010", "5678"]);
    }

    #[actix_web::test]
    async fn test_find_by_account_number() {
        let source = InMemoryBankDataSource::seeded();

        let bank = source.find_by_account_number("1234").await.unwrap().unwrap();
        assert_eq!(bank.trust, 3.14);
        assert_eq!(bank.transaction_fee, 17);

        assert!(source.find_by_account_number("nope").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_create_rejects_duplicate() {
        let source = InMemoryBankDataSource::seeded();

        let created = source.create_bank(Bank::new("acc123", 31.415, 2)).await.unwrap();
        assert_eq!(created.account_number, "acc123");
        assert_eq!(source.retrieve_banks().await.unwrap().last(), Some(&created));

        let err = source.create_bank(Bank::new("1234", 1.0, 1)).await.unwrap_err();
        assert!(matches!(err, DataSourceError::AlreadyExists(id) if id == "1234"));
        assert_eq!(source.retrieve_banks().await.unwrap().len(), 4);
    }

    #[actix_web::test]
    async fn test_update_returns_previous() {
        let source = InMemoryBankDataSource::seeded();

        let previous = source.update_bank(Bank::new("1234", 1.0, 1)).await.unwrap();
        assert_eq!(previous, Bank::new("1234", 3.14, 17));

        let current = source.find_by_account_number("1234").await.unwrap();
        assert_eq!(current, Some(Bank::new("1234", 1.0, 1)));

        // Position is kept.
        assert_eq!(source.retrieve_banks().await.unwrap()[0].account_number, "1234");

        let err = source.update_bank(Bank::new("missing", 1.0, 1)).await.unwrap_err();
        assert!(matches!(err, DataSourceError::NotFound(_)));
    }

    #[actix_web::test]
    async fn test_delete() {
        let source = InMemoryBankDataSource::seeded();

        source.delete_bank("1010").await.unwrap();
        assert!(source.find_by_account_number("1010").await.unwrap().is_none());

        let err = source.delete_bank("1010").await.unwrap_err();
        assert!(matches!(err, DataSourceError::NotFound(id) if id == "1010"));
    }

    #[actix_web::test]
    async fn test_with_banks_drops_duplicates() {
        let source = InMemoryBankDataSource::with_banks(vec![
            Bank::new("1", 1.0, 1),
            Bank::new("1", 2.0, 2),
        ]);
        let banks = source.retrieve_banks().await.unwrap();
        assert_eq!(banks, vec![Bank::new("1", 1.0, 1)]);
    }
}
