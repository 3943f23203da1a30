//! # Bank Model
//!
//! The single resource served by this API.

use serde::{Deserialize, Serialize};

/// A bank account record.
///
/// ## Example JSON
///
/// ```json
/// {
///     "accountNumber": "1234",
///     "trust": 3.14,
///     "transactionFee": 17
/// }
/// ```
///
/// `account_number` identifies the record. Updates replace the other
/// fields of the bank with the same account number; the number itself
/// never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    /// Unique account number.
    pub account_number: String,

    /// Trust score.
    pub trust: f64,

    /// Fee charged per transaction.
    pub transaction_fee: i32,
}

impl Bank {
    pub fn new(account_number: impl Into<String>, trust: f64, transaction_fee: i32) -> Self {
        Self {
            account_number: account_number.into(),
            trust,
            transaction_fee,
        }
    }

    /// Check that the account number can be used as a key.
    ///
    /// ## Returns
    ///
    /// * `Ok(())` - Non-blank account number
    /// * `Err(String)` - Human-readable reason
    pub fn validate(&self) -> Result<(), String> {
        if self.account_number.trim().is_empty() {
            return Err("Account number must not be blank".to_string());
        }
        Ok(())
    }
}

/// Banks the in-memory data source starts with.
#[allow(clippy::approx_constant)]
pub fn demo_banks() -> Vec<Bank> {
    vec![
        Bank::new("1234", 3.14, 17),
        Bank::new("1010", 17.0, 0),
        Bank::new("5678", 0.0, 100),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(Bank::new("acc123", 31.415, 2)).unwrap();
        assert_eq!(
            value,
            json!({ "accountNumber": "acc123", "trust": 31.415, "transactionFee": 2 })
        );
    }

    #[test]
    fn test_rejects_missing_field() {
        let result = serde_json::from_value::<Bank>(json!({ "accountNumber": "1", "trust": 1.0 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate() {
        assert!(Bank::new("1234", 1.0, 1).validate().is_ok());
        assert!(Bank::new("", 1.0, 1).validate().is_err());
        assert!(Bank::new("   ", 1.0, 1).validate().is_err());
    }

    #[test]
    fn test_demo_banks_unique() {
        let banks = demo_banks();
        assert_eq!(banks[0].account_number, "1234");
        let mut numbers: Vec<_> = banks.iter().map(|b| b.account_number.as_str()).collect();
        numbers.sort();
        numbers.dedup();
        assert_eq!(numbers.len(), banks.len());
    }
}
