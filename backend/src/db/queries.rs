//! # Database Queries
//!
//! SQL for the `banks` table. Each function performs a single statement.
//!
//! ## Error Handling
//!
//! All queries return `Result<T, DatabaseError>`. Common errors:
//! - `NotFound` - Record doesn't exist
//! - `QueryError` - SQL execution failed

use deadpool_postgres::{Client, Pool};
use tokio_postgres::Row;
use tracing::debug;

use crate::models::Bank;

use super::DatabaseError;

// ============================================
// HELPER FUNCTIONS
// ============================================

/// Helper to convert a database row to Bank
fn row_to_bank(row: &Row) -> Bank {
    Bank {
        account_number: row.get("account_number"),
        trust: row.get("trust"),
        transaction_fee: row.get("transaction_fee"),
    }
}

async fn client(pool: &Pool) -> Result<Client, DatabaseError> {
    pool.get()
        .await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))
}

// ============================================
// BANK QUERIES
// ============================================

/// Get all banks in insertion order.
pub async fn get_all_banks(pool: &Pool) -> Result<Vec<Bank>, DatabaseError> {
    debug!("Fetching all banks");

    let client = client(pool).await?;

    let rows = client
        .query(
            r#"
            SELECT account_number, trust, transaction_fee
            FROM banks
            ORDER BY id
            "#,
            &[],
        )
        .await?;

    Ok(rows.iter().map(row_to_bank).collect())
}

/// Get a bank by account number.
pub async fn get_bank(pool: &Pool, account_number: &str) -> Result<Option<Bank>, DatabaseError> {
    debug!("Fetching bank: {}", account_number);

    let client = client(pool).await?;

    let row = client
        .query_opt(
            r#"
            SELECT account_number, trust, transaction_fee
            FROM banks
            WHERE account_number = $1
            "#,
            &[&account_number],
        )
        .await?;

    Ok(row.as_ref().map(row_to_bank))
}

/// Insert a bank unless its account number is taken.
///
/// Returns `false` when a bank with the same account number already exists.
pub async fn insert_bank(pool: &Pool, bank: &Bank) -> Result<bool, DatabaseError> {
    debug!("Inserting bank: {}", bank.account_number);

    let client = client(pool).await?;

    let inserted = client
        .execute(
            r#"
            INSERT INTO banks (account_number, trust, transaction_fee)
            VALUES ($1, $2, $3)
            ON CONFLICT (account_number) DO NOTHING
            "#,
            &[&bank.account_number, &bank.trust, &bank.transaction_fee],
        )
        .await?;

    Ok(inserted == 1)
}

/// Replace a bank's fields and return the row as it was before.
pub async fn update_bank(pool: &Pool, bank: &Bank) -> Result<Bank, DatabaseError> {
    debug!("Updating bank: {}", bank.account_number);

    let client = client(pool).await?;

    let row = client
        .query_opt(
            r#"
            WITH previous AS (
                SELECT account_number, trust, transaction_fee
                FROM banks
                WHERE account_number = $1
                FOR UPDATE
            )
            UPDATE banks
            SET trust = $2, transaction_fee = $3
            FROM previous
            WHERE banks.account_number = previous.account_number
            RETURNING previous.account_number, previous.trust, previous.transaction_fee
            "#,
            &[&bank.account_number, &bank.trust, &bank.transaction_fee],
        )
        .await?;

    row.as_ref()
        .map(row_to_bank)
        .ok_or_else(|| DatabaseError::NotFound(bank.account_number.clone()))
}

/// Delete a bank by account number.
pub async fn delete_bank(pool: &Pool, account_number: &str) -> Result<(), DatabaseError> {
    debug!("Deleting bank: {}", account_number);

    let client = client(pool).await?;

    let deleted = client
        .execute(
            "DELETE FROM banks WHERE account_number = $1",
            &[&account_number],
        )
        .await?;

    if deleted == 0 {
        return Err(DatabaseError::NotFound(account_number.to_string()));
    }

    Ok(())
}
