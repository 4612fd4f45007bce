use anyhow::{Context, Result};
use chrono::NaiveDate;
use sqlx::{Row, SqlitePool};

use crate::domain::{DATE_FORMAT, NewTransaction, Transaction, TransactionId, TransactionKind};

use super::MIGRATION_001_INITIAL;

/// Persistent store for ledger transactions.
///
/// Every operation is a single SQL statement, so inserts and deletes are
/// atomic: either the full row is visible afterwards or nothing changed.
/// The pool hands out a connection per call rather than holding one open
/// across operations.
pub struct LedgerStore {
    pool: SqlitePool,
}

impl LedgerStore {
    /// Create a new store with the given SQLite connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to a SQLite database at the given URL.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(database_url)
            .await
            .context("Failed to connect to database")?;
        Ok(Self::new(pool))
    }

    /// Run database migrations. Idempotent, safe to call on every startup.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(MIGRATION_001_INITIAL)
            .execute(&self.pool)
            .await
            .context("Failed to run migration 001")?;

        Ok(())
    }

    /// Initialize a new database (connect + migrate).
    pub async fn init(database_url: &str) -> Result<Self> {
        let store = Self::connect(database_url).await?;
        store.migrate().await?;
        Ok(store)
    }

    /// Insert a new transaction and return its store-assigned id.
    pub async fn insert_transaction(&self, tx: &NewTransaction) -> Result<TransactionId> {
        let row = sqlx::query(
            r#"
            INSERT INTO transactions (date, description, amount, type)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(tx.date.format(DATE_FORMAT).to_string())
        .bind(&tx.description)
        .bind(tx.amount)
        .bind(tx.kind.as_str())
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert transaction")?;

        Ok(row.get("id"))
    }

    /// List all transactions, ordered by id (= insertion order).
    pub async fn list_transactions(&self) -> Result<Vec<Transaction>> {
        let rows = sqlx::query(
            r#"
            SELECT id, date, description, amount, type
            FROM transactions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list transactions")?;

        rows.iter().map(Self::row_to_transaction).collect()
    }

    /// Delete the transaction with the given id.
    /// Returns false when no such transaction exists; that is not an error.
    pub async fn delete_transaction(&self, id: TransactionId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete transaction")?;

        Ok(result.rows_affected() > 0)
    }

    fn row_to_transaction(row: &sqlx::sqlite::SqliteRow) -> Result<Transaction> {
        let date_str: String = row.get("date");
        let kind_str: String = row.get("type");

        Ok(Transaction {
            id: row.get("id"),
            date: NaiveDate::parse_from_str(&date_str, DATE_FORMAT)
                .context("Invalid transaction date")?,
            description: row.get("description"),
            amount: row.get("amount"),
            kind: TransactionKind::from_str(&kind_str)
                .ok_or_else(|| anyhow::anyhow!("Invalid transaction type: {}", kind_str))?,
        })
    }
}
