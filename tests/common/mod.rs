// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use saldo::application::LedgerService;
use tempfile::TempDir;

/// Helper to create a test service with a temporary database
pub async fn test_service() -> Result<(LedgerService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("test.db");
    let service = LedgerService::init(db_path.to_str().unwrap()).await?;
    Ok((service, temp_dir))
}

/// Seed the ledger with one income of 100 and one expense of 40.
pub async fn seed_basic_entries(service: &LedgerService) -> Result<()> {
    service
        .add_transaction("2024-01-10", "Salary", "100", "income")
        .await?;
    service
        .add_transaction("2024-01-12", "Groceries", "40", "expense")
        .await?;
    Ok(())
}
