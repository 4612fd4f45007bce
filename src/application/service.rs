use chrono::NaiveDate;

use crate::domain::{
    DATE_FORMAT, NewTransaction, Transaction, TransactionId, TransactionKind, net_balance,
    parse_amount,
};
use crate::rates::{RateClient, convert_at_rate};
use crate::storage::LedgerStore;

use super::{AppError, DeleteFlow, DeleteOutcome};

/// Application service providing the ledger's operations.
/// This is the only interface the surrounding shell (GUI, TUI, etc.) calls;
/// it validates every input before any mutation is attempted.
pub struct LedgerService {
    store: LedgerStore,
    rates: RateClient,
}

/// Result of adding a transaction: the assigned id plus the recomputed
/// balance for display.
pub struct AddResult {
    pub id: TransactionId,
    pub balance: f64,
}

impl LedgerService {
    /// Create a new service with the given store and rate client.
    pub fn new(store: LedgerStore, rates: RateClient) -> Self {
        Self { store, rates }
    }

    /// Initialize a new database at the given path.
    pub async fn init(database_path: &str) -> Result<Self, AppError> {
        let db_url = format!("sqlite:{}?mode=rwc", database_path);
        let store = LedgerStore::init(&db_url).await?;
        Ok(Self::new(store, RateClient::new()))
    }

    /// Connect to an existing database.
    pub async fn connect(database_path: &str) -> Result<Self, AppError> {
        let db_url = format!("sqlite:{}", database_path);
        let store = LedgerStore::connect(&db_url).await?;
        Ok(Self::new(store, RateClient::new()))
    }

    /// Replace the rate client (e.g. to point at a test server).
    pub fn with_rate_client(mut self, rates: RateClient) -> Self {
        self.rates = rates;
        self
    }

    // ========================
    // Ledger operations
    // ========================

    /// Validate and record a new transaction.
    ///
    /// All four fields are checked before the store is touched; a validation
    /// failure means nothing was written. Inputs arrive as text because that
    /// is what the shell's entry fields hold.
    pub async fn add_transaction(
        &self,
        date: &str,
        description: &str,
        amount: &str,
        kind: &str,
    ) -> Result<AddResult, AppError> {
        let date = date.trim();
        if date.is_empty() {
            return Err(AppError::validation("date", "is required"));
        }
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| {
            AppError::validation("date", format!("'{}' is not a valid YYYY-MM-DD date", date))
        })?;

        let description = description.trim();
        if description.is_empty() {
            return Err(AppError::validation("description", "is required"));
        }

        let amount = parse_amount(amount)
            .map_err(|e| AppError::validation("amount", e.to_string()))?;

        let kind = kind.trim();
        if kind.is_empty() {
            return Err(AppError::validation("type", "is required"));
        }
        let kind = TransactionKind::from_str(kind).ok_or_else(|| {
            AppError::validation("type", format!("'{}' is not income or expense", kind))
        })?;

        let tx = NewTransaction::new(date, description, amount, kind);
        let id = self.store.insert_transaction(&tx).await?;
        log::debug!("recorded {} {} as transaction {}", kind, amount, id);

        let balance = self.balance().await?;
        Ok(AddResult { id, balance })
    }

    /// Delete a transaction directly, without the two-phase flow.
    /// Returns false when no such transaction exists.
    pub async fn delete_transaction(&self, id: TransactionId) -> Result<bool, AppError> {
        let found = self.store.delete_transaction(id).await?;
        if !found {
            log::debug!("delete of transaction {} found nothing", id);
        }
        Ok(found)
    }

    /// Commit a pending two-phase delete. This is the only transition that
    /// mutates the store; a flow that is not awaiting confirmation is
    /// rejected before anything happens.
    pub async fn confirm_delete(&self, flow: &mut DeleteFlow) -> Result<DeleteOutcome, AppError> {
        let id = flow
            .take_confirmed()
            .ok_or_else(|| AppError::validation("selection", "no delete awaiting confirmation"))?;

        let found = self.store.delete_transaction(id).await?;
        Ok(DeleteOutcome::Committed { id, found })
    }

    /// List all transactions in insertion order.
    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, AppError> {
        Ok(self.store.list_transactions().await?)
    }

    /// Net balance over the current record set, recomputed on every call.
    pub async fn balance(&self) -> Result<f64, AppError> {
        let transactions = self.store.list_transactions().await?;
        Ok(net_balance(&transactions))
    }

    // ========================
    // Currency conversion
    // ========================

    /// Convert a foreign-currency amount into `target` using a live rate.
    ///
    /// The result is handed back for display (typically to pre-fill an amount
    /// field) and is never written to the ledger.
    pub async fn convert_currency(
        &self,
        amount: &str,
        base: &str,
        target: &str,
    ) -> Result<f64, AppError> {
        let amount = parse_amount(amount)
            .map_err(|e| AppError::validation("amount", e.to_string()))?;

        let rate = self.rates.get_rate(base, target).await?;
        Ok(convert_at_rate(amount, rate))
    }
}
