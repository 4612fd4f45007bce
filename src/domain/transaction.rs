use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Store-assigned identifier. Ids are strictly increasing and never reused,
/// even after a delete.
pub type TransactionId = i64;

/// Date format used everywhere a date crosses a text boundary (storage, input).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money entering the ledger
    Income,
    /// Money leaving the ledger
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" => Some(TransactionKind::Income),
            "expense" => Some(TransactionKind::Expense),
            _ => None,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single dated income or expense entry.
/// Entries are immutable once stored; the only mutation is a permanent delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    /// Calendar date of the entry
    pub date: NaiveDate,
    /// Human-readable description, never empty
    pub description: String,
    /// Amount in the ledger's base unit, always positive.
    /// Direction is carried by `kind`, never by the sign.
    pub amount: f64,
    pub kind: TransactionKind,
}

/// A validated entry that has not been persisted yet. The id is assigned by
/// the store on insert.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
}

impl NewTransaction {
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: f64,
        kind: TransactionKind,
    ) -> Self {
        assert!(
            amount > 0.0 && amount.is_finite(),
            "Transaction amount must be positive and finite"
        );
        Self {
            date,
            description: description.into(),
            amount,
            kind,
        }
    }
}
