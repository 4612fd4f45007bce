use super::{Transaction, TransactionKind};

/// Compute the net balance from a list of transactions.
/// Balance = sum of income amounts - sum of expense amounts
///
/// Recomputed from scratch on every call. At personal-ledger volumes a full
/// pass is cheap; a cached running total updated on insert/delete is the first
/// optimization point if that ever changes.
pub fn net_balance(transactions: &[Transaction]) -> f64 {
    transactions.iter().fold(0.0, |balance, tx| match tx.kind {
        TransactionKind::Income => balance + tx.amount,
        TransactionKind::Expense => balance - tx.amount,
    })
}
