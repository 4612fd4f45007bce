use crate::domain::TransactionId;

/// Current position in the two-phase delete flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteState {
    /// No transaction chosen
    Idle,
    /// A transaction is chosen, confirmation not yet requested
    Selected(TransactionId),
    /// Explicit confirmation requested; the next step commits or cancels
    ConfirmPending(TransactionId),
}

/// Terminal result of one pass through the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The store mutation ran. `found` is false when the id no longer existed.
    Committed { id: TransactionId, found: bool },
    /// Confirmation declined; the ledger was not touched.
    Cancelled,
}

/// Two-phase delete: select, request confirmation, then commit or cancel.
///
/// The store is only ever touched on the commit transition
/// (`LedgerService::confirm_delete`), so a single stray click or keystroke
/// cannot cause irreversible data loss. Cancelling at any point returns the
/// flow to `Idle` with the ledger unchanged.
#[derive(Debug)]
pub struct DeleteFlow {
    state: DeleteState,
}

impl DeleteFlow {
    pub fn new() -> Self {
        Self {
            state: DeleteState::Idle,
        }
    }

    pub fn state(&self) -> DeleteState {
        self.state
    }

    /// Choose a transaction. Re-selecting replaces any previous choice and
    /// discards a pending confirmation.
    pub fn select(&mut self, id: TransactionId) {
        self.state = DeleteState::Selected(id);
    }

    /// Ask for explicit confirmation of the selected transaction.
    /// Returns the id awaiting confirmation.
    pub fn request_confirmation(&mut self) -> Option<TransactionId> {
        match self.state {
            DeleteState::Selected(id) | DeleteState::ConfirmPending(id) => {
                self.state = DeleteState::ConfirmPending(id);
                Some(id)
            }
            DeleteState::Idle => None,
        }
    }

    /// Decline the pending delete. Always safe; the ledger is untouched.
    pub fn cancel(&mut self) -> DeleteOutcome {
        self.state = DeleteState::Idle;
        DeleteOutcome::Cancelled
    }

    /// Consume the pending confirmation, returning the id to delete.
    /// Only `LedgerService::confirm_delete` calls this.
    pub(crate) fn take_confirmed(&mut self) -> Option<TransactionId> {
        match self.state {
            DeleteState::ConfirmPending(id) => {
                self.state = DeleteState::Idle;
                Some(id)
            }
            _ => None,
        }
    }
}

impl Default for DeleteFlow {
    fn default() -> Self {
        Self::new()
    }
}
