//! Split-payment ledger
//!
//! This module provides the [`SplitLedger`], which owns the authoritative
//! state: the credited balance of every recipient and the append-only payment
//! history.
//!
//! # Atomicity
//!
//! [`SplitLedger::execute`] holds the write lock for its whole transaction:
//! summing the amounts, checking the deposit, reading the clock, appending the
//! history record and crediting every recipient. The record is appended before
//! the first credit, so a rejected call or a history store that fails mid-way
//! leaves balances untouched, and no reader can observe a payment that is only
//! partly applied.
//!
//! The timestamp is taken under the same lock, so history order is also
//! timestamp order for any monotonic [`Clock`].
//!
//! # Concurrency
//!
//! Reads (`count`, `get`, `range`, `balance_of`, `summary`) share the read
//! lock and never block one another.

use crate::core::history_store::MemoryHistoryStore;
use crate::core::traits::{Clock, HistoryStore};
use crate::types::{
    Address, ExecutionError, HistoryError, PaymentRecord, ValidatedRequest, ValueAmount,
};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// Consistent view of the ledger totals taken under a single read lock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerSummary {
    /// Number of history records
    pub payments: usize,

    /// Value credited to recipients across all payments
    pub total_distributed: ValueAmount,
}

struct LedgerState<H> {
    balances: HashMap<Address, ValueAmount>,
    total_distributed: ValueAmount,
    history: H,
}

/// Single-writer ledger executing split payments as atomic transactions
pub struct SplitLedger<H = MemoryHistoryStore> {
    state: RwLock<LedgerState<H>>,
}

impl SplitLedger {
    /// Create an empty ledger backed by an in-memory history
    pub fn new() -> Self {
        Self::with_store(MemoryHistoryStore::new())
    }
}

impl Default for SplitLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: HistoryStore> SplitLedger<H> {
    /// Create an empty ledger on top of the given history store
    pub fn with_store(history: H) -> Self {
        SplitLedger {
            state: RwLock::new(LedgerState {
                balances: HashMap::new(),
                total_distributed: ValueAmount::zero(),
                history,
            }),
        }
    }

    /// Execute a validated split payment
    ///
    /// `deposit` is the value the caller attached to this call. It must equal
    /// the sum of the requested amounts exactly: a short deposit is not
    /// partially paid out and an excess is not refunded here. `clock` is read
    /// once, while the write lock is held.
    ///
    /// # Returns
    ///
    /// The history record appended for this payment.
    ///
    /// # Errors
    ///
    /// `ValueMismatch { expected, got }` if the deposit differs from the sum.
    /// Nothing is credited and no record is appended in that case.
    pub fn execute(
        &self,
        sender: Address,
        request: ValidatedRequest,
        deposit: &ValueAmount,
        clock: &dyn Clock,
    ) -> Result<PaymentRecord, ExecutionError> {
        let mut state = self.write_state();

        let total = request.total();
        if total != *deposit {
            return Err(ExecutionError::value_mismatch(total, deposit.clone()));
        }

        let request = request.into_inner();
        let record = PaymentRecord {
            sender,
            timestamp: clock.now(),
            recipients: request.recipients,
            amounts: request.amounts,
        };

        // History first: a store that panics here must leave no credits behind
        let index = state.history.append(record.clone());
        for (recipient, amount) in record.recipients.iter().zip(&record.amounts) {
            *state.balances.entry(recipient.clone()).or_default() += amount;
        }
        state.total_distributed += &total;

        debug!(
            index,
            sender = %record.sender,
            recipients = record.recipients.len(),
            total = %total,
            "split payment committed"
        );

        Ok(record)
    }

    /// Number of payments recorded
    pub fn count(&self) -> usize {
        self.read_state().history.count()
    }

    /// Get the payment at `index`
    pub fn get(&self, index: usize) -> Result<PaymentRecord, HistoryError> {
        self.read_state().history.get(index)
    }

    /// Payments in `[start, end)`, clamped to the recorded range
    pub fn range(&self, start: usize, end: usize) -> Vec<PaymentRecord> {
        self.read_state().history.range(start, end)
    }

    /// Total value credited to `address` (zero if it never received anything)
    pub fn balance_of(&self, address: &Address) -> ValueAmount {
        self.read_state()
            .balances
            .get(address)
            .cloned()
            .unwrap_or_default()
    }

    /// Value credited to recipients across all payments
    pub fn total_distributed(&self) -> ValueAmount {
        self.read_state().total_distributed.clone()
    }

    /// Payment count and distributed total from the same snapshot
    pub fn summary(&self) -> LedgerSummary {
        let state = self.read_state();
        LedgerSummary {
            payments: state.history.count(),
            total_distributed: state.total_distributed.clone(),
        }
    }

    // Balances are only touched after the record is stored, so a guard
    // recovered from a poisoned lock still sees a consistent ledger.
    fn read_state(&self) -> RwLockReadGuard<'_, LedgerState<H>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, LedgerState<H>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
