//! Core traits for history storage, address validation and time sources
//!
//! These are the seams the ledger consumes from its environment. Each has a
//! default implementation in this crate; callers can plug in their own (a
//! persistent history log, a chain-specific address predicate, a block-time
//! clock) without touching the ledger or the gateway.

use crate::types::{HistoryError, PaymentRecord, Timestamp};

/// Append-only log of completed payments
///
/// Indices start at 0, strictly increase and are never reused. Records are
/// returned in insertion order and are never modified after `append`.
pub trait HistoryStore: Send + Sync {
    /// Append a record and return its index
    fn append(&mut self, record: PaymentRecord) -> usize;

    /// Number of records appended so far
    fn count(&self) -> usize;

    /// Get the record at `index`
    fn get(&self, index: usize) -> Result<PaymentRecord, HistoryError>;

    /// Records in `[start, end)`, clamped to the stored range
    ///
    /// Returns an empty vector when `start >= count()` or `start >= end`.
    fn range(&self, start: usize, end: usize) -> Vec<PaymentRecord>;
}

/// Address-syntax predicate supplied by the platform
pub trait AddressValidator: Send + Sync {
    fn is_valid_address(&self, address: &str) -> bool;
}

impl<F> AddressValidator for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_valid_address(&self, address: &str) -> bool {
        self(address)
    }
}

/// Monotonic source of record timestamps
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}
