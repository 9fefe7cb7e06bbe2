//! In-memory payment history
//!
//! This module provides [`MemoryHistoryStore`], the default
//! [`HistoryStore`] backing the ledger. It is an append-only vector: records
//! are pushed at the end and never mutated or removed, so a record's index is
//! its position in submission order for the lifetime of the process.
//!
//! # Consistency
//!
//! The store itself is not synchronized. The ledger owns it behind its state
//! lock, which makes an append invisible to readers until it has completed.

use crate::core::traits::HistoryStore;
use crate::types::{HistoryError, PaymentRecord};

/// Append-only, vector-backed history
#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    /// Records in insertion order; the index is the record's position
    records: Vec<PaymentRecord>,
}

impl MemoryHistoryStore {
    /// Create a new empty history
    pub fn new() -> Self {
        MemoryHistoryStore {
            records: Vec::new(),
        }
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn append(&mut self, record: PaymentRecord) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    fn count(&self) -> usize {
        self.records.len()
    }

    fn get(&self, index: usize) -> Result<PaymentRecord, HistoryError> {
        self.records
            .get(index)
            .cloned()
            .ok_or(HistoryError::IndexOutOfRange {
                index,
                count: self.records.len(),
            })
    }

    fn range(&self, start: usize, end: usize) -> Vec<PaymentRecord> {
        let end = end.min(self.records.len());
        if start >= end {
            return Vec::new();
        }
        self.records[start..end].to_vec()
    }
}
