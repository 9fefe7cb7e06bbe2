//! Split-payment requests and history records
//!
//! This module defines the transient request types a caller submits and the
//! immutable [`PaymentRecord`] the ledger appends to its history on success.

use super::address::Address;
use super::amount::ValueAmount;

/// Seconds since the Unix epoch
pub type Timestamp = u64;

/// A proposed fan-out of value to several recipients
///
/// `recipients[i]` is meant to receive `amounts[i]`. Nothing is checked at
/// construction time; see [`RequestValidator`](crate::core::RequestValidator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitRequest {
    /// Recipients in submission order
    pub recipients: Vec<Address>,

    /// Amounts, index-aligned with `recipients`
    pub amounts: Vec<ValueAmount>,
}

impl SplitRequest {
    pub fn new(recipients: Vec<Address>, amounts: Vec<ValueAmount>) -> Self {
        SplitRequest {
            recipients,
            amounts,
        }
    }
}

/// A [`SplitRequest`] that passed validation
///
/// Only the request validator can build one, so holding a `ValidatedRequest`
/// guarantees equal non-empty lengths, well-formed addresses and non-zero
/// amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest(SplitRequest);

impl ValidatedRequest {
    pub(crate) fn new(request: SplitRequest) -> Self {
        ValidatedRequest(request)
    }

    pub fn recipients(&self) -> &[Address] {
        &self.0.recipients
    }

    pub fn amounts(&self) -> &[ValueAmount] {
        &self.0.amounts
    }

    /// Exact sum of all requested amounts
    pub fn total(&self) -> ValueAmount {
        ValueAmount::sum(&self.0.amounts)
    }

    pub fn into_inner(self) -> SplitRequest {
        self.0
    }
}

/// One decoded input row: who pays, how the value is split, and the deposit
/// attached to the call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentInstruction {
    pub sender: Address,
    pub request: SplitRequest,
    pub deposit: ValueAmount,
}

/// Immutable history entry for one executed split payment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRecord {
    /// Address that attached the deposit
    pub sender: Address,

    /// Execution time, seconds since the Unix epoch
    pub timestamp: Timestamp,

    /// Recipients in submission order
    pub recipients: Vec<Address>,

    /// Amounts credited, index-aligned with `recipients`
    pub amounts: Vec<ValueAmount>,
}

impl PaymentRecord {
    /// Total value distributed by this payment (equals the deposit)
    pub fn total(&self) -> ValueAmount {
        ValueAmount::sum(&self.amounts)
    }
}
