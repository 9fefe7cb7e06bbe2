//! Error types for the split-payment ledger
//!
//! Every rejected operation surfaces one of these typed errors; nothing is
//! swallowed and nothing is retried automatically.
//!
//! # Error Categories
//!
//! - **Validation Errors**: caller input is malformed (count mismatch, bad
//!   address, zero amount). Recoverable by correcting the input.
//! - **Execution Errors**: the attached deposit does not equal the requested
//!   total. Nothing is transferred and no history is written.
//! - **History Errors**: out-of-bounds single-record lookups.
//! - **Gateway Errors**: the union of the above plus pagination errors, with
//!   the original kind preserved.
//! - **Amount Parse Errors**: textual amounts that are not valid base-unit or
//!   decimal-unit numbers.

use super::amount::ValueAmount;
use thiserror::Error;

/// Structural or semantic problem with a split request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Recipients and amounts differ in length, or the request is empty
    #[error("Recipient/amount count mismatch: {recipients} recipients, {amounts} amounts")]
    CountMismatch {
        /// Number of recipients supplied
        recipients: usize,
        /// Number of amounts supplied
        amounts: usize,
    },

    /// The recipient at `index` fails the address-syntax predicate
    #[error("Invalid address '{address}' at position {index}")]
    InvalidAddress {
        /// Zero-based position in the request
        index: usize,
        /// The rejected address
        address: String,
    },

    /// The amount at `index` is not strictly positive
    #[error("Invalid amount at position {index}: amounts must be greater than zero")]
    InvalidAmount {
        /// Zero-based position in the request
        index: usize,
    },
}

/// Failure while executing a validated request against the ledger
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// The deposit differs from the sum of the requested amounts
    ///
    /// The call is rejected as a whole; the enclosing transport returns the
    /// deposit to the sender.
    #[error("Deposit mismatch: requested amounts total {expected}, deposit was {got}")]
    ValueMismatch {
        /// Sum of the requested amounts
        expected: ValueAmount,
        /// Deposit attached to the call
        got: ValueAmount,
    },
}

/// Failure while reading the payment history
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("History index {index} out of range (count {count})")]
    IndexOutOfRange { index: usize, count: usize },
}

/// Error surfaced by the payment gateway to its callers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error(transparent)]
    History(#[from] HistoryError),

    /// A history page was requested with a zero limit
    #[error("Invalid page limit {limit}: must be greater than zero")]
    InvalidPageLimit { limit: usize },
}

/// Flat classification of gateway errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    CountMismatch,
    InvalidAddress,
    InvalidAmount,
    ValueMismatch,
    IndexOutOfRange,
    InvalidPageLimit,
}

impl GatewayError {
    /// The distinguishing kind of this error, independent of its origin layer
    pub fn kind(&self) -> ErrorKind {
        match self {
            GatewayError::Validation(ValidationError::CountMismatch { .. }) => {
                ErrorKind::CountMismatch
            }
            GatewayError::Validation(ValidationError::InvalidAddress { .. }) => {
                ErrorKind::InvalidAddress
            }
            GatewayError::Validation(ValidationError::InvalidAmount { .. }) => {
                ErrorKind::InvalidAmount
            }
            GatewayError::Execution(ExecutionError::ValueMismatch { .. }) => {
                ErrorKind::ValueMismatch
            }
            GatewayError::History(HistoryError::IndexOutOfRange { .. }) => {
                ErrorKind::IndexOutOfRange
            }
            GatewayError::InvalidPageLimit { .. } => ErrorKind::InvalidPageLimit,
        }
    }
}

/// Textual amount that cannot be turned into a [`ValueAmount`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountParseError {
    #[error("Amount is empty")]
    Empty,

    #[error("Amount '{input}' is not a valid number")]
    InvalidDigits { input: String },

    #[error("Amount '{input}' is negative")]
    Negative { input: String },

    /// More fractional digits than the unit supports
    #[error("Amount '{input}' has more than {decimals} decimal places")]
    TooPrecise { input: String, decimals: u32 },
}

// Helper functions for creating common errors

impl ValidationError {
    /// Create a CountMismatch error
    pub fn count_mismatch(recipients: usize, amounts: usize) -> Self {
        ValidationError::CountMismatch {
            recipients,
            amounts,
        }
    }

    /// Create an InvalidAddress error
    pub fn invalid_address(index: usize, address: &str) -> Self {
        ValidationError::InvalidAddress {
            index,
            address: address.to_string(),
        }
    }
}

impl ExecutionError {
    /// Create a ValueMismatch error
    pub fn value_mismatch(expected: ValueAmount, got: ValueAmount) -> Self {
        ExecutionError::ValueMismatch { expected, got }
    }
}

impl AmountParseError {
    /// Create an InvalidDigits error
    pub fn invalid_digits(input: &str) -> Self {
        AmountParseError::InvalidDigits {
            input: input.to_string(),
        }
    }
}
