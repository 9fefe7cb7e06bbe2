//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `address`: Participant identifiers
//! - `amount`: Unbounded-precision value amounts
//! - `payment`: Split requests, payment instructions and history records
//! - `error`: Error types for validation, execution, history and the gateway

pub mod address;
pub mod amount;
pub mod error;
pub mod payment;

pub use address::Address;
pub use amount::{ValueAmount, ETHER_DECIMALS};
pub use error::{
    AmountParseError, ErrorKind, ExecutionError, GatewayError, HistoryError, ValidationError,
};
pub use payment::{PaymentInstruction, PaymentRecord, SplitRequest, Timestamp, ValidatedRequest};
