//! Split Payment Ledger Library
//! # Overview
//!
//! This library implements a split-payment ledger: a sender attaches a deposit
//! and names recipients with index-aligned amounts; the ledger validates the
//! request, credits every recipient and appends an immutable record to an
//! append-only history that can be read back page by page.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Address, ValueAmount, PaymentRecord, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::validator`] - Stateless request validation
//!   - [`core::ledger`] - Balance book and history behind a single lock
//!   - [`core::history_store`] - Append-only payment history
//!   - [`core::gateway`] - Validation, execution and paginated history queries
//! - [`io`] - CSV input and history output
//! - [`strategy`] - Sync and async processing pipelines
//! - [`logging`] - `tracing` subscriber setup
//!
//! # Payment Rules
//!
//! A request is accepted when:
//!
//! - it names at least one recipient and exactly as many amounts
//! - every recipient passes the address predicate (EVM syntax by default)
//! - every amount is greater than zero
//! - the deposit equals the sum of the amounts
//!
//! Rejected requests leave balances and history untouched.
//!
//! # Example
//!
//! ```
//! use split_payment_ledger::core::PaymentGateway;
//! use split_payment_ledger::types::{Address, ValueAmount};
//!
//! let gateway = PaymentGateway::new();
//! let alice = Address::from("0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
//!
//! let record = gateway
//!     .submit(
//!         Address::from("0x1111111111111111111111111111111111111111"),
//!         vec![alice.clone()],
//!         vec![ValueAmount::from(10u64)],
//!         ValueAmount::from(10u64),
//!     )
//!     .unwrap();
//!
//! assert_eq!(record.total(), ValueAmount::from(10u64));
//! assert_eq!(gateway.balance_of(&alice), ValueAmount::from(10u64));
//! assert_eq!(gateway.fetch_history(0, 10).unwrap().len(), 1);
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod strategy;
pub mod types;

pub use core::{GatewayConfig, PaymentGateway, RequestValidator, SplitLedger};
pub use io::write_history_csv;
pub use types::{
    Address, ErrorKind, GatewayError, PaymentRecord, SplitRequest, Timestamp, ValidatedRequest,
    ValueAmount,
};
