//! Core business logic module
//!
//! This module contains the split-payment components:
//! - `traits` - Seams consumed from the environment (history store, address predicate, clock)
//! - `validator` - Pure request validation
//! - `ledger` - Atomic execution and balance book
//! - `history_store` - Append-only in-memory payment history
//! - `gateway` - Boundary composing validation, execution and history queries
//! - `clock` - Timestamp sources
//! - `async` - Parallel batch validation with ordered commits

pub mod r#async;
pub mod clock;
pub mod gateway;
pub mod history_store;
pub mod ledger;
pub mod traits;
pub mod validator;

pub use clock::{FixedClock, SystemClock};
pub use gateway::{GatewayConfig, PaymentGateway};
pub use history_store::MemoryHistoryStore;
pub use ledger::{LedgerSummary, SplitLedger};
pub use r#async::BatchProcessor;
pub use traits::{AddressValidator, Clock, HistoryStore};
pub use validator::{EvmAddressValidator, RequestValidator};
