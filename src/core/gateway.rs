//! Payment gateway
//!
//! The [`PaymentGateway`] is the boundary the outside world calls through. It
//! is the only component that knows about both validation and storage:
//!
//! ```text
//! submit:        caller -> RequestValidator -> SplitLedger::execute -> HistoryStore::append
//! fetch_history: caller -> SplitLedger::range -> HistoryStore::range
//! ```
//!
//! Validator, ledger and history errors are surfaced as [`GatewayError`]
//! without losing their original kind.

use crate::core::clock::SystemClock;
use crate::core::history_store::MemoryHistoryStore;
use crate::core::ledger::{LedgerSummary, SplitLedger};
use crate::core::traits::{Clock, HistoryStore};
use crate::core::validator::RequestValidator;
use crate::types::{
    Address, GatewayError, PaymentRecord, SplitRequest, ValidatedRequest, ValueAmount,
};
use std::sync::Arc;
use tracing::warn;

/// Gateway configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Upper bound on the number of records a single history page returns
    pub max_page_size: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self { max_page_size: 100 }
    }
}

impl GatewayConfig {
    /// Create a new GatewayConfig, falling back to defaults for zero values
    pub fn new(max_page_size: usize) -> Self {
        let default = Self::default();

        let max_page_size = if max_page_size == 0 {
            warn!(
                max_page_size,
                default = default.max_page_size,
                "invalid max_page_size, using default"
            );
            default.max_page_size
        } else {
            max_page_size
        };

        Self { max_page_size }
    }
}

/// Entry point composing validation, execution and history queries
pub struct PaymentGateway<H = MemoryHistoryStore> {
    validator: RequestValidator,
    ledger: SplitLedger<H>,
    clock: Arc<dyn Clock>,
    config: GatewayConfig,
}

impl PaymentGateway {
    /// Create a gateway over an empty in-memory ledger with default settings
    pub fn new() -> Self {
        Self::with_ledger(SplitLedger::new())
    }
}

impl Default for PaymentGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: HistoryStore> PaymentGateway<H> {
    /// Create a gateway over an existing ledger
    ///
    /// Uses the EVM address predicate, the system clock and the default
    /// configuration; override them with the `with_*` methods.
    pub fn with_ledger(ledger: SplitLedger<H>) -> Self {
        PaymentGateway {
            validator: RequestValidator::default(),
            ledger,
            clock: Arc::new(SystemClock::new()),
            config: GatewayConfig::default(),
        }
    }

    pub fn with_validator(mut self, validator: RequestValidator) -> Self {
        self.validator = validator;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_config(mut self, config: GatewayConfig) -> Self {
        self.config = config;
        self
    }

    pub fn validator(&self) -> &RequestValidator {
        &self.validator
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Validate and execute a split payment
    ///
    /// # Arguments
    ///
    /// * `sender` - Address attaching the deposit
    /// * `recipients` - Recipients in payout order
    /// * `amounts` - Amounts, index-aligned with `recipients`
    /// * `deposit` - Value attached to the call; must equal the sum of `amounts`
    ///
    /// # Errors
    ///
    /// Validation errors are returned before the ledger is touched. A
    /// `ValueMismatch` leaves the ledger unchanged; the caller's transport is
    /// responsible for returning the deposit.
    pub fn submit(
        &self,
        sender: Address,
        recipients: Vec<Address>,
        amounts: Vec<ValueAmount>,
        deposit: ValueAmount,
    ) -> Result<PaymentRecord, GatewayError> {
        let validated = self
            .validator
            .validate(SplitRequest::new(recipients, amounts))?;
        self.submit_validated(sender, validated, deposit)
    }

    /// Execute a request that has already been validated
    pub fn submit_validated(
        &self,
        sender: Address,
        request: ValidatedRequest,
        deposit: ValueAmount,
    ) -> Result<PaymentRecord, GatewayError> {
        Ok(self
            .ledger
            .execute(sender, request, &deposit, self.clock.as_ref())?)
    }

    /// One page of history starting at index `start`
    ///
    /// `limit` is capped at [`GatewayConfig::max_page_size`]. Pages past the
    /// end of the history are empty rather than an error.
    ///
    /// # Errors
    ///
    /// `InvalidPageLimit` if `limit` is zero.
    pub fn fetch_history(
        &self,
        start: usize,
        limit: usize,
    ) -> Result<Vec<PaymentRecord>, GatewayError> {
        if limit == 0 {
            return Err(GatewayError::InvalidPageLimit { limit });
        }
        let limit = limit.min(self.config.max_page_size);
        Ok(self.ledger.range(start, start.saturating_add(limit)))
    }

    /// Single history record
    pub fn get(&self, index: usize) -> Result<PaymentRecord, GatewayError> {
        Ok(self.ledger.get(index)?)
    }

    pub fn count(&self) -> usize {
        self.ledger.count()
    }

    pub fn balance_of(&self, address: &Address) -> ValueAmount {
        self.ledger.balance_of(address)
    }

    pub fn total_distributed(&self) -> ValueAmount {
        self.ledger.total_distributed()
    }

    pub fn summary(&self) -> LedgerSummary {
        self.ledger.summary()
    }
}
