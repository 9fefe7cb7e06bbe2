//! Processing strategy module
//!
//! This module defines the Strategy pattern for complete processing pipelines:
//! reading split-payment requests from CSV, submitting them through a
//! [`PaymentGateway`], and writing the resulting history. Different
//! implementations (synchronous, asynchronous batch) are selected at runtime.

use crate::cli::{AmountUnit, StrategyType};
use crate::core::{Clock, FixedClock, GatewayConfig, PaymentGateway, SystemClock};
use crate::io::csv_format::write_history_csv;
use crate::types::{Address, GatewayError, PaymentRecord, Timestamp};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Which part of the history to print after processing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageRequest {
    /// Index of the first record
    pub start: usize,

    /// Single page of at most this many records; `None` prints everything
    /// from `start` on
    pub limit: Option<usize>,
}

/// Everything a processing run needs besides the input path
#[derive(Clone, Debug, Default)]
pub struct ProcessingConfig {
    pub batch: BatchConfig,
    pub gateway: GatewayConfig,
    pub unit: AmountUnit,
    /// Fixed record timestamp; the system clock is used when absent
    pub timestamp: Option<Timestamp>,
    pub page: PageRequest,
}

impl ProcessingConfig {
    /// Build a fresh gateway configured for this run
    pub fn build_gateway(&self) -> PaymentGateway {
        let clock: Arc<dyn Clock> = match self.timestamp {
            Some(timestamp) => Arc::new(FixedClock(timestamp)),
            None => Arc::new(SystemClock::new()),
        };

        PaymentGateway::new()
            .with_clock(clock)
            .with_config(self.gateway.clone())
    }
}

/// Processing strategy trait for complete pipelines
pub trait ProcessingStrategy: Send + Sync {
    /// Process requests from input file and write the history to output
    ///
    /// # Returns
    ///
    /// * `Ok(())` if processing completed (rejected requests are not fatal)
    /// * `Err(String)` if a fatal error occurred
    ///
    /// # Errors
    ///
    /// Returns an error if the input file cannot be opened or the output
    /// cannot be written. Rejected or malformed requests are logged and
    /// processing continues with the next one.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), String>;
}

/// Create a processing strategy based on the specified strategy type
pub fn create_strategy(
    strategy_type: StrategyType,
    config: ProcessingConfig,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy::new(config)),
        StrategyType::Async => Box::new(AsyncProcessingStrategy::new(config)),
    }
}

/// Log a rejected submission
pub(crate) fn report_outcome(sender: &Address, result: &Result<PaymentRecord, GatewayError>) {
    if let Err(e) = result {
        warn!(sender = %sender, kind = ?e.kind(), error = %e, "payment rejected");
    }
}

/// Write the requested part of the history to `output`
///
/// Without a limit, the history is read page by page through
/// [`PaymentGateway::fetch_history`] until an empty page comes back.
pub(crate) fn write_history(
    gateway: &PaymentGateway,
    page: PageRequest,
    output: &mut dyn Write,
) -> Result<(), String> {
    let records = match page.limit {
        Some(limit) => gateway
            .fetch_history(page.start, limit)
            .map_err(|e| e.to_string())?,
        None => {
            let page_size = gateway.config().max_page_size;
            let mut records = Vec::new();
            loop {
                let next = gateway
                    .fetch_history(page.start + records.len(), page_size)
                    .map_err(|e| e.to_string())?;
                if next.is_empty() {
                    break;
                }
                records.extend(next);
            }
            records
        }
    };

    write_history_csv(page.start, &records, output)
}
