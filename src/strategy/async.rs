//! Asynchronous batch processing strategy
//!
//! This module provides a multi-threaded implementation of the
//! ProcessingStrategy trait. Requests are read in batches; each batch is
//! validated in parallel and then committed in file order.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size, max_concurrent_batches)
//!     ├── AsyncReader (batch CSV reading)
//!     └── BatchProcessor (parallel validation, ordered commits)
//!         └── PaymentGateway (shared ledger behind a lock)
//! ```
//!
//! Batches are processed one after another, so the resulting history is
//! identical to the one the synchronous strategy produces for the same input.

use crate::core::r#async::BatchProcessor;
use crate::io::async_reader::AsyncReader;
use crate::strategy::{report_outcome, write_history, ProcessingConfig, ProcessingStrategy};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Configuration for batch processing
///
/// Controls how requests are batched and how many validation tasks run
/// concurrently within each batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    /// Number of requests per batch
    pub batch_size: usize,
    /// Maximum number of concurrent validation tasks (and worker threads)
    pub max_concurrent_batches: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            max_concurrent_batches: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig, falling back to defaults for zero values
    pub fn new(batch_size: usize, max_concurrent_batches: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            warn!(
                batch_size,
                default = default.batch_size,
                "invalid batch_size, using default"
            );
            default.batch_size
        } else {
            batch_size
        };

        let max_concurrent_batches = if max_concurrent_batches == 0 {
            warn!(
                max_concurrent_batches,
                default = default.max_concurrent_batches,
                "invalid max_concurrent_batches, using default"
            );
            default.max_concurrent_batches
        } else {
            max_concurrent_batches
        };

        Self {
            batch_size,
            max_concurrent_batches,
        }
    }
}

/// Asynchronous batch processing strategy
///
/// # Configuration
///
/// Uses `config.batch`:
/// - `batch_size`: Number of requests per batch (default: 1000)
/// - `max_concurrent_batches`: Worker threads and validation partitions
///   (default: CPU cores)
#[derive(Debug, Clone, Default)]
pub struct AsyncProcessingStrategy {
    config: ProcessingConfig,
}

impl AsyncProcessingStrategy {
    pub fn new(config: ProcessingConfig) -> Self {
        Self { config }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    /// Process requests from input file and write the history to output
    ///
    /// 1. Creates a tokio multi-threaded runtime
    /// 2. Reads requests in batches from CSV using AsyncReader
    /// 3. Validates each batch in parallel, commits it in order
    /// 4. Waits for a batch to finish before reading the next one
    /// 5. Writes the requested history page(s) to output
    ///
    /// Fatal errors (file not found, I/O errors, runtime errors) are returned
    /// immediately. Rejected requests are logged and processing continues.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), String> {
        let batch = &self.config.batch;

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(batch.max_concurrent_batches)
            .build()
            .map_err(|e| format!("Failed to create tokio runtime: {}", e))?;

        runtime.block_on(async {
            let gateway = Arc::new(self.config.build_gateway());
            let processor = BatchProcessor::new(Arc::clone(&gateway), batch.max_concurrent_batches);

            let file = tokio::fs::File::open(input_path)
                .await
                .map_err(|e| format!("Failed to open file '{}': {}", input_path.display(), e))?;

            // csv-async reads from futures::io, tokio::fs speaks tokio::io
            let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);
            let mut reader = AsyncReader::new(compat_file, self.config.unit);

            loop {
                let rows = reader.read_batch(batch.batch_size).await;
                if rows.is_empty() {
                    break;
                }

                debug!(size = rows.len(), "processing batch");
                for outcome in processor.process_batch(rows).await {
                    report_outcome(&outcome.sender, &outcome.result);
                }
            }

            write_history(&gateway, self.config.page, output)
        })
    }
}
