//! Batch processing with parallel validation and ordered commits
//!
//! # Architecture
//!
//! ```text
//! BatchProcessor
//!     ├── Arc<PaymentGateway>  (shared ledger, serialized commits)
//!     └── partitions           (number of concurrent validation tasks)
//! ```
//!
//! A batch is split into contiguous partitions. Each partition is validated
//! by its own tokio task; results are then gathered partition by partition
//! and committed in the original row order.

use std::sync::Arc;

use tracing::error;

use crate::core::gateway::PaymentGateway;
use crate::core::history_store::MemoryHistoryStore;
use crate::core::traits::HistoryStore;
use crate::types::{
    Address, GatewayError, PaymentInstruction, PaymentRecord, ValidatedRequest, ValidationError,
    ValueAmount,
};

/// Outcome of one instruction in a batch
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    /// Address that submitted the payment
    pub sender: Address,

    /// The committed record, or why the payment was rejected
    pub result: Result<PaymentRecord, GatewayError>,
}

/// An instruction after validation: sender, deposit and the validation outcome
pub type Validated = (Address, ValueAmount, Result<ValidatedRequest, ValidationError>);

/// Validates batches concurrently and commits them in order
pub struct BatchProcessor<H = MemoryHistoryStore> {
    gateway: Arc<PaymentGateway<H>>,
    partitions: usize,
}

impl<H: HistoryStore> BatchProcessor<H> {
    /// Create a new BatchProcessor
    ///
    /// # Arguments
    ///
    /// * `gateway` - Shared gateway the validated payments are committed to
    /// * `partitions` - Maximum number of concurrent validation tasks per batch
    pub fn new(gateway: Arc<PaymentGateway<H>>, partitions: usize) -> Self {
        Self {
            gateway,
            partitions: partitions.max(1),
        }
    }

    /// Split a batch into at most `partitions` contiguous, order-preserving chunks
    pub fn partition(&self, batch: Vec<PaymentInstruction>) -> Vec<Vec<PaymentInstruction>> {
        let chunk_size = batch.len().div_ceil(self.partitions).max(1);
        let mut rows = batch.into_iter().peekable();
        let mut chunks = Vec::new();

        while rows.peek().is_some() {
            chunks.push(rows.by_ref().take(chunk_size).collect());
        }

        chunks
    }

    /// Validate every instruction of a batch, partitions in parallel
    ///
    /// The returned vector is in the same order as the input batch. If a
    /// validation task panics its partition is dropped and logged.
    pub async fn validate_batch(&self, batch: Vec<PaymentInstruction>) -> Vec<Validated> {
        let mut tasks = Vec::new();
        for chunk in self.partition(batch) {
            let validator = self.gateway.validator().clone();
            tasks.push(tokio::spawn(async move {
                chunk
                    .into_iter()
                    .map(|instruction| {
                        let outcome = validator.validate(instruction.request);
                        (instruction.sender, instruction.deposit, outcome)
                    })
                    .collect::<Vec<Validated>>()
            }));
        }

        let mut validated = Vec::new();
        for task in tasks {
            match task.await {
                Ok(partition) => validated.extend(partition),
                Err(e) => error!(error = %e, "validation task failed"),
            }
        }

        validated
    }

    /// Validate a batch in parallel, then commit it in input order
    ///
    /// # Guarantees
    ///
    /// - History order equals the order of the input batch
    /// - Every validated instruction yields exactly one result
    /// - Rejected instructions leave the ledger untouched
    ///
    /// Rows of a partition whose validation task panicked yield no result and
    /// are never committed. The failure is logged by `validate_batch`.
    pub async fn process_batch(&self, batch: Vec<PaymentInstruction>) -> Vec<ProcessingResult> {
        let validated = self.validate_batch(batch).await;

        validated
            .into_iter()
            .map(|(sender, deposit, outcome)| {
                let result = match outcome {
                    Ok(request) => {
                        self.gateway
                            .submit_validated(sender.clone(), request, deposit)
                    }
                    Err(e) => Err(e.into()),
                };
                ProcessingResult { sender, result }
            })
            .collect()
    }
}

impl<H> Clone for BatchProcessor<H> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            partitions: self.partitions,
        }
    }
}
