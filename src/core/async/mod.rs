//! Asynchronous batch processing
//!
//! Validation is a pure function of a request, so the requests of a batch can
//! be validated in parallel across tokio worker threads. Execution is not:
//! validated requests are committed to the shared gateway one at a time, in
//! input order, so the resulting history is identical to sequential
//! processing.

pub mod batch_processor;

pub use batch_processor::{BatchProcessor, ProcessingResult};
