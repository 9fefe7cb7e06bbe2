//! Asynchronous CSV reader with batch interface
//!
//! Reads payment instructions from any `futures` `AsyncRead` source in
//! batches, for the async processing strategy.
//!
//! # Architecture
//!
//! ```text
//! CSV Reader → AsyncReader → Batches of PaymentInstructions
//!                  ↓
//!           csv_format module
//!           (CsvRecord, convert_csv_record)
//! ```

use crate::cli::AmountUnit;
use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::PaymentInstruction;
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;
use tracing::warn;

/// Asynchronous CSV reader
///
/// Maintains streaming behavior: only one batch is held in memory at a time.
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,
    unit: AmountUnit,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    /// Create a new AsyncReader from an async reader
    pub fn new(reader: R, unit: AmountUnit) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self { csv_reader, unit }
    }

    /// Read a batch of payment instructions
    ///
    /// Reads up to `batch_size` records. Rows that fail to parse are logged
    /// and skipped; they do not count towards the batch size.
    ///
    /// # Returns
    ///
    /// The converted instructions, in file order. An empty vector means the
    /// end of the input was reached.
    pub async fn read_batch(&mut self, batch_size: usize) -> Vec<PaymentInstruction> {
        let mut batch = Vec::with_capacity(batch_size);
        let unit = self.unit;
        let mut records = self.csv_reader.deserialize::<CsvRecord>();

        while batch.len() < batch_size {
            match records.next().await {
                Some(Ok(csv_record)) => match convert_csv_record(csv_record, unit) {
                    Ok(instruction) => batch.push(instruction),
                    Err(e) => warn!(error = %e, "skipping malformed record"),
                },
                Some(Err(e)) => warn!(error = %e, "CSV parse error"),
                None => break,
            }
        }

        batch
    }
}
