//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over payment instructions from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Iterator Interface
//!
//! SyncReader implements the Iterator trait, yielding
//! `Result<PaymentInstruction, String>` for each CSV row:
//!
//! ```no_run
//! use split_payment_ledger::cli::AmountUnit;
//! use split_payment_ledger::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("payments.csv"), AmountUnit::Wei).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(instruction) => println!("Payment from {}", instruction.sender),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual record parsing errors are yielded as Err variants in the iterator
//! - Line numbers are included in error messages for debugging

use crate::cli::AmountUnit;
use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::PaymentInstruction;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Synchronous CSV reader
///
/// Reads one record at a time; memory use does not grow with the file size.
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    unit: AmountUnit,
    line_num: usize,
}

impl SyncReader {
    /// Create a new SyncReader from a file path
    ///
    /// The CSV reader trims whitespace from all fields and uses an 8KB buffer.
    ///
    /// # Returns
    ///
    /// * `Ok(SyncReader)` if file opened successfully
    /// * `Err(String)` if file could not be opened
    pub fn new(path: &Path, unit: AmountUnit) -> Result<Self, String> {
        let file = File::open(path)
            .map_err(|e| format!("Failed to open file '{}': {}", path.display(), e))?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            unit,
            line_num: 0,
        })
    }
}

impl Iterator for SyncReader {
    type Item = Result<PaymentInstruction, String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvRecord>();

        let item = match deserializer.next()? {
            Ok(csv_record) => convert_csv_record(csv_record, self.unit)
                .map_err(|e| format!("Line {}: {}", self.line_num + 2, e)),
            Err(e) => Err(format!("Line {}: CSV parse error: {}", self.line_num + 2, e)),
        };
        self.line_num += 1;

        Some(item)
    }
}
