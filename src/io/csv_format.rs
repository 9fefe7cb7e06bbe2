//! CSV format handling for split-payment requests and history output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to payment instructions
//! - History output serialization
//!
//! # Input format
//!
//! ```text
//! sender,recipients,amounts,deposit
//! 0x1111...,0xaaaa...;0xbbbb...,3;7,10
//! ```
//!
//! Recipient and amount lists are `;`-separated. Amounts and deposits are read
//! in the configured [`AmountUnit`].
//!
//! # Output format
//!
//! ```text
//! index,sender,timestamp,recipients,amounts,total
//! ```
//!
//! Amounts are always written in base units.
//!
//! All functions are pure (no I/O besides the supplied writer) for easy testing.

use crate::cli::AmountUnit;
use crate::types::{
    Address, AmountParseError, PaymentInstruction, PaymentRecord, SplitRequest, ValueAmount,
    ETHER_DECIMALS,
};
use serde::Deserialize;
use std::io::Write;

const LIST_SEPARATOR: &str = ";";

/// CSV record structure for deserialization
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub sender: String,
    pub recipients: String,
    pub amounts: String,
    pub deposit: String,
}

/// Parse a single amount in the given unit
pub fn parse_amount(raw: &str, unit: AmountUnit) -> Result<ValueAmount, AmountParseError> {
    match unit {
        AmountUnit::Wei => raw.parse(),
        AmountUnit::Ether => ValueAmount::from_decimal_units(raw, ETHER_DECIMALS),
    }
}

fn split_list(field: &str) -> Vec<&str> {
    if field.trim().is_empty() {
        return Vec::new();
    }
    field.split(LIST_SEPARATOR).map(str::trim).collect()
}

/// Convert a CsvRecord to a PaymentInstruction
///
/// Only the textual form is checked here: every amount and the deposit must
/// parse in `unit`. Semantic checks (matching counts, address syntax, zero
/// amounts) are left to the request validator.
///
/// # Returns
///
/// Result containing either:
/// - Ok(PaymentInstruction) - Successfully converted record
/// - Err(String) - Error message describing the conversion failure
pub fn convert_csv_record(
    csv_record: CsvRecord,
    unit: AmountUnit,
) -> Result<PaymentInstruction, String> {
    let sender = csv_record.sender.trim();

    let recipients = split_list(&csv_record.recipients)
        .into_iter()
        .map(Address::from)
        .collect();

    let amounts = split_list(&csv_record.amounts)
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            parse_amount(raw, unit).map_err(|e| {
                format!(
                    "Invalid amount '{}' at position {} for sender {}: {}",
                    raw, index, sender, e
                )
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let deposit = parse_amount(&csv_record.deposit, unit).map_err(|e| {
        format!(
            "Invalid deposit '{}' for sender {}: {}",
            csv_record.deposit, sender, e
        )
    })?;

    Ok(PaymentInstruction {
        sender: Address::from(sender),
        request: SplitRequest::new(recipients, amounts),
        deposit,
    })
}

fn join_list<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

/// Write history records to CSV format
///
/// # Arguments
///
/// * `first_index` - History index of `records[0]`
/// * `records` - Consecutive history records
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_history_csv(
    first_index: usize,
    records: &[PaymentRecord],
    output: &mut dyn Write,
) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["index", "sender", "timestamp", "recipients", "amounts", "total"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    for (offset, record) in records.iter().enumerate() {
        writer
            .write_record(&[
                (first_index + offset).to_string(),
                record.sender.to_string(),
                record.timestamp.to_string(),
                join_list(&record.recipients),
                join_list(&record.amounts),
                record.total().to_string(),
            ])
            .map_err(|e| format!("Failed to write history record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}
