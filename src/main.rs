//! Split Payment Ledger CLI
//!
//! Command-line interface for replaying split-payment requests from CSV files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- payments.csv > history.csv
//! cargo run -- --strategy sync payments.csv > history.csv
//! cargo run -- --unit ether --timestamp 1700000000 payments.csv > history.csv
//! cargo run -- --start 20 --limit 10 payments.csv > page.csv
//! cargo run -- --strategy async --batch-size 2000 --max-concurrent 8 payments.csv > history.csv
//! ```
//!
//! The program reads requests from the input CSV file, submits them to the
//! ledger using the selected processing strategy, and writes the requested
//! part of the payment history to stdout. Rejected requests are logged to
//! stderr (see `RUST_LOG`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, file not readable, etc.)

use split_payment_ledger::{cli, logging, strategy};
use std::process;

fn main() {
    logging::init_tracing();

    let args = cli::parse_args();

    let strategy = strategy::create_strategy(args.strategy.clone(), args.to_processing_config());

    let mut output = std::io::stdout();
    if let Err(e) = strategy.process(&args.input_file, &mut output) {
        tracing::error!(error = %e, "processing failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
