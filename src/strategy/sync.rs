//! Synchronous processing strategy
//!
//! Single-threaded pipeline: rows are streamed from the `SyncReader` one at a
//! time and submitted to a [`PaymentGateway`](crate::core::PaymentGateway)
//! in file order. Once the input is exhausted the requested part of the
//! history is written to the output.
//!
//! Memory usage is O(history), not O(file): the input is never loaded whole.

use crate::io::sync_reader::SyncReader;
use crate::strategy::{report_outcome, write_history, ProcessingConfig, ProcessingStrategy};
use std::io::Write;
use std::path::Path;
use tracing::warn;

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use split_payment_ledger::strategy::{
///     ProcessingConfig, ProcessingStrategy, SyncProcessingStrategy,
/// };
/// use std::path::Path;
/// use std::io;
///
/// let strategy = SyncProcessingStrategy::new(ProcessingConfig::default());
/// let mut output = io::stdout();
///
/// strategy.process(Path::new("payments.csv"), &mut output)
///     .expect("Processing failed");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SyncProcessingStrategy {
    config: ProcessingConfig,
}

impl SyncProcessingStrategy {
    pub fn new(config: ProcessingConfig) -> Self {
        Self { config }
    }
}

impl ProcessingStrategy for SyncProcessingStrategy {
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), String> {
        let gateway = self.config.build_gateway();
        let reader = SyncReader::new(input_path, self.config.unit)?;

        for row in reader {
            match row {
                Ok(instruction) => {
                    let sender = instruction.sender.clone();
                    let result = gateway.submit(
                        instruction.sender,
                        instruction.request.recipients,
                        instruction.request.amounts,
                        instruction.deposit,
                    );
                    report_outcome(&sender, &result);
                }
                Err(e) => warn!(error = %e, "skipping malformed row"),
            }
        }

        write_history(&gateway, self.config.page, output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::AmountUnit;
    use crate::strategy::PageRequest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "sender,recipients,amounts,deposit\n";
    const S: &str = "0x1111111111111111111111111111111111111111";
    const A: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
    const B: &str = "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn fixed_config() -> ProcessingConfig {
        ProcessingConfig {
            timestamp: Some(1_700_000_000),
            ..ProcessingConfig::default()
        }
    }

    fn run(config: ProcessingConfig, content: &str) -> String {
        let file = create_temp_csv(content);
        let strategy = SyncProcessingStrategy::new(config);
        let mut output = Vec::new();
        strategy.process(file.path(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_sync_strategy_records_split() {
        let content = format!("{HEADER}{S},{A};{B},10;20,30\n");

        let output = run(fixed_config(), &content);

        assert_eq!(
            output,
            format!(
                "index,sender,timestamp,recipients,amounts,total\n\
                 0,{S},1700000000,{A};{B},10;20,30\n"
            )
        );
    }

    #[test]
    fn test_sync_strategy_skips_rejected_requests() {
        let content = format!(
            "{HEADER}\
             {S},{A},10,11\n\
             {S},not-an-address,10,10\n\
             {S},{A};{B},10,10\n\
             {S},{B},5,5\n"
        );

        let output = run(fixed_config(), &content);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], format!("0,{S},1700000000,{B},5,5"));
    }

    #[test]
    fn test_sync_strategy_parses_ether_units() {
        let config = ProcessingConfig {
            unit: AmountUnit::Ether,
            ..fixed_config()
        };
        let content = format!("{HEADER}{S},{A},1.5,1.5\n");

        let output = run(config, &content);

        assert!(output.contains(",1500000000000000000,1500000000000000000"));
    }

    #[test]
    fn test_sync_strategy_respects_page_request() {
        let config = ProcessingConfig {
            page: PageRequest {
                start: 1,
                limit: Some(1),
            },
            ..fixed_config()
        };
        let content = format!(
            "{HEADER}\
             {S},{A},1,1\n\
             {S},{A},2,2\n\
             {S},{A},3,3\n"
        );

        let output = run(config, &content);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], format!("1,{S},1700000000,{A},2,2"));
    }

    #[test]
    fn test_sync_strategy_handles_empty_input() {
        let output = run(fixed_config(), HEADER);
        assert_eq!(output, "index,sender,timestamp,recipients,amounts,total\n");
    }

    #[test]
    fn test_sync_strategy_handles_missing_file() {
        let strategy = SyncProcessingStrategy::default();
        let mut output = Vec::new();

        let result = strategy.process(Path::new("nonexistent.csv"), &mut output);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Failed to open file"));
    }
}
