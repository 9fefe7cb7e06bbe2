use crate::core::GatewayConfig;
use crate::strategy::{BatchConfig, PageRequest, ProcessingConfig};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Execute split payments from a CSV file and print the resulting history
#[derive(Parser, Debug)]
#[command(name = "split-ledger")]
#[command(about = "Execute split payments and print the payment history", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing split-payment requests
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Processing strategy to use
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "async",
        help = "Processing strategy: 'sync' for sequential or 'async' for parallel validation"
    )]
    pub strategy: StrategyType,

    /// Number of requests per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of requests per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Maximum number of concurrent validation tasks (async mode only)
    #[arg(
        long = "max-concurrent",
        value_name = "COUNT",
        help = "Maximum number of concurrent validation tasks (default: CPU cores)"
    )]
    pub max_concurrent_batches: Option<usize>,

    /// Unit of the amount and deposit columns
    #[arg(
        long = "unit",
        value_name = "UNIT",
        default_value = "wei",
        help = "Unit of amounts and deposits: 'wei' (base units) or 'ether' (18 decimals)"
    )]
    pub unit: AmountUnit,

    /// Fixed timestamp for every record
    #[arg(
        long = "timestamp",
        value_name = "SECONDS",
        help = "Record timestamp in seconds since the epoch (default: system clock)"
    )]
    pub timestamp: Option<u64>,

    /// First history index to print
    #[arg(long = "start", value_name = "INDEX", default_value_t = 0)]
    pub start: usize,

    /// Print a single page of at most this many records
    #[arg(
        long = "limit",
        value_name = "COUNT",
        help = "Print one history page of at most COUNT records (default: whole history)"
    )]
    pub limit: Option<usize>,

    /// Upper bound on the size of one history page
    #[arg(
        long = "max-page-size",
        value_name = "COUNT",
        help = "Maximum records per history page (default: 100)"
    )]
    pub max_page_size: Option<usize>,
}

/// Available processing strategies
#[derive(Clone, Debug, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

/// Unit the amount columns of the input are expressed in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum AmountUnit {
    /// Integer base units
    #[default]
    Wei,
    /// Decimal whole units with 18 decimal places
    Ether,
}

impl CliArgs {
    /// Create a BatchConfig from CLI arguments
    ///
    /// Missing values fall back to defaults; zero values are replaced with
    /// defaults and a warning is logged.
    pub fn to_batch_config(&self) -> BatchConfig {
        if self.batch_size.is_some() || self.max_concurrent_batches.is_some() {
            let default = BatchConfig::default();
            BatchConfig::new(
                self.batch_size.unwrap_or(default.batch_size),
                self.max_concurrent_batches
                    .unwrap_or(default.max_concurrent_batches),
            )
        } else {
            BatchConfig::default()
        }
    }

    /// Create a GatewayConfig from CLI arguments
    pub fn to_gateway_config(&self) -> GatewayConfig {
        self.max_page_size
            .map(GatewayConfig::new)
            .unwrap_or_default()
    }

    /// Assemble the complete processing configuration
    pub fn to_processing_config(&self) -> ProcessingConfig {
        ProcessingConfig {
            batch: self.to_batch_config(),
            gateway: self.to_gateway_config(),
            unit: self.unit,
            timestamp: self.timestamp,
            page: PageRequest {
                start: self.start,
                limit: self.limit,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // Strategy parsing tests
    #[rstest]
    #[case::default_strategy(&["program", "input.csv"], StrategyType::Async)]
    #[case::explicit_sync(&["program", "--strategy", "sync", "input.csv"], StrategyType::Sync)]
    #[case::explicit_async(&["program", "--strategy", "async", "input.csv"], StrategyType::Async)]
    fn test_strategy_parsing(#[case] args: &[&str], #[case] expected: StrategyType) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        match (&parsed.strategy, &expected) {
            (StrategyType::Sync, StrategyType::Sync) => (),
            (StrategyType::Async, StrategyType::Async) => (),
            _ => panic!("Expected {:?}, got {:?}", expected, parsed.strategy),
        }
    }

    #[rstest]
    #[case::default_unit(&["program", "input.csv"], AmountUnit::Wei)]
    #[case::ether(&["program", "--unit", "ether", "input.csv"], AmountUnit::Ether)]
    #[case::wei(&["program", "--unit", "wei", "input.csv"], AmountUnit::Wei)]
    fn test_unit_parsing(#[case] args: &[&str], #[case] expected: AmountUnit) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.unit, expected);
    }

    #[rstest]
    #[case::no_page(&["program", "input.csv"], 0, None)]
    #[case::start_only(&["program", "--start", "3", "input.csv"], 3, None)]
    #[case::start_and_limit(&["program", "--start", "1", "--limit", "10", "input.csv"], 1, Some(10))]
    fn test_page_options(
        #[case] args: &[&str],
        #[case] start: usize,
        #[case] limit: Option<usize>,
    ) {
        let config = CliArgs::try_parse_from(args).unwrap().to_processing_config();
        assert_eq!(config.page, PageRequest { start, limit });
    }

    #[test]
    fn test_timestamp_option() {
        let parsed =
            CliArgs::try_parse_from(["program", "--timestamp", "1700000000", "input.csv"]).unwrap();
        assert_eq!(parsed.to_processing_config().timestamp, Some(1_700_000_000));
    }

    // BatchConfig conversion tests with valid values
    #[rstest]
    #[case::all_defaults(&["program", "input.csv"], 1000, num_cpus::get())]
    #[case::custom_batch_size(&["program", "--batch-size", "2000", "input.csv"], 2000, num_cpus::get())]
    #[case::custom_max_concurrent(&["program", "--max-concurrent", "8", "input.csv"], 1000, 8)]
    #[case::all_custom(
        &["program", "--batch-size", "2000", "--max-concurrent", "8", "input.csv"],
        2000,
        8
    )]
    fn test_batch_config_conversion(
        #[case] args: &[&str],
        #[case] expected_batch_size: usize,
        #[case] expected_max_concurrent: usize,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        let config = parsed.to_batch_config();

        assert_eq!(config.batch_size, expected_batch_size);
        assert_eq!(config.max_concurrent_batches, expected_max_concurrent);
    }

    // Zero values should fall back to defaults
    #[rstest]
    #[case::zero_batch_size(&["program", "--batch-size", "0", "input.csv"], "batch_size", 1000)]
    #[case::zero_max_concurrent(&["program", "--max-concurrent", "0", "input.csv"], "max_concurrent", num_cpus::get())]
    #[case::zero_page_size(&["program", "--max-page-size", "0", "input.csv"], "max_page_size", 100)]
    fn test_config_zero_values_fallback(
        #[case] args: &[&str],
        #[case] field: &str,
        #[case] expected_default: usize,
    ) {
        let config = CliArgs::try_parse_from(args).unwrap().to_processing_config();

        match field {
            "batch_size" => assert_eq!(config.batch.batch_size, expected_default),
            "max_concurrent" => assert_eq!(config.batch.max_concurrent_batches, expected_default),
            "max_page_size" => assert_eq!(config.gateway.max_page_size, expected_default),
            _ => panic!("Unknown field: {}", field),
        }
    }

    // Error handling tests
    #[rstest]
    #[case::missing_input(&["program"])]
    #[case::invalid_strategy(&["program", "--strategy", "invalid", "input.csv"])]
    #[case::invalid_unit(&["program", "--unit", "gwei", "input.csv"])]
    #[case::negative_start(&["program", "--start", "-1", "input.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
