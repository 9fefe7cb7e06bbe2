//! End-to-end integration tests
//!
//! These tests validate the complete split-payment pipeline using predefined
//! CSV test fixtures. Each test:
//! 1. Reads input.csv from a fixture directory
//! 2. Submits every request through the payment gateway
//! 3. Writes the resulting history as CSV
//! 4. Compares actual output with expected.csv
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Happy path splits
//! - Deposit mismatches
//! - Invalid requests (counts, addresses, zero and malformed amounts)
//! - Amounts beyond 128 bits
//! - Duplicate recipients, ether units, empty input
//!
//! Each test is run twice: once with the synchronous strategy and once with
//! the async strategy. Records are stamped with a fixed timestamp so the
//! output is deterministic.

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use split_payment_ledger::cli::{AmountUnit, StrategyType};
    use split_payment_ledger::core::GatewayConfig;
    use split_payment_ledger::strategy::{
        create_strategy, BatchConfig, PageRequest, ProcessingConfig,
    };
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    const TIMESTAMP: u64 = 1_700_000_000;

    fn fixed_config(unit: AmountUnit) -> ProcessingConfig {
        ProcessingConfig {
            // Small batches so the async strategy crosses batch boundaries
            batch: BatchConfig::new(2, 4),
            unit,
            timestamp: Some(TIMESTAMP),
            ..ProcessingConfig::default()
        }
    }

    /// Process `input_path` with the given strategy and return the output
    fn run(input_path: &Path, strategy_type: StrategyType, config: ProcessingConfig) -> String {
        let strategy = create_strategy(strategy_type, config);

        let mut temp_output = NamedTempFile::new().expect("Failed to create temp file");

        strategy
            .process(input_path, &mut temp_output)
            .unwrap_or_else(|e| panic!("Failed to process payments: {}", e));

        temp_output.flush().expect("Failed to flush temp file");

        fs::read_to_string(temp_output.path())
            .unwrap_or_else(|e| panic!("Failed to read temp output file: {}", e))
    }

    /// Run a test fixture by processing input.csv and comparing with expected.csv
    ///
    /// # Panics
    ///
    /// Panics if input or expected files cannot be read, or the output
    /// doesn't match the expected history
    fn run_test_fixture(fixture_name: &str, strategy_type: StrategyType, unit: AmountUnit) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.csv", fixture_dir);
        let expected_path = format!("{}/expected.csv", fixture_dir);

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );
        assert!(
            Path::new(&expected_path).exists(),
            "Expected file not found: {}",
            expected_path
        );

        let actual_output = run(
            Path::new(&input_path),
            strategy_type.clone(),
            fixed_config(unit),
        );

        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {} (strategy: {:?})\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, strategy_type, actual_output, expected_output
        );
    }

    /// End-to-end test for all wei fixtures with both processing strategies
    #[rstest]
    #[case("happy_path")]
    #[case("value_mismatch")]
    #[case("invalid_requests")]
    #[case("large_amounts")]
    #[case("duplicate_recipients")]
    #[case("empty_input")]
    fn test_fixtures(
        #[case] fixture: &str,
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        run_test_fixture(fixture, strategy, AmountUnit::Wei);
    }

    #[rstest]
    fn test_ether_units(#[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType) {
        run_test_fixture("ether_units", strategy, AmountUnit::Ether);
    }

    /// Only the requested page is printed, indices stay absolute
    #[rstest]
    #[case(PageRequest { start: 1, limit: Some(1) }, vec!["1"])]
    #[case(PageRequest { start: 1, limit: None }, vec!["1", "2"])]
    #[case(PageRequest { start: 5, limit: Some(10) }, vec![])]
    #[case(PageRequest { start: 0, limit: Some(100) }, vec!["0", "1"])]
    fn test_history_page(
        #[case] page: PageRequest,
        #[case] expected_indices: Vec<&str>,
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        let config = ProcessingConfig {
            page,
            // Page size smaller than the history to exercise paging
            gateway: GatewayConfig::new(2),
            ..fixed_config(AmountUnit::Wei)
        };

        let output = run(
            Path::new("tests/fixtures/happy_path/input.csv"),
            strategy,
            config,
        );

        let indices: Vec<&str> = output
            .lines()
            .skip(1)
            .filter_map(|line| line.split(',').next())
            .collect();
        assert_eq!(indices, expected_indices);
    }

    #[rstest]
    fn test_zero_limit_is_fatal(
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        let config = ProcessingConfig {
            page: PageRequest {
                start: 0,
                limit: Some(0),
            },
            ..fixed_config(AmountUnit::Wei)
        };
        let strategy = create_strategy(strategy, config);
        let mut output = Vec::new();

        let result = strategy.process(
            Path::new("tests/fixtures/happy_path/input.csv"),
            &mut output,
        );
        assert!(result.is_err());
    }

    #[rstest]
    fn test_missing_input_is_fatal(
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        let strategy = create_strategy(strategy, fixed_config(AmountUnit::Wei));
        let mut output = Vec::new();

        let result = strategy.process(
            Path::new("tests/fixtures/does_not_exist.csv"),
            &mut output,
        );
        assert!(result.unwrap_err().contains("Failed to open file"));
    }
}
