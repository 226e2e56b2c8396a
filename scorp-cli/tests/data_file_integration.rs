//! Integration tests running the checked-in sample data file through the engine.

use std::path::Path;

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use scorp_cli::report::ComparisonReport;
use scorp_cli::what_if::build_what_if;
use scorp_cli::{DataFile, DataFileError, load_rates};
use scorp_core::{Metric, ScenarioCalculator, compare};

const SAMPLE: &str = include_str!("../test-data/sample.toml");

fn sample() -> DataFile {
    DataFile::parse(SAMPLE.as_bytes()).expect("sample data file parses")
}

fn calculator(data: &DataFile) -> ScenarioCalculator {
    ScenarioCalculator::with_config(data.engine_config(None).expect("default rates are valid"))
        .expect("calculator builds")
}

#[test]
fn test_sample_loads_from_disk() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("test-data/sample.toml");

    let data = DataFile::load(&path).unwrap();

    assert_eq!(data, sample());
    assert_eq!(data.snapshot.clients.len(), 2);
    assert_eq!(data.scenarios.len(), 3);
}

#[test]
fn test_missing_file_is_io_error() {
    let result = DataFile::load(Path::new("test-data/does-not-exist.toml"));

    assert!(matches!(result, Err(DataFileError::Io(_))));
}

#[test]
fn test_baseline_ignores_inactive_client_and_one_off_expense() {
    let data = sample();

    let baseline = calculator(&data).baseline(&data.snapshot);

    assert_eq!(baseline.monthly_revenue, dec!(20000));
    assert_eq!(baseline.monthly_recurring_expenses, dec!(700));
    assert_eq!(baseline.estimated_annual_tax, dec!(66431));
    assert_eq!(baseline.net_profit, dec!(8514));
}

#[test]
fn test_hsa_scenario_saves_tax() {
    let data = sample();
    let calculator = calculator(&data);
    let hsa = data.select_scenarios(Some("HSA")).unwrap()[0];

    let comparison = compare(
        &calculator.baseline(&data.snapshot),
        &calculator.calculate(hsa, &data.snapshot),
    );

    assert_eq!(comparison.tax_savings, dec!(4153));
    let revenue = comparison.row(Metric::Revenue).unwrap();
    assert_eq!(revenue.delta, Decimal::ZERO);
}

#[test]
fn test_reactivate_and_trim_scenario() {
    let data = sample();
    let overlay = data.select_scenarios(Some("Reactivate and trim")).unwrap()[0];

    let result = calculator(&data).calculate(overlay, &data.snapshot);

    assert_eq!(result.monthly_revenue, dec!(23000));
    assert_eq!(result.monthly_recurring_expenses, Decimal::ZERO);
    assert_eq!(result.trip_expenses_total, dec!(2300));
    assert_eq!(result.taxable_income, dec!(255028));
    assert_eq!(result.estimated_annual_tax, dec!(78114));
    assert_eq!(result.estimated_monthly_tax, dec!(6510));
    assert_eq!(result.net_profit, dec!(11240));
    assert_eq!(result.allocation_percentage_total, dec!(90));
    assert!(!result.is_fully_allocated());
    let amounts: Vec<Decimal> = result.bank_allocations.iter().map(|a| a.amount).collect();
    assert_eq!(amounts, vec![dec!(6744), dec!(3372)]);
}

#[test]
fn test_command_line_what_if() {
    let data = sample();
    let calculator = calculator(&data);
    let overlay = build_what_if(&data.snapshot, &[dec!(5000)], &[]).unwrap();

    let comparison = compare(
        &calculator.baseline(&data.snapshot),
        &calculator.calculate(&overlay, &data.snapshot),
    );
    let text = ComparisonReport {
        scenario_name: &overlay.name,
        comparison: &comparison,
    }
    .to_string();

    assert_eq!(comparison.row(Metric::Revenue).unwrap().delta, dec!(5000));
    assert_eq!(comparison.tax_savings, Decimal::ZERO);
    assert!(text.contains("+25.00%"));
}

#[test]
fn test_rates_file_overrides_defaults() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("test-data/no-state-tax.toml");

    let rates = load_rates(&path).unwrap();
    let data = sample();
    let calculator = ScenarioCalculator::with_config(data.engine_config(Some(rates)).unwrap())
        .unwrap();

    let baseline = calculator.baseline(&data.snapshot);

    assert_eq!(baseline.tax_breakdown.state_income, Decimal::ZERO);
    assert_eq!(baseline.estimated_annual_tax, dec!(54188));
}

#[test]
fn test_file_scenario_and_what_if_agree_with_real_deductions() {
    let data = DataFile::parse(
        r#"
[[clients]]
id = "c1"
name = "Acme Corp"
monthly_retainer = "20000"

[[employees]]
id = "w1"
name = "Owner"
salary = "48000"

[deductions.hsa]
enabled = true
amount = "10150"
reduces_federal = true
reduces_state = true
reduces_fica = true

[[scenarios]]
name = "New client"

[[scenarios.clients.added]]
id = "v1"
name = "Globex"
monthly_retainer = "5000"
"#
        .as_bytes(),
    )
    .unwrap();
    let calculator = calculator(&data);
    let baseline = calculator.baseline(&data.snapshot);

    let from_file = calculator.calculate(&data.scenarios[0], &data.snapshot);
    let what_if = build_what_if(&data.snapshot, &[dec!(5000)], &[]).unwrap();
    let from_flags = calculator.calculate(&what_if, &data.snapshot);

    assert_eq!(from_file.tax_deductions_total, dec!(10150));
    assert_eq!(from_file.tax_deductions_total, baseline.tax_deductions_total);
    assert_eq!(from_flags.tax_deductions_total, baseline.tax_deductions_total);

    let file_rows = compare(&baseline, &from_file).rows;
    let flag_rows = compare(&baseline, &from_flags).rows;
    let deltas = |rows: &[scorp_core::ComparisonRow]| -> Vec<Decimal> {
        rows.iter().map(|row| row.delta).collect()
    };
    assert_eq!(deltas(&file_rows), deltas(&flag_rows));
}
