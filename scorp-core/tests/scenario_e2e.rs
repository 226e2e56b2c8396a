//! End-to-end scenario tests: snapshot → overlay → tax → comparison.

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use scorp_core::{
    ClientRecord, ClientStatus, ContractorPay, ContractorRecord, DeductionRecord, EmployeeRecord,
    ExpenseRecord, FinancialSnapshot, Metric, PercentChange, ScenarioCalculator, ScenarioOverlay,
    compare,
};

fn reference_snapshot() -> FinancialSnapshot {
    FinancialSnapshot {
        clients: vec![ClientRecord {
            id: "c1".to_string(),
            name: "Acme".to_string(),
            monthly_retainer: dec!(20000),
            status: ClientStatus::Active,
        }],
        expenses: vec![ExpenseRecord {
            id: "e1".to_string(),
            name: "Office".to_string(),
            amount: dec!(700),
            recurring: true,
        }],
        employees: vec![EmployeeRecord {
            id: "w1".to_string(),
            name: "Owner".to_string(),
            salary: dec!(48000),
        }],
        contractors: vec![ContractorRecord {
            id: "k1".to_string(),
            name: "Bookkeeper".to_string(),
            pay: ContractorPay::Monthly {
                amount: dec!(1250),
            },
        }],
        deductions: BTreeMap::new(),
    }
}

fn fica_deduction(amount: Decimal) -> BTreeMap<String, DeductionRecord> {
    let mut deductions = BTreeMap::new();
    deductions.insert(
        "hsa".to_string(),
        DeductionRecord {
            enabled: true,
            amount,
            reduces_fica: true,
            ..Default::default()
        },
    );
    deductions
}

#[test]
fn test_baseline_reference_business() {
    let result = ScenarioCalculator::default().baseline(&reference_snapshot());

    assert_eq!(result.gross_profit, dec!(14050));
    assert_eq!(result.tax_breakdown.employer_fica, dec!(3672));
    assert_eq!(result.tax_breakdown.employee_fica, dec!(3672));
    assert_eq!(result.tax_breakdown.federal_income, dec!(46844));
    assert_eq!(result.tax_breakdown.state_income, dec!(12243));
    assert_eq!(result.estimated_annual_tax, result.tax_breakdown.total());
    assert_eq!(result.estimated_annual_tax, dec!(66431));
    assert_eq!(
        result.net_profit,
        result.gross_profit - result.estimated_monthly_tax
    );
    assert_eq!(result.net_profit, dec!(8514));
    assert_eq!(result.effective_rate, dec!(31.20));
}

#[test]
fn test_fica_deduction_lowers_payroll_tax_and_total() {
    let calculator = ScenarioCalculator::default();
    let baseline = calculator.baseline(&reference_snapshot());
    let mut overlay = ScenarioOverlay::named("HSA");
    overlay.deductions = Some(fica_deduction(dec!(10150)));

    let result = calculator.calculate(&overlay, &reference_snapshot());

    // 37,850 × 7.65% = 2,895.525
    assert_eq!(result.tax_breakdown.employer_fica, dec!(2896));
    assert_eq!(result.tax_breakdown.employee_fica, dec!(2896));
    assert!(result.estimated_annual_tax < baseline.estimated_annual_tax);
    assert_eq!(result.estimated_annual_tax, dec!(62278));
}

#[test]
fn test_baseline_uses_snapshot_deductions() {
    let mut snapshot = reference_snapshot();
    snapshot.deductions = fica_deduction(dec!(10150));

    let result = ScenarioCalculator::default().baseline(&snapshot);

    assert_eq!(result.tax_deductions_total, dec!(10150));
    assert_eq!(result.estimated_annual_tax, dec!(62278));
}

#[test]
fn test_empty_business_is_all_zero() {
    let calculator = ScenarioCalculator::default();
    let snapshot = FinancialSnapshot::default();

    let result = calculator.baseline(&snapshot);

    assert_eq!(result.monthly_revenue, Decimal::ZERO);
    assert_eq!(result.monthly_expenses, Decimal::ZERO);
    assert_eq!(result.gross_profit, Decimal::ZERO);
    assert_eq!(result.taxable_income, Decimal::ZERO);
    assert_eq!(result.estimated_annual_tax, Decimal::ZERO);
    assert_eq!(result.estimated_monthly_tax, Decimal::ZERO);
    assert_eq!(result.net_profit, Decimal::ZERO);
    assert_eq!(result.effective_rate, Decimal::ZERO);
    assert!(result.bank_allocations.iter().all(|a| a.amount.is_zero()));

    let dashboard = calculator.tax_calculator().dashboard(&snapshot);
    assert_eq!(dashboard.annual_tax, Decimal::ZERO);
    assert_eq!(dashboard.effective_rate, Decimal::ZERO);
}

#[test]
fn test_virtual_client_comparison() {
    let calculator = ScenarioCalculator::default();
    let snapshot = reference_snapshot();
    let mut overlay = ScenarioOverlay::named("New client");
    overlay.clients.add(ClientRecord {
        id: "v1".to_string(),
        name: "Globex".to_string(),
        monthly_retainer: dec!(5000),
        status: ClientStatus::Active,
    });

    let comparison = compare(
        &calculator.baseline(&snapshot),
        &calculator.calculate(&overlay, &snapshot),
    );

    let revenue = comparison.row(Metric::Revenue).expect("revenue row");
    assert_eq!(revenue.delta, dec!(5000));
    assert_eq!(revenue.percent_change, PercentChange::Percent(dec!(25)));
    assert!(revenue.is_improvement());
    assert_eq!(comparison.tax_savings, Decimal::ZERO);

    let reserve = comparison.row(Metric::TaxReserve).expect("tax reserve row");
    assert!(reserve.delta > Decimal::ZERO);
    assert!(!reserve.is_improvement());
}

#[test]
fn test_combined_overlay() {
    let calculator = ScenarioCalculator::default();
    let mut snapshot = reference_snapshot();
    snapshot.clients.push(ClientRecord {
        id: "c2".to_string(),
        name: "Initech".to_string(),
        monthly_retainer: dec!(3000),
        status: ClientStatus::Active,
    });
    snapshot.contractors.push(ContractorRecord {
        id: "k2".to_string(),
        name: "Designer".to_string(),
        pay: ContractorPay::Hourly {
            hourly_rate: dec!(40),
            hours_per_week: dec!(10),
        },
    });

    let mut overlay = ScenarioOverlay::named("Restructure");
    overlay.clients.remove("c2");
    overlay.contractors.remove("k2").add(ContractorRecord {
        id: "v-dev".to_string(),
        name: "Developer".to_string(),
        pay: ContractorPay::Hourly {
            hourly_rate: dec!(50),
            hours_per_week: dec!(20),
        },
    });
    overlay.expenses.add(ExpenseRecord {
        id: "v-saas".to_string(),
        name: "One-off migration".to_string(),
        amount: dec!(5000),
        recurring: false,
    });

    let baseline = calculator.baseline(&snapshot);
    let result = calculator.calculate(&overlay, &snapshot);

    // 10 h × 4.33 × $40
    assert_eq!(baseline.monthly_contractors, dec!(2982));
    assert_eq!(baseline.monthly_revenue, dec!(23000));
    // 1,250 + 20 h × 4.33 × $50
    assert_eq!(result.monthly_contractors, dec!(5580));
    assert_eq!(result.monthly_revenue, dec!(20000));
    // one-off expense stays out of the projection
    assert_eq!(result.monthly_recurring_expenses, dec!(700));
    assert_eq!(result.monthly_expenses, dec!(10280));
}
