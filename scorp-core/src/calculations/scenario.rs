//! Scenario projections and the baseline they are compared against.
//!
//! A scenario is the real financial state with a [`ScenarioOverlay`] applied.
//! The resolved figures go through the S-Corp tax calculation with the
//! scenario's deductions (the real ones unless it sets its own) and trip
//! expenses, and the projected monthly net
//! profit is split across the configured bank allocations.
//!
//! Unlike the dashboard path, a scenario passes one combined deduction figure
//! (tax deductions + deductible trip expenses) as both the federal and the
//! state deduction. Only deduction records flagged for FICA reduce payroll
//! tax; trip expenses never do.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::common::round_whole;
use crate::calculations::deductions::{DeductionCalculator, DeductionTotals};
use crate::calculations::overlay::resolve_snapshot;
use crate::calculations::scorp_tax::{SCorpTaxCalculator, TaxCalculationResult, TaxInput};
use crate::models::{BankAllocation, FinancialSnapshot, ScenarioOverlay};
use crate::{ConfigError, EngineConfig};

const MONTHS_PER_YEAR: Decimal = dec!(12);
const FULL_ALLOCATION: Decimal = dec!(100);

/// The four rounded tax components behind a scenario's annual tax.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub employer_fica: Decimal,
    pub employee_fica: Decimal,
    pub federal_income: Decimal,
    pub state_income: Decimal,
}

impl TaxBreakdown {
    pub fn total(&self) -> Decimal {
        self.employer_fica + self.employee_fica + self.federal_income + self.state_income
    }
}

impl From<&TaxCalculationResult> for TaxBreakdown {
    fn from(result: &TaxCalculationResult) -> Self {
        Self {
            employer_fica: result.employer_fica,
            employee_fica: result.employee_fica,
            federal_income: result.federal_tax,
            state_income: result.state_tax,
        }
    }
}

/// A bank allocation with its share of monthly net profit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocatedAmount {
    pub name: String,
    pub percentage: Decimal,
    pub amount: Decimal,
}

/// Projected results for one scenario. Monthly unless named otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub name: String,
    pub monthly_revenue: Decimal,
    /// Recurring expenses + salary + contractors.
    pub monthly_expenses: Decimal,
    pub monthly_contractors: Decimal,
    pub monthly_salary: Decimal,
    pub monthly_recurring_expenses: Decimal,
    pub gross_profit: Decimal,
    /// Effective annual salary, including the flat salary adjustment.
    pub adjusted_salary: Decimal,
    pub tax_deductions_total: Decimal,
    pub trip_expenses_total: Decimal,
    pub taxable_income: Decimal,
    pub estimated_annual_tax: Decimal,
    pub estimated_monthly_tax: Decimal,
    pub net_profit: Decimal,
    pub effective_rate: Decimal,
    pub bank_allocations: Vec<AllocatedAmount>,
    /// Sum of allocation percentages as entered; not necessarily 100.
    pub allocation_percentage_total: Decimal,
    pub tax_breakdown: TaxBreakdown,
}

impl ScenarioResult {
    pub fn is_fully_allocated(&self) -> bool {
        self.allocation_percentage_total == FULL_ALLOCATION
    }
}

/// Projects scenarios and baselines over a [`FinancialSnapshot`].
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use scorp_core::{
///     ClientRecord, ClientStatus, FinancialSnapshot, ScenarioCalculator, ScenarioOverlay,
/// };
///
/// let snapshot = FinancialSnapshot {
///     clients: vec![ClientRecord {
///         id: "c1".into(),
///         name: "Acme".into(),
///         monthly_retainer: dec!(10000),
///         status: ClientStatus::Active,
///     }],
///     ..Default::default()
/// };
///
/// let mut overlay = ScenarioOverlay::named("Second client");
/// overlay.clients.add(ClientRecord {
///     id: "v1".into(),
///     name: "Globex".into(),
///     monthly_retainer: dec!(5000),
///     status: ClientStatus::Active,
/// });
///
/// let calculator = ScenarioCalculator::default();
/// let baseline = calculator.baseline(&snapshot);
/// let scenario = calculator.calculate(&overlay, &snapshot);
///
/// assert_eq!(scenario.monthly_revenue - baseline.monthly_revenue, dec!(5000));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioCalculator {
    tax: SCorpTaxCalculator,
    deductions: DeductionCalculator,
}

impl ScenarioCalculator {
    /// Creates a calculator with explicit rates.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is invalid.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            tax: SCorpTaxCalculator::new(config.clone()),
            deductions: DeductionCalculator::new(config),
        })
    }

    pub fn tax_calculator(&self) -> &SCorpTaxCalculator {
        &self.tax
    }

    /// Projects the scenario described by `overlay` over `snapshot`.
    pub fn calculate(
        &self,
        overlay: &ScenarioOverlay,
        snapshot: &FinancialSnapshot,
    ) -> ScenarioResult {
        let effective = resolve_snapshot(snapshot, overlay);

        let monthly_revenue = effective.monthly_revenue();
        let monthly_recurring_expenses = effective.monthly_recurring_expenses();
        let monthly_contractors = effective.monthly_contractor_pay();
        let adjusted_salary = effective.annual_salary() + overlay.salary_adjustment;
        let monthly_salary = adjusted_salary / MONTHS_PER_YEAR;

        let tax_deductions = self.deductions.aggregate(&effective.deductions);
        let trip_expenses_total = overlay
            .trip
            .deductible_total(self.tax.config().meals_deduction_rate);
        let total_deductions = tax_deductions.total_annual + trip_expenses_total;

        let tax = self.tax.calculate(&TaxInput {
            monthly_revenue,
            monthly_recurring_expenses,
            monthly_salary,
            monthly_contractor_pay: monthly_contractors,
            annual_salary: adjusted_salary,
            deductions: DeductionTotals::uniform(
                total_deductions,
                tax_deductions.fica_deductions,
            ),
        });

        let allocation_percentage_total =
            BankAllocation::total_percentage(&overlay.bank_allocations);
        if !overlay.bank_allocations.is_empty()
            && allocation_percentage_total != FULL_ALLOCATION
        {
            warn!(
                scenario = %overlay.name,
                total = %allocation_percentage_total,
                "Bank allocation percentages do not total 100"
            );
        }
        let bank_allocations = self.allocate(tax.monthly_net_profit, &overlay.bank_allocations);

        debug!(
            scenario = %overlay.name,
            revenue = %monthly_revenue,
            net_profit = %tax.monthly_net_profit,
            "projected scenario"
        );

        ScenarioResult {
            name: overlay.name.clone(),
            monthly_revenue,
            monthly_expenses: tax.monthly_expenses,
            monthly_contractors,
            monthly_salary,
            monthly_recurring_expenses,
            gross_profit: tax.monthly_gross_profit,
            adjusted_salary,
            tax_deductions_total: tax_deductions.total_annual,
            trip_expenses_total,
            taxable_income: tax.federal_taxable_income,
            estimated_annual_tax: tax.annual_tax,
            estimated_monthly_tax: tax.monthly_tax_reserve,
            net_profit: tax.monthly_net_profit,
            effective_rate: tax.effective_rate,
            bank_allocations,
            allocation_percentage_total,
            tax_breakdown: TaxBreakdown::from(&tax),
        }
    }

    /// Projects the real state unchanged, using its own deductions.
    pub fn baseline(
        &self,
        snapshot: &FinancialSnapshot,
    ) -> ScenarioResult {
        self.calculate(&ScenarioOverlay::baseline(), snapshot)
    }

    fn allocate(
        &self,
        monthly_net_profit: Decimal,
        allocations: &[BankAllocation],
    ) -> Vec<AllocatedAmount> {
        allocations
            .iter()
            .map(|allocation| AllocatedAmount {
                name: allocation.name.clone(),
                percentage: allocation.percentage,
                amount: round_whole(
                    monthly_net_profit * allocation.percentage / FULL_ALLOCATION,
                ),
            })
            .collect()
    }
}
