//! S-Corp payroll and income tax calculation.
//!
//! The owner of an S-Corp draws a W-2 salary, which carries payroll tax, and
//! receives the remaining profit as pass-through (K-1) income. This module
//! projects the annual tax on both and the monthly reserve needed to cover it.
//!
//! # Calculation Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Monthly expenses = recurring expenses + salary + contractor pay |
//! | 2    | Monthly gross profit = revenue − expenses (may be negative) |
//! | 3    | Annualize revenue, expenses and gross profit (× 12) |
//! | 4    | FICA-taxable salary = max(0, annual salary − FICA deductions) |
//! | 5    | Employer and employee FICA = FICA-taxable salary × rate |
//! | 6    | K-1 income = annual gross profit − employer FICA (unrounded) |
//! | 7    | Taxable before deductions = annual salary + K-1 income |
//! | 8    | Federal / state taxable = max(0, step 7 − basis deductions) |
//! | 9    | Federal / state tax = round(taxable × rate) |
//! | 10   | Annual tax = sum of the four rounded components (min 0) |
//! | 11   | Monthly tax reserve = round(annual tax / 12) |
//! | 12   | Monthly net profit = monthly gross profit − reserve |
//! | 13   | Effective rate = annual tax / (salary + K-1) × 100, or 0 |
//!
//! # Rounding
//!
//! Each tax component is rounded to a whole unit before the components are
//! summed, so the displayed line items always add up to the displayed total.
//! Intermediate values that feed later steps (employer FICA into K-1 income)
//! keep full precision.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use scorp_core::{DeductionTotals, SCorpTaxCalculator, TaxInput};
//!
//! let calculator = SCorpTaxCalculator::default();
//! let result = calculator.calculate(&TaxInput {
//!     monthly_revenue: dec!(20000),
//!     monthly_recurring_expenses: dec!(700),
//!     monthly_salary: dec!(4000),
//!     monthly_contractor_pay: dec!(1250),
//!     annual_salary: dec!(48000),
//!     deductions: DeductionTotals::default(),
//! });
//!
//! assert_eq!(result.monthly_gross_profit, dec!(14050));
//! assert_eq!(result.employer_fica, dec!(3672));
//! assert_eq!(result.annual_tax, dec!(66431));
//! assert_eq!(result.monthly_tax_reserve, dec!(5536));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::EngineConfig;
use crate::calculations::common::{max, round_half_up, round_whole};
use crate::calculations::deductions::{DeductionCalculator, DeductionTotals};
use crate::models::FinancialSnapshot;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);

/// Monthly operating figures and deduction totals for one projection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxInput {
    pub monthly_revenue: Decimal,
    pub monthly_recurring_expenses: Decimal,
    pub monthly_salary: Decimal,
    pub monthly_contractor_pay: Decimal,
    pub annual_salary: Decimal,
    pub deductions: DeductionTotals,
}

/// Full annual and monthly tax and profitability breakdown.
///
/// Tax components and the reserve are whole currency units. Taxable income
/// figures and K-1 income are rounded for display only; the tax derived from
/// them was computed from the precise values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculationResult {
    pub monthly_revenue: Decimal,
    /// Recurring expenses + salary + contractor pay.
    pub monthly_expenses: Decimal,
    /// May be negative.
    pub monthly_gross_profit: Decimal,

    pub annual_revenue: Decimal,
    pub annual_expenses: Decimal,
    /// May be negative.
    pub annual_gross_profit: Decimal,

    /// Salary subject to payroll tax after FICA-reducing deductions.
    pub fica_taxable_salary: Decimal,
    pub employer_fica: Decimal,
    pub employee_fica: Decimal,

    /// Pass-through profit after the employer payroll tax. May be negative.
    pub k1_income: Decimal,
    pub federal_taxable_income: Decimal,
    pub state_taxable_income: Decimal,
    pub federal_tax: Decimal,
    pub state_tax: Decimal,

    /// Sum of the four rounded tax components.
    pub annual_tax: Decimal,
    pub monthly_tax_reserve: Decimal,
    pub monthly_net_profit: Decimal,

    /// Annual tax as a percentage of salary + K-1 income, two decimals.
    pub effective_rate: Decimal,
}

/// Calculator for S-Corp payroll and income tax.
#[derive(Debug, Clone, Default)]
pub struct SCorpTaxCalculator {
    config: EngineConfig,
}

impl SCorpTaxCalculator {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Runs every calculation step and returns the complete breakdown.
    ///
    /// Never fails: negative profit, zero salary and oversized deductions all
    /// degrade to clamped or zero values.
    pub fn calculate(
        &self,
        input: &TaxInput,
    ) -> TaxCalculationResult {
        // Steps 1-3: operating figures
        let monthly_expenses = self.monthly_expenses(input);
        let monthly_gross_profit = input.monthly_revenue - monthly_expenses;
        let annual_revenue = input.monthly_revenue * MONTHS_PER_YEAR;
        let annual_expenses = monthly_expenses * MONTHS_PER_YEAR;
        let annual_gross_profit = monthly_gross_profit * MONTHS_PER_YEAR;

        // Steps 4-5: payroll tax
        let fica_taxable_salary = self.fica_taxable_salary(
            input.annual_salary,
            input.deductions.fica_deductions,
        );
        let employer_fica = fica_taxable_salary * self.config.employer_fica_rate;
        let employee_fica = fica_taxable_salary * self.config.employee_fica_rate;

        // Steps 6-7: pass-through income, using the precise employer FICA
        let k1_income = annual_gross_profit - employer_fica;
        let taxable_before_deductions = input.annual_salary + k1_income;

        // Step 8: taxable income per basis
        let federal_taxable_income = self.taxable_income(
            "federal",
            taxable_before_deductions,
            input.deductions.federal_deductions,
        );
        let state_taxable_income = self.taxable_income(
            "state",
            taxable_before_deductions,
            input.deductions.state_deductions,
        );

        // Step 9: income tax
        let federal_tax = round_whole(federal_taxable_income * self.config.federal_income_rate);
        let state_tax = round_whole(state_taxable_income * self.config.state_income_rate);

        // Steps 10-12: totals from rounded components
        let employer_fica = round_whole(employer_fica);
        let employee_fica = round_whole(employee_fica);
        let annual_tax = self.annual_tax(employer_fica, employee_fica, federal_tax, state_tax);
        let monthly_tax_reserve = round_whole(annual_tax / MONTHS_PER_YEAR);
        let monthly_net_profit = monthly_gross_profit - monthly_tax_reserve;

        // Step 13
        let effective_rate = self.effective_rate(annual_tax, taxable_before_deductions);

        debug!(
            monthly_gross_profit = %monthly_gross_profit,
            annual_tax = %annual_tax,
            monthly_tax_reserve = %monthly_tax_reserve,
            effective_rate = %effective_rate,
            "calculated S-Corp taxes"
        );

        TaxCalculationResult {
            monthly_revenue: input.monthly_revenue,
            monthly_expenses,
            monthly_gross_profit,
            annual_revenue,
            annual_expenses,
            annual_gross_profit,
            fica_taxable_salary,
            employer_fica,
            employee_fica,
            k1_income: round_whole(k1_income),
            federal_taxable_income: round_whole(federal_taxable_income),
            state_taxable_income: round_whole(state_taxable_income),
            federal_tax,
            state_tax,
            annual_tax,
            monthly_tax_reserve,
            monthly_net_profit,
            effective_rate,
        }
    }

    /// Tax summary of the real state, outside any scenario.
    ///
    /// Deductions are aggregated with federal, state and FICA bases kept
    /// separate per each record's flags.
    pub fn dashboard(
        &self,
        snapshot: &FinancialSnapshot,
    ) -> TaxCalculationResult {
        let annual_salary = snapshot.annual_salary();
        let deductions =
            DeductionCalculator::new(self.config.clone()).aggregate(&snapshot.deductions);

        self.calculate(&TaxInput {
            monthly_revenue: snapshot.monthly_revenue(),
            monthly_recurring_expenses: snapshot.monthly_recurring_expenses(),
            monthly_salary: annual_salary / MONTHS_PER_YEAR,
            monthly_contractor_pay: snapshot.monthly_contractor_pay(),
            annual_salary,
            deductions,
        })
    }

    fn monthly_expenses(
        &self,
        input: &TaxInput,
    ) -> Decimal {
        input.monthly_recurring_expenses + input.monthly_salary + input.monthly_contractor_pay
    }

    fn fica_taxable_salary(
        &self,
        annual_salary: Decimal,
        fica_deductions: Decimal,
    ) -> Decimal {
        max(annual_salary - fica_deductions, Decimal::ZERO)
    }

    fn taxable_income(
        &self,
        basis: &'static str,
        taxable_before_deductions: Decimal,
        deductions: Decimal,
    ) -> Decimal {
        let taxable = taxable_before_deductions - deductions;
        if taxable < Decimal::ZERO {
            warn!(
                basis,
                taxable_before_deductions = %taxable_before_deductions,
                deductions = %deductions,
                "Taxable income is negative; clamping to zero"
            );
            return Decimal::ZERO;
        }
        taxable
    }

    fn annual_tax(
        &self,
        employer_fica: Decimal,
        employee_fica: Decimal,
        federal_tax: Decimal,
        state_tax: Decimal,
    ) -> Decimal {
        max(
            employer_fica + employee_fica + federal_tax + state_tax,
            Decimal::ZERO,
        )
    }

    fn effective_rate(
        &self,
        annual_tax: Decimal,
        income: Decimal,
    ) -> Decimal {
        if income <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        round_half_up(annual_tax / income * PERCENT)
    }
}
