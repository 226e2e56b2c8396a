//! Plain-text renderings of engine results for the terminal.

use std::fmt;

use rust_decimal::Decimal;
use scorp_core::{Comparison, ScenarioResult, TaxCalculationResult};

use crate::utils::format_currency;

const LABEL_WIDTH: usize = 26;
const AMOUNT_WIDTH: usize = 12;

fn line(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    amount: Decimal,
) -> fmt::Result {
    writeln!(
        f,
        "  {label:<LABEL_WIDTH$}{:>AMOUNT_WIDTH$}",
        format_currency(amount)
    )
}

fn rate_line(
    f: &mut fmt::Formatter<'_>,
    rate: Decimal,
) -> fmt::Result {
    writeln!(
        f,
        "  {:<LABEL_WIDTH$}{:>AMOUNT_WIDTH$}",
        "Effective rate",
        format!("{rate:.2}%")
    )
}

fn heading(
    f: &mut fmt::Formatter<'_>,
    title: &str,
) -> fmt::Result {
    writeln!(f, "{title}")?;
    writeln!(f, "{}", "=".repeat(title.chars().count()))
}

/// Tax summary of the real state.
pub struct DashboardReport<'a>(pub &'a TaxCalculationResult);

impl fmt::Display for DashboardReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let r = self.0;
        heading(f, "Tax dashboard")?;
        line(f, "Monthly revenue", r.monthly_revenue)?;
        line(f, "Monthly expenses", r.monthly_expenses)?;
        line(f, "Monthly gross profit", r.monthly_gross_profit)?;
        line(f, "Annual gross profit", r.annual_gross_profit)?;
        line(f, "FICA-taxable salary", r.fica_taxable_salary)?;
        line(f, "Employer FICA", r.employer_fica)?;
        line(f, "Employee FICA", r.employee_fica)?;
        line(f, "K-1 income", r.k1_income)?;
        line(f, "Federal taxable income", r.federal_taxable_income)?;
        line(f, "State taxable income", r.state_taxable_income)?;
        line(f, "Federal income tax", r.federal_tax)?;
        line(f, "State income tax", r.state_tax)?;
        line(f, "Annual tax", r.annual_tax)?;
        line(f, "Monthly tax reserve", r.monthly_tax_reserve)?;
        line(f, "Monthly net profit", r.monthly_net_profit)?;
        rate_line(f, r.effective_rate)
    }
}

/// One scenario's projection, tax breakdown and bank allocations.
pub struct ScenarioReport<'a>(pub &'a ScenarioResult);

impl fmt::Display for ScenarioReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let r = self.0;
        heading(f, &format!("Scenario: {}", r.name))?;
        line(f, "Monthly revenue", r.monthly_revenue)?;
        line(f, "Monthly expenses", r.monthly_expenses)?;
        line(f, "  Recurring expenses", r.monthly_recurring_expenses)?;
        line(f, "  Salary", r.monthly_salary)?;
        line(f, "  Contractors", r.monthly_contractors)?;
        line(f, "Gross profit", r.gross_profit)?;
        line(f, "Annual salary", r.adjusted_salary)?;
        line(f, "Tax deductions", r.tax_deductions_total)?;
        line(f, "Trip deductions", r.trip_expenses_total)?;
        line(f, "Taxable income", r.taxable_income)?;
        line(f, "Employer FICA", r.tax_breakdown.employer_fica)?;
        line(f, "Employee FICA", r.tax_breakdown.employee_fica)?;
        line(f, "Federal income tax", r.tax_breakdown.federal_income)?;
        line(f, "State income tax", r.tax_breakdown.state_income)?;
        line(f, "Annual tax", r.estimated_annual_tax)?;
        line(f, "Monthly tax reserve", r.estimated_monthly_tax)?;
        line(f, "Monthly net profit", r.net_profit)?;
        rate_line(f, r.effective_rate)?;

        if !r.bank_allocations.is_empty() {
            writeln!(f, "  Bank allocations")?;
            for allocation in &r.bank_allocations {
                line(
                    f,
                    &format!("  {} ({}%)", allocation.name, allocation.percentage),
                    allocation.amount,
                )?;
            }
            if !r.is_fully_allocated() {
                writeln!(
                    f,
                    "  ! allocations total {}%, not 100%",
                    r.allocation_percentage_total
                )?;
            }
        }
        Ok(())
    }
}

/// Baseline vs. scenario table with the annual tax savings.
pub struct ComparisonReport<'a> {
    pub scenario_name: &'a str,
    pub comparison: &'a Comparison,
}

impl fmt::Display for ComparisonReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        heading(f, &format!("Baseline vs. {}", self.scenario_name))?;
        writeln!(
            f,
            "  {:<14}{:>AMOUNT_WIDTH$}{:>AMOUNT_WIDTH$}{:>AMOUNT_WIDTH$}{:>10}",
            "Metric", "Baseline", "Scenario", "Change", "%"
        )?;
        for row in &self.comparison.rows {
            let marker = if row.delta.is_zero() {
                ' '
            } else if row.is_improvement() {
                '+'
            } else {
                '-'
            };
            writeln!(
                f,
                "{marker} {:<14}{:>AMOUNT_WIDTH$}{:>AMOUNT_WIDTH$}{:>AMOUNT_WIDTH$}{:>10}",
                row.metric.label(),
                format_currency(row.baseline),
                format_currency(row.scenario),
                format_currency(row.delta),
                row.percent_change.to_string(),
            )?;
        }
        writeln!(
            f,
            "  Annual tax savings: {}",
            format_currency(self.comparison.tax_savings)
        )
    }
}
