//! Baseline-versus-scenario comparison over the headline metrics.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{max, round_half_up};
use crate::calculations::scenario::ScenarioResult;

const PERCENT: Decimal = dec!(100);
const MIN_REPORTED_PERCENT: Decimal = dec!(0.1);

/// Headline metrics compared between a baseline and a scenario. All monthly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    Revenue,
    Expenses,
    GrossProfit,
    TaxReserve,
    NetProfit,
}

impl Metric {
    /// Every metric, in display order.
    pub const ALL: [Metric; 5] = [
        Metric::Revenue,
        Metric::Expenses,
        Metric::GrossProfit,
        Metric::TaxReserve,
        Metric::NetProfit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Revenue => "Revenue",
            Metric::Expenses => "Expenses",
            Metric::GrossProfit => "Gross Profit",
            Metric::TaxReserve => "Tax Reserve",
            Metric::NetProfit => "Net Profit",
        }
    }

    /// True for cost metrics, where a decrease is an improvement.
    pub fn is_inverted(&self) -> bool {
        matches!(self, Metric::Expenses | Metric::TaxReserve)
    }

    pub fn value(
        &self,
        result: &ScenarioResult,
    ) -> Decimal {
        match self {
            Metric::Revenue => result.monthly_revenue,
            Metric::Expenses => result.monthly_expenses,
            Metric::GrossProfit => result.gross_profit,
            Metric::TaxReserve => result.estimated_monthly_tax,
            Metric::NetProfit => result.net_profit,
        }
    }
}

/// Relative change of a metric against the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PercentChange {
    /// Percentage of the baseline value, two decimals.
    Percent(Decimal),
    /// The baseline was zero and the scenario is positive.
    Unbounded,
    /// No meaningful change (under 0.1%, or zero baseline without growth).
    NoChange,
}

impl PercentChange {
    pub fn between(
        baseline: Decimal,
        scenario: Decimal,
    ) -> Self {
        if baseline.is_zero() {
            return if scenario > Decimal::ZERO {
                PercentChange::Unbounded
            } else {
                PercentChange::NoChange
            };
        }

        let percent = (scenario - baseline) / baseline * PERCENT;
        if percent.abs() < MIN_REPORTED_PERCENT {
            PercentChange::NoChange
        } else {
            PercentChange::Percent(round_half_up(percent))
        }
    }
}

impl fmt::Display for PercentChange {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            PercentChange::Percent(p) if p.is_sign_positive() => write!(f, "+{p:.2}%"),
            PercentChange::Percent(p) => write!(f, "{p:.2}%"),
            PercentChange::Unbounded => f.write_str("∞"),
            PercentChange::NoChange => f.write_str("—"),
        }
    }
}

/// One metric's baseline value, scenario value and change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub metric: Metric,
    pub baseline: Decimal,
    pub scenario: Decimal,
    pub delta: Decimal,
    pub percent_change: PercentChange,
    pub inverted: bool,
}

impl ComparisonRow {
    /// Whether the change moves the metric in the favorable direction.
    pub fn is_improvement(&self) -> bool {
        if self.inverted {
            self.delta < Decimal::ZERO
        } else {
            self.delta > Decimal::ZERO
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub rows: Vec<ComparisonRow>,
    /// Annual tax saved versus the baseline; zero when tax went up.
    pub tax_savings: Decimal,
}

impl Comparison {
    pub fn row(
        &self,
        metric: Metric,
    ) -> Option<&ComparisonRow> {
        self.rows.iter().find(|row| row.metric == metric)
    }
}

/// Compares `scenario` against `baseline` over [`Metric::ALL`].
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use scorp_core::{
///     ClientRecord, ClientStatus, FinancialSnapshot, Metric, PercentChange,
///     ScenarioCalculator, ScenarioOverlay, compare,
/// };
///
/// let snapshot = FinancialSnapshot {
///     clients: vec![ClientRecord {
///         id: "c1".into(),
///         name: "Acme".into(),
///         monthly_retainer: dec!(20000),
///         status: ClientStatus::Active,
///     }],
///     ..Default::default()
/// };
/// let mut overlay = ScenarioOverlay::named("Lose Acme");
/// overlay.clients.remove("c1");
///
/// let calculator = ScenarioCalculator::default();
/// let comparison = compare(
///     &calculator.baseline(&snapshot),
///     &calculator.calculate(&overlay, &snapshot),
/// );
///
/// let revenue = comparison.row(Metric::Revenue).unwrap();
/// assert_eq!(revenue.delta, dec!(-20000));
/// assert_eq!(revenue.percent_change, PercentChange::Percent(dec!(-100)));
/// assert!(comparison.tax_savings > dec!(0));
/// ```
pub fn compare(
    baseline: &ScenarioResult,
    scenario: &ScenarioResult,
) -> Comparison {
    let rows = Metric::ALL
        .iter()
        .map(|metric| {
            let base = metric.value(baseline);
            let projected = metric.value(scenario);
            ComparisonRow {
                metric: *metric,
                baseline: base,
                scenario: projected,
                delta: projected - base,
                percent_change: PercentChange::between(base, projected),
                inverted: metric.is_inverted(),
            }
        })
        .collect();

    Comparison {
        rows,
        tax_savings: max(
            baseline.estimated_annual_tax - scenario.estimated_annual_tax,
            Decimal::ZERO,
        ),
    }
}
