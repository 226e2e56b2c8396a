//! Deduction annualization and per-basis aggregation.
//!
//! Each [`DeductionRecord`] is converted to an annual, tax-qualified dollar
//! figure according to its type, then folded into totals for the three
//! deduction bases. A deduction always counts once toward
//! [`DeductionTotals::total_annual`] and toward zero to three of the basis
//! totals depending on its flags.
//!
//! | Type         | Annual amount                                   |
//! |--------------|-------------------------------------------------|
//! | disabled     | 0                                               |
//! | home office  | min(sqft, max sqft) × rate per sqft             |
//! | mileage      | round(miles × mileage rate)                     |
//! | meals        | round(amount × meals rate)                      |
//! | monthly      | amount × 12                                     |
//! | other        | amount                                          |

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::EngineConfig;
use crate::calculations::common::{min, round_whole};
use crate::models::{BUSINESS_MEALS, DeductionRecord, TRAVEL_MEALS};

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Annual deduction totals per basis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionTotals {
    /// Every enabled deduction, counted once.
    pub total_annual: Decimal,
    /// Deductions that reduce federal taxable income.
    pub federal_deductions: Decimal,
    /// Deductions that reduce state taxable income.
    pub state_deductions: Decimal,
    /// Deductions that reduce the salary subject to payroll tax.
    pub fica_deductions: Decimal,
}

impl DeductionTotals {
    /// Totals where one figure reduces both income bases and a separate
    /// figure reduces the payroll base.
    pub fn uniform(
        income_deductions: Decimal,
        fica_deductions: Decimal,
    ) -> Self {
        Self {
            total_annual: income_deductions,
            federal_deductions: income_deductions,
            state_deductions: income_deductions,
            fica_deductions,
        }
    }
}

/// Annualizes and aggregates deduction records.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use scorp_core::{DeductionCalculator, DeductionRecord};
///
/// let calculator = DeductionCalculator::default();
/// let mileage = DeductionRecord {
///     enabled: true,
///     is_mileage: true,
///     amount: dec!(10000),
///     reduces_federal: true,
///     ..Default::default()
/// };
///
/// assert_eq!(calculator.annual_amount("mileage", &mileage), dec!(6700));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeductionCalculator {
    config: EngineConfig,
}

impl DeductionCalculator {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the annual, basis-qualified amount for a single deduction.
    ///
    /// Type flags are checked in order: home office, mileage, meals (by key),
    /// monthly. The first match wins.
    pub fn annual_amount(
        &self,
        key: &str,
        record: &DeductionRecord,
    ) -> Decimal {
        if !record.enabled {
            return Decimal::ZERO;
        }

        if record.is_home_office {
            self.home_office(record.sqft.unwrap_or_default())
        } else if record.is_mileage {
            self.mileage(record.amount)
        } else if is_meals_key(key) {
            self.meals(record.amount)
        } else if record.is_monthly {
            record.amount * MONTHS_PER_YEAR
        } else {
            record.amount
        }
    }

    /// Folds a deduction map into per-basis totals.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    ///
    /// use rust_decimal_macros::dec;
    /// use scorp_core::{DeductionCalculator, DeductionRecord};
    ///
    /// let mut deductions = BTreeMap::new();
    /// deductions.insert(
    ///     "hsa".to_string(),
    ///     DeductionRecord {
    ///         enabled: true,
    ///         amount: dec!(4150),
    ///         reduces_federal: true,
    ///         reduces_state: true,
    ///         reduces_fica: true,
    ///         ..Default::default()
    ///     },
    /// );
    ///
    /// let totals = DeductionCalculator::default().aggregate(&deductions);
    ///
    /// assert_eq!(totals.total_annual, dec!(4150));
    /// assert_eq!(totals.fica_deductions, dec!(4150));
    /// ```
    pub fn aggregate(
        &self,
        deductions: &BTreeMap<String, DeductionRecord>,
    ) -> DeductionTotals {
        let mut totals = DeductionTotals::default();

        for (key, record) in deductions.iter().filter(|(_, r)| r.enabled) {
            let amount = self.annual_amount(key, record);
            totals.total_annual += amount;
            if record.reduces_federal {
                totals.federal_deductions += amount;
            }
            if record.reduces_state {
                totals.state_deductions += amount;
            }
            if record.reduces_fica {
                totals.fica_deductions += amount;
            }
        }

        debug!(
            total = %totals.total_annual,
            federal = %totals.federal_deductions,
            state = %totals.state_deductions,
            fica = %totals.fica_deductions,
            "aggregated deductions"
        );

        totals
    }

    fn home_office(
        &self,
        sqft: Decimal,
    ) -> Decimal {
        min(sqft, self.config.home_office_max_sqft) * self.config.home_office_rate_per_sqft
    }

    fn mileage(
        &self,
        miles: Decimal,
    ) -> Decimal {
        round_whole(miles * self.config.mileage_rate)
    }

    fn meals(
        &self,
        amount: Decimal,
    ) -> Decimal {
        round_whole(amount * self.config.meals_deduction_rate)
    }
}

fn is_meals_key(key: &str) -> bool {
    key == BUSINESS_MEALS || key == TRAVEL_MEALS
}
