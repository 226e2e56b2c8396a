use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_whole;

/// Per-category travel totals for a scenario. Only meals are partially
/// deductible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripExpenseTotals {
    pub enabled: bool,
    pub flights: Decimal,
    pub lodging: Decimal,
    pub ground_transport: Decimal,
    pub meals: Decimal,
    pub per_diem: Decimal,
    pub other: Decimal,
}

impl TripExpenseTotals {
    /// Deductible total: every category in full except meals, which are
    /// limited by `meals_rate` and rounded to a whole unit. Zero when disabled.
    pub fn deductible_total(
        &self,
        meals_rate: Decimal,
    ) -> Decimal {
        if !self.enabled {
            return Decimal::ZERO;
        }

        self.flights
            + self.lodging
            + self.ground_transport
            + round_whole(self.meals * meals_rate)
            + self.per_diem
            + self.other
    }
}
