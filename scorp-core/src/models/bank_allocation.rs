use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// A named share of projected monthly net profit.
///
/// Percentages are taken as entered. A set that does not total 100 is a
/// data-entry problem for the caller to flag; it is never rescaled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAllocation {
    pub name: String,
    #[serde(default)]
    pub percentage: Decimal,
}

impl BankAllocation {
    pub fn new(
        name: impl Into<String>,
        percentage: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            percentage,
        }
    }

    /// Operating 50 / Tax Reserve 30 / Owner Pay 20.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("Operating", dec!(50)),
            Self::new("Tax Reserve", dec!(30)),
            Self::new("Owner Pay", dec!(20)),
        ]
    }

    pub fn total_percentage(allocations: &[Self]) -> Decimal {
        allocations.iter().map(|a| a.percentage).sum()
    }
}
