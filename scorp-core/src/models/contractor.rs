use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::overlay::{EntityId, OverlayEntity};

/// Average number of weeks in a month, used to convert weekly hours.
pub const WEEKS_PER_MONTH: Decimal = dec!(4.33);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum ContractorPay {
    Monthly {
        #[serde(default)]
        amount: Decimal,
    },
    Hourly {
        #[serde(default)]
        hourly_rate: Decimal,
        #[serde(default)]
        hours_per_week: Decimal,
    },
}

impl ContractorPay {
    /// Effective monthly pay: `hours_per_week × 4.33 × hourly_rate` for hourly
    /// contractors, the flat amount otherwise.
    pub fn monthly_amount(&self) -> Decimal {
        match self {
            Self::Monthly { amount } => *amount,
            Self::Hourly {
                hourly_rate,
                hours_per_week,
            } => *hours_per_week * WEEKS_PER_MONTH * *hourly_rate,
        }
    }
}

impl Default for ContractorPay {
    fn default() -> Self {
        Self::Monthly {
            amount: Decimal::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractorRecord {
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pay: ContractorPay,
}

impl ContractorRecord {
    pub fn monthly_pay(&self) -> Decimal {
        self.pay.monthly_amount()
    }
}

/// Scenario override for a real contractor. A `pay` override replaces the
/// whole pay model, so an hourly contractor can be moved to a flat fee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractorPatch {
    pub name: Option<String>,
    pub pay: Option<ContractorPay>,
}

impl OverlayEntity for ContractorRecord {
    type Patch = ContractorPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn patched(
        &self,
        patch: &ContractorPatch,
    ) -> Self {
        Self {
            id: self.id.clone(),
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            pay: patch.pay.clone().unwrap_or_else(|| self.pay.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn monthly_contractor_pays_flat_amount() {
        let pay = ContractorPay::Monthly {
            amount: dec!(1250),
        };

        assert_eq!(pay.monthly_amount(), dec!(1250));
    }

    #[test]
    fn hourly_contractor_uses_average_weeks_per_month() {
        let pay = ContractorPay::Hourly {
            hourly_rate: dec!(50),
            hours_per_week: dec!(20),
        };

        // 20 h × 4.33 wk × $50
        assert_eq!(pay.monthly_amount(), dec!(4330));
    }

    #[test]
    fn hourly_contractor_with_fractional_hours() {
        let pay = ContractorPay::Hourly {
            hourly_rate: dec!(75),
            hours_per_week: dec!(7.5),
        };

        assert_eq!(pay.monthly_amount(), dec!(2435.625));
    }

    #[test]
    fn pay_override_switches_pay_model() {
        let contractor = ContractorRecord {
            id: "k1".to_string(),
            name: "Designer".to_string(),
            pay: ContractorPay::Hourly {
                hourly_rate: dec!(60),
                hours_per_week: dec!(10),
            },
        };
        let patch = ContractorPatch {
            pay: Some(ContractorPay::Monthly {
                amount: dec!(2000),
            }),
            ..Default::default()
        };

        assert_eq!(contractor.patched(&patch).monthly_pay(), dec!(2000));
    }
}
