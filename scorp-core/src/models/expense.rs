use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::overlay::{EntityId, OverlayEntity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub recurring: bool,
}

impl ExpenseRecord {
    /// Monthly operating cost. One-time expenses stay out of projections.
    pub fn monthly_cost(&self) -> Decimal {
        if self.recurring {
            self.amount
        } else {
            Decimal::ZERO
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpensePatch {
    pub name: Option<String>,
    pub amount: Option<Decimal>,
    pub recurring: Option<bool>,
}

impl OverlayEntity for ExpenseRecord {
    type Patch = ExpensePatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn patched(
        &self,
        patch: &ExpensePatch,
    ) -> Self {
        Self {
            id: self.id.clone(),
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            amount: patch.amount.unwrap_or(self.amount),
            recurring: patch.recurring.unwrap_or(self.recurring),
        }
    }
}
