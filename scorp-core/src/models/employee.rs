use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::overlay::{EntityId, OverlayEntity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
    /// Annual W-2 salary.
    #[serde(default)]
    pub salary: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub salary: Option<Decimal>,
}

impl OverlayEntity for EmployeeRecord {
    type Patch = EmployeePatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn patched(
        &self,
        patch: &EmployeePatch,
    ) -> Self {
        Self {
            id: self.id.clone(),
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            salary: patch.salary.unwrap_or(self.salary),
        }
    }
}
