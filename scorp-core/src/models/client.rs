use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::overlay::{EntityId, OverlayEntity};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientStatus {
    #[default]
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub monthly_retainer: Decimal,
    #[serde(default)]
    pub status: ClientStatus,
}

impl ClientRecord {
    /// Retainer counted toward revenue; inactive clients contribute nothing.
    pub fn monthly_revenue(&self) -> Decimal {
        match self.status {
            ClientStatus::Active => self.monthly_retainer,
            ClientStatus::Inactive => Decimal::ZERO,
        }
    }
}

/// Scenario override for a real client. `None` fields keep the base value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub monthly_retainer: Option<Decimal>,
    pub status: Option<ClientStatus>,
}

impl OverlayEntity for ClientRecord {
    type Patch = ClientPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn patched(
        &self,
        patch: &ClientPatch,
    ) -> Self {
        Self {
            id: self.id.clone(),
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            monthly_retainer: patch.monthly_retainer.unwrap_or(self.monthly_retainer),
            status: patch.status.unwrap_or(self.status),
        }
    }
}
