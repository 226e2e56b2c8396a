use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{
    BankAllocation, ClientRecord, ContractorRecord, DeductionRecord, EmployeeRecord,
    ExpenseRecord, TripExpenseTotals,
};

/// Identifier assigned by the storage layer (real records) or by the
/// scenario editor (virtual records).
pub type EntityId = String;

/// A record type a scenario can add, remove or override.
pub trait OverlayEntity: Debug + Clone + PartialEq + Serialize + DeserializeOwned {
    /// Partial replacement values; `None` fields keep the base value.
    type Patch: Debug + Clone + PartialEq + Serialize + DeserializeOwned;

    fn id(&self) -> &str;

    /// Returns a copy with every field present in `patch` replaced.
    fn patched(
        &self,
        patch: &Self::Patch,
    ) -> Self;
}

/// A scenario's changes to one entity type, expressed against the real state.
///
/// Removal dominates: an ID that is both removed and overridden contributes
/// nothing. Added records are virtual and never match a base record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "", default)]
pub struct EntityDiff<T: OverlayEntity> {
    pub removed: BTreeSet<EntityId>,
    pub overridden: BTreeMap<EntityId, T::Patch>,
    pub added: Vec<T>,
}

impl<T: OverlayEntity> Default for EntityDiff<T> {
    fn default() -> Self {
        Self {
            removed: BTreeSet::new(),
            overridden: BTreeMap::new(),
            added: Vec::new(),
        }
    }
}

impl<T: OverlayEntity> EntityDiff<T> {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.overridden.is_empty() && self.added.is_empty()
    }

    pub fn remove(
        &mut self,
        id: impl Into<EntityId>,
    ) -> &mut Self {
        self.removed.insert(id.into());
        self
    }

    pub fn override_with(
        &mut self,
        id: impl Into<EntityId>,
        patch: T::Patch,
    ) -> &mut Self {
        self.overridden.insert(id.into(), patch);
        self
    }

    pub fn add(
        &mut self,
        record: T,
    ) -> &mut Self {
        self.added.push(record);
        self
    }

    /// Overrides that have no effect because the same ID is also removed.
    pub fn shadowed_overrides(&self) -> Vec<&str> {
        self.overridden
            .keys()
            .filter(|id| self.removed.contains(*id))
            .map(String::as_str)
            .collect()
    }

    /// Overrides naming an ID that is not present in `base`.
    pub fn dangling_overrides(
        &self,
        base: &[T],
    ) -> Vec<&str> {
        let known: BTreeSet<&str> = base.iter().map(|record| record.id()).collect();
        self.overridden
            .keys()
            .map(String::as_str)
            .filter(|id| !known.contains(id))
            .collect()
    }
}

/// A hypothetical "what-if" layered over the real financial state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioOverlay {
    pub name: String,
    pub clients: EntityDiff<ClientRecord>,
    pub expenses: EntityDiff<ExpenseRecord>,
    pub contractors: EntityDiff<ContractorRecord>,
    pub employees: EntityDiff<EmployeeRecord>,
    /// The scenario's own deductions. `None` keeps the real state's
    /// deductions; `Some` replaces them, even when empty.
    pub deductions: Option<BTreeMap<String, DeductionRecord>>,
    pub trip: TripExpenseTotals,
    pub bank_allocations: Vec<BankAllocation>,
    /// Deprecated flat annual salary adjustment, added after employee
    /// overrides are resolved. Kept so older saved scenarios still load.
    pub salary_adjustment: Decimal,
}

impl Default for ScenarioOverlay {
    fn default() -> Self {
        Self {
            name: String::new(),
            clients: EntityDiff::default(),
            expenses: EntityDiff::default(),
            contractors: EntityDiff::default(),
            employees: EntityDiff::default(),
            deductions: None,
            trip: TripExpenseTotals::default(),
            bank_allocations: BankAllocation::defaults(),
            salary_adjustment: Decimal::ZERO,
        }
    }
}

impl ScenarioOverlay {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// The comparison reference: no entity changes, trip disabled, default
    /// bank allocations, and the real state's deductions.
    pub fn baseline() -> Self {
        Self::named("Baseline")
    }

    /// Replaces or adds one of the scenario's own deductions. The first call
    /// on an inheriting overlay starts from an empty set.
    pub fn set_deduction(
        &mut self,
        key: impl Into<String>,
        record: DeductionRecord,
    ) -> &mut Self {
        self.deductions
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), record);
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{ClientPatch, ClientStatus};

    fn client(id: &str) -> ClientRecord {
        ClientRecord {
            id: id.to_string(),
            name: String::new(),
            monthly_retainer: dec!(1000),
            status: ClientStatus::Active,
        }
    }

    #[test]
    fn default_overlay_uses_default_allocations() {
        let overlay = ScenarioOverlay::default();

        assert_eq!(overlay.bank_allocations, BankAllocation::defaults());
        assert!(!overlay.trip.enabled);
        assert_eq!(overlay.deductions, None);
    }

    #[test]
    fn shadowed_overrides_lists_removed_ids() {
        let mut diff = EntityDiff::<ClientRecord>::default();
        diff.remove("c1")
            .override_with("c1", ClientPatch::default())
            .override_with("c2", ClientPatch::default());

        assert_eq!(diff.shadowed_overrides(), vec!["c1"]);
    }

    #[test]
    fn dangling_overrides_lists_unknown_ids() {
        let mut diff = EntityDiff::<ClientRecord>::default();
        diff.override_with("c1", ClientPatch::default())
            .override_with("ghost", ClientPatch::default());

        assert_eq!(diff.dangling_overrides(&[client("c1")]), vec!["ghost"]);
    }

    #[test]
    fn set_deduction_starts_an_own_deduction_set() {
        let mut overlay = ScenarioOverlay::named("HSA");
        overlay.set_deduction("hsa", DeductionRecord::default());

        let keys: Vec<&str> = overlay
            .deductions
            .iter()
            .flat_map(|d| d.keys())
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["hsa"]);
    }
}
