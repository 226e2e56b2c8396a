//! Resolution of scenario overlays against the real financial state.
//!
//! Every entity type goes through the same [`resolve`] function:
//!
//! 1. Drop base records whose ID is in the removed set.
//! 2. Replace fields of surviving base records that have an override.
//! 3. Append the scenario's virtual records unchanged.
//!
//! Removal is checked before overrides, so a removed record contributes
//! nothing even when an override for it is also present.

use tracing::warn;

use crate::models::{EntityDiff, FinancialSnapshot, OverlayEntity, ScenarioOverlay};

/// Applies one entity type's diff to its base collection.
///
/// Base order is preserved and virtual records follow it.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use scorp_core::{EmployeePatch, EmployeeRecord, EntityDiff, resolve};
///
/// let base = vec![
///     EmployeeRecord { id: "w1".into(), name: "Owner".into(), salary: dec!(48000) },
///     EmployeeRecord { id: "w2".into(), name: "Assistant".into(), salary: dec!(30000) },
/// ];
/// let mut diff = EntityDiff::<EmployeeRecord>::default();
/// diff.remove("w2").override_with(
///     "w1",
///     EmployeePatch { salary: Some(dec!(60000)), ..Default::default() },
/// );
///
/// let effective = resolve(&base, &diff);
///
/// assert_eq!(effective.len(), 1);
/// assert_eq!(effective[0].salary, dec!(60000));
/// ```
pub fn resolve<T: OverlayEntity>(
    base: &[T],
    diff: &EntityDiff<T>,
) -> Vec<T> {
    for id in diff.shadowed_overrides() {
        warn!(id, "Override ignored because the record is removed");
    }
    for id in diff.dangling_overrides(base) {
        warn!(id, "Override names a record that is not in the base state");
    }

    base.iter()
        .filter(|record| !diff.removed.contains(record.id()))
        .map(|record| match diff.overridden.get(record.id()) {
            Some(patch) => record.patched(patch),
            None => record.clone(),
        })
        .chain(diff.added.iter().cloned())
        .collect()
}

/// Resolves every entity type of `overlay` against `snapshot`.
///
/// The returned snapshot carries the scenario's own deductions when it has
/// any set, and the real ones otherwise.
pub fn resolve_snapshot(
    snapshot: &FinancialSnapshot,
    overlay: &ScenarioOverlay,
) -> FinancialSnapshot {
    FinancialSnapshot {
        clients: resolve(&snapshot.clients, &overlay.clients),
        expenses: resolve(&snapshot.expenses, &overlay.expenses),
        employees: resolve(&snapshot.employees, &overlay.employees),
        contractors: resolve(&snapshot.contractors, &overlay.contractors),
        deductions: overlay
            .deductions
            .clone()
            .unwrap_or_else(|| snapshot.deductions.clone()),
    }
}
