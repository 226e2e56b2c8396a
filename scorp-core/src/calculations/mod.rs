//! Calculators for deductions, S-Corp taxes, scenario overlays and
//! baseline comparisons.
//!
//! Data flows leaf-first: deduction records are annualized and aggregated,
//! scenario overlays are resolved against the real state, the resolved figures
//! go through the S-Corp tax calculation, and scenario results are compared
//! against the baseline.

pub mod common;
pub mod comparison;
pub mod deductions;
pub mod overlay;
pub mod scenario;
pub mod scorp_tax;

pub use comparison::{Comparison, ComparisonRow, Metric, PercentChange, compare};
pub use deductions::{DeductionCalculator, DeductionTotals};
pub use overlay::{resolve, resolve_snapshot};
pub use scenario::{AllocatedAmount, ScenarioCalculator, ScenarioResult, TaxBreakdown};
pub use scorp_tax::{SCorpTaxCalculator, TaxCalculationResult, TaxInput};
