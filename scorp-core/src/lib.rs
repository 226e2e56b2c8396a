//! S-Corp tax and "what-if" scenario engine.
//!
//! A pure, synchronous calculation library: callers hand it plain records
//! (clients, expenses, employees, contractors, deductions) and optional
//! scenario overlays, and get back tax breakdowns, scenario projections and
//! baseline comparisons. Nothing here performs I/O or keeps state between
//! calls.

pub mod calculations;
pub mod config;
pub mod models;

pub use calculations::{
    AllocatedAmount, Comparison, ComparisonRow, DeductionCalculator, DeductionTotals, Metric,
    PercentChange, SCorpTaxCalculator, ScenarioCalculator, ScenarioResult, TaxBreakdown,
    TaxCalculationResult, TaxInput, compare, resolve, resolve_snapshot,
};
pub use config::{ConfigError, EngineConfig};
pub use models::*;
