//! Fixed-rate configuration for the S-Corp engine.
//!
//! Every rate defaults to the single jurisdiction and entity type the engine
//! models. Callers may override individual values (for example from a TOML
//! table); anything omitted keeps its default.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when an [`EngineConfig`] holds an out-of-range value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A tax or deduction rate must be between 0 and 1.
    #[error("{name} must be between 0 and 1, got {value}")]
    RateOutOfRange { name: &'static str, value: Decimal },

    /// The home-office rate per square foot must be non-negative.
    #[error("home office rate per sqft must be non-negative, got {0}")]
    NegativeHomeOfficeRate(Decimal),

    /// The home-office square footage cap must be non-negative.
    #[error("home office max sqft must be non-negative, got {0}")]
    NegativeHomeOfficeCap(Decimal),

    /// The mileage rate must be non-negative.
    #[error("mileage rate must be non-negative, got {0}")]
    NegativeMileageRate(Decimal),
}

/// Rates and limits used by the deduction and tax calculators.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use scorp_core::EngineConfig;
///
/// let config = EngineConfig {
///     state_income_rate: dec!(0.0495),
///     ..EngineConfig::default()
/// };
///
/// assert_eq!(config.validate(), Ok(()));
/// assert_eq!(config.federal_income_rate, dec!(0.22));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Employer share of payroll tax on W-2 salary.
    pub employer_fica_rate: Decimal,

    /// Employee share of payroll tax withheld from W-2 salary.
    pub employee_fica_rate: Decimal,

    /// Flat federal income tax rate applied to taxable income.
    pub federal_income_rate: Decimal,

    /// Flat state income tax rate applied to taxable income.
    pub state_income_rate: Decimal,

    /// Dollars deductible per square foot of home office.
    pub home_office_rate_per_sqft: Decimal,

    /// Square footage above which the home office deduction stops growing.
    pub home_office_max_sqft: Decimal,

    /// Dollars deductible per business mile.
    pub mileage_rate: Decimal,

    /// Deductible share of meal expenses.
    pub meals_deduction_rate: Decimal,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            employer_fica_rate: dec!(0.0765),
            employee_fica_rate: dec!(0.0765),
            federal_income_rate: dec!(0.22),
            state_income_rate: dec!(0.0575),
            home_office_rate_per_sqft: dec!(5),
            home_office_max_sqft: dec!(300),
            mileage_rate: dec!(0.67),
            meals_deduction_rate: dec!(0.5),
        }
    }
}

impl EngineConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - any FICA, income tax or meals rate is not in [0, 1]
    /// - the home-office rate, the home-office cap or the mileage rate is negative
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use scorp_core::{ConfigError, EngineConfig};
    ///
    /// let config = EngineConfig {
    ///     federal_income_rate: dec!(22),
    ///     ..EngineConfig::default()
    /// };
    ///
    /// assert_eq!(
    ///     config.validate(),
    ///     Err(ConfigError::RateOutOfRange {
    ///         name: "federal_income_rate",
    ///         value: dec!(22),
    ///     })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rates = [
            ("employer_fica_rate", self.employer_fica_rate),
            ("employee_fica_rate", self.employee_fica_rate),
            ("federal_income_rate", self.federal_income_rate),
            ("state_income_rate", self.state_income_rate),
            ("meals_deduction_rate", self.meals_deduction_rate),
        ];
        for (name, value) in rates {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(ConfigError::RateOutOfRange { name, value });
            }
        }
        if self.home_office_rate_per_sqft < Decimal::ZERO {
            return Err(ConfigError::NegativeHomeOfficeRate(
                self.home_office_rate_per_sqft,
            ));
        }
        if self.home_office_max_sqft < Decimal::ZERO {
            return Err(ConfigError::NegativeHomeOfficeCap(
                self.home_office_max_sqft,
            ));
        }
        if self.mileage_rate < Decimal::ZERO {
            return Err(ConfigError::NegativeMileageRate(self.mileage_rate));
        }
        Ok(())
    }
}
