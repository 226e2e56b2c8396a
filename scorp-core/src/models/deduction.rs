use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Deduction key whose amount is subject to the meals limitation.
pub const BUSINESS_MEALS: &str = "businessMeals";
/// Deduction key whose amount is subject to the meals limitation.
pub const TRAVEL_MEALS: &str = "travelMeals";

/// A single tax deduction as entered by the user.
///
/// `amount` is interpreted by the type flags: square footage for home office
/// uses `sqft` instead, mileage records hold miles, monthly records hold a
/// monthly figure, and everything else is already annual. The three basis
/// flags are independent of each other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeductionRecord {
    pub label: String,
    pub enabled: bool,
    pub amount: Decimal,
    pub sqft: Option<Decimal>,
    pub is_home_office: bool,
    pub is_mileage: bool,
    pub is_monthly: bool,
    pub reduces_federal: bool,
    pub reduces_state: bool,
    pub reduces_fica: bool,
}

impl DeductionRecord {
    fn disabled(
        label: &str,
        reduces_fica: bool,
    ) -> Self {
        Self {
            label: label.to_string(),
            reduces_federal: true,
            reduces_state: true,
            reduces_fica,
            ..Default::default()
        }
    }

    /// The standard deduction set, every entry disabled and zeroed.
    pub fn catalog() -> BTreeMap<String, DeductionRecord> {
        let entries = [
            (
                "homeOffice",
                Self {
                    is_home_office: true,
                    sqft: Some(Decimal::ZERO),
                    ..Self::disabled("Home office", false)
                },
            ),
            (
                "mileage",
                Self {
                    is_mileage: true,
                    ..Self::disabled("Business mileage", false)
                },
            ),
            (BUSINESS_MEALS, Self::disabled("Business meals", false)),
            (TRAVEL_MEALS, Self::disabled("Travel meals", false)),
            (
                "healthInsurance",
                Self {
                    is_monthly: true,
                    ..Self::disabled("Health insurance premiums", false)
                },
            ),
            ("retirement401k", Self::disabled("401(k) contributions", false)),
            ("hsa", Self::disabled("HSA contributions", true)),
            (
                "professionalServices",
                Self::disabled("Accounting & legal", false),
            ),
            (
                "software",
                Self {
                    is_monthly: true,
                    ..Self::disabled("Software subscriptions", false)
                },
            ),
            (
                "phoneInternet",
                Self {
                    is_monthly: true,
                    ..Self::disabled("Phone & internet", false)
                },
            ),
            ("education", Self::disabled("Education & training", false)),
        ];

        entries
            .into_iter()
            .map(|(key, record)| (key.to_string(), record))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn catalog_entries_start_disabled() {
        let catalog = DeductionRecord::catalog();

        assert_eq!(catalog.len(), 11);
        assert!(catalog.values().all(|d| !d.enabled));
    }

    #[test]
    fn catalog_only_hsa_reduces_fica() {
        let catalog = DeductionRecord::catalog();

        let fica_keys: Vec<_> = catalog
            .iter()
            .filter(|(_, d)| d.reduces_fica)
            .map(|(k, _)| k.as_str())
            .collect();

        assert_eq!(fica_keys, vec!["hsa"]);
    }

    #[test]
    fn catalog_flags_special_types() {
        let catalog = DeductionRecord::catalog();

        assert!(catalog["homeOffice"].is_home_office);
        assert!(catalog["mileage"].is_mileage);
        assert!(catalog["software"].is_monthly);
        assert!(catalog.contains_key(BUSINESS_MEALS));
        assert!(catalog.contains_key(TRAVEL_MEALS));
    }
}
