use std::fs;
use std::io::{self, Read};
use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use scorp_core::{ConfigError, EngineConfig, FinancialSnapshot, ScenarioOverlay};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use toml::{Table, Value};
use tracing::debug;

/// Largest magnitude accepted for any number in a data or rates file.
///
/// Keeps every product and sum the engine forms (hourly pay, annualization,
/// totals over many records) well inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000);

/// Keys whose values are text, never amounts.
const TEXT_KEYS: [&str; 5] = ["id", "name", "label", "model", "removed"];

/// Errors that can occur when loading a data or rates file.
#[derive(Debug, Error)]
pub enum DataFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid rates: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Scenario '{0}' not found in data file")]
    UnknownScenario(String),

    #[error("Amount {value} at '{path}' exceeds the supported maximum of {MAX_AMOUNT}")]
    AmountOutOfRange { path: String, value: String },
}

impl From<toml::de::Error> for DataFileError {
    fn from(err: toml::de::Error) -> Self {
        DataFileError::TomlParse(err.to_string())
    }
}

/// Contents of a planner data file.
///
/// The real financial state sits at the top level (`[[clients]]`,
/// `[[expenses]]`, `[[employees]]`, `[[contractors]]`, `[deductions.<key>]`),
/// followed by any number of `[[scenarios]]` and an optional `[rates]` table.
/// Decimal values are written as strings, e.g. `monthly_retainer = "20000"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataFile {
    #[serde(flatten)]
    pub snapshot: FinancialSnapshot,
    pub scenarios: Vec<ScenarioOverlay>,
    pub rates: Option<EngineConfig>,
}

impl DataFile {
    /// Reads and parses a data file from disk.
    pub fn load(path: &Path) -> Result<Self, DataFileError> {
        debug!(path = %path.display(), "loading data file");
        Self::parse(fs::File::open(path)?)
    }

    /// Parses a data file from any reader.
    pub fn parse<R: Read>(mut reader: R) -> Result<Self, DataFileError> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        parse_bounded(&contents)
    }

    /// Rates to calculate with: `overrides` when given, then the file's own
    /// `[rates]` table, then the defaults. The chosen rates are validated.
    pub fn engine_config(
        &self,
        overrides: Option<EngineConfig>,
    ) -> Result<EngineConfig, DataFileError> {
        let config = overrides
            .or_else(|| self.rates.clone())
            .unwrap_or_default();
        config.validate()?;
        Ok(config)
    }

    /// Scenarios to run: the one named `name`, or all of them.
    pub fn select_scenarios(
        &self,
        name: Option<&str>,
    ) -> Result<Vec<&ScenarioOverlay>, DataFileError> {
        match name {
            None => Ok(self.scenarios.iter().collect()),
            Some(name) => self
                .scenarios
                .iter()
                .find(|scenario| scenario.name == name)
                .map(|scenario| vec![scenario])
                .ok_or_else(|| DataFileError::UnknownScenario(name.to_string())),
        }
    }
}

/// Reads a standalone rates file: the `EngineConfig` fields as top-level keys.
/// Missing keys take their defaults.
pub fn load_rates(path: &Path) -> Result<EngineConfig, DataFileError> {
    let contents = fs::read_to_string(path)?;
    let config: EngineConfig = parse_bounded(&contents)?;
    config.validate()?;
    Ok(config)
}

/// Parses TOML, rejecting any amount beyond [`MAX_AMOUNT`] before it can
/// reach the engine.
fn parse_bounded<T: DeserializeOwned>(contents: &str) -> Result<T, DataFileError> {
    let table: Table = contents.parse()?;
    for (key, value) in &table {
        check_amounts(key, value)?;
    }
    Ok(Value::Table(table).try_into()?)
}

fn check_amounts(
    path: &str,
    value: &Value,
) -> Result<(), DataFileError> {
    let out_of_range = match value {
        Value::Table(table) => {
            for (key, value) in table {
                if !TEXT_KEYS.contains(&key.as_str()) {
                    check_amounts(&format!("{path}.{key}"), value)?;
                }
            }
            false
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                check_amounts(&format!("{path}[{i}]"), item)?;
            }
            false
        }
        Value::String(text) => match text.trim().parse::<Decimal>() {
            Ok(amount) => amount.abs() > MAX_AMOUNT,
            Err(_) => looks_numeric(text),
        },
        Value::Integer(n) => Decimal::from(*n).abs() > MAX_AMOUNT,
        Value::Float(f) => Decimal::try_from(*f).map_or(true, |amount| amount.abs() > MAX_AMOUNT),
        Value::Boolean(_) | Value::Datetime(_) => false,
    };

    if out_of_range {
        return Err(DataFileError::AmountOutOfRange {
            path: path.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

/// A digit string too long to parse as a `Decimal` is still an oversized
/// amount. Other unparseable text is left for deserialization to report.
fn looks_numeric(text: &str) -> bool {
    let text = text.trim().trim_start_matches(['-', '+']);
    !text.is_empty()
        && text.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '_')
        && text.chars().any(|c| c.is_ascii_digit())
}
