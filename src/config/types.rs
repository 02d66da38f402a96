//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the assembled
//! [`PayrollConfig`] handed to the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

use crate::models::{Country, TaxBracket};

/// Basic salary ratio used when none is configured or the configured one is out of range.
pub const DEFAULT_BASIC_SALARY_RATIO: Decimal = Decimal::from_parts(7, 0, 0, false, 1);

/// A named pension tier and its share of the total mandatory contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PensionTier {
    /// The tier name, used as the report label.
    pub name: String,
    /// Fraction of the total mandatory contribution (e.g., 0.135).
    pub percentage: Decimal,
}

/// Split settings as written in configuration or supplied with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitSettings {
    /// Whether piece-rate earnings may be split into basic salary and allowance.
    pub enabled: bool,
    /// Share of split piece-rate earnings that becomes basic salary.
    #[serde(default)]
    pub basic_salary_ratio: Option<Decimal>,
}

/// Salary splitting configuration.
///
/// Set once before any employee is resolved and read-only afterwards. The
/// basic salary ratio always lies strictly between 0 and 1.
///
/// # Example
///
/// ```
/// use payroll_engine::config::SplitConfig;
/// use rust_decimal::Decimal;
///
/// let split = SplitConfig::new(true, Decimal::new(6, 1));
/// assert_eq!(split.allowance_ratio(), Decimal::new(4, 1));
///
/// // Out of range falls back to 0.7
/// let split = SplitConfig::new(true, Decimal::new(15, 1));
/// assert_eq!(split.basic_salary_ratio(), Decimal::new(7, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SplitSettings")]
pub struct SplitConfig {
    enabled: bool,
    basic_salary_ratio: Decimal,
}

impl SplitConfig {
    /// Creates a split configuration.
    ///
    /// A ratio outside the open interval (0, 1) is replaced by
    /// [`DEFAULT_BASIC_SALARY_RATIO`].
    pub fn new(enabled: bool, basic_salary_ratio: Decimal) -> Self {
        let ratio = if basic_salary_ratio > Decimal::ZERO && basic_salary_ratio < Decimal::ONE {
            basic_salary_ratio
        } else {
            warn!(
                ratio = %basic_salary_ratio,
                default = %DEFAULT_BASIC_SALARY_RATIO,
                "Basic salary ratio out of range, using default"
            );
            DEFAULT_BASIC_SALARY_RATIO
        };

        Self {
            enabled,
            basic_salary_ratio: ratio,
        }
    }

    /// Splitting turned off.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            basic_salary_ratio: DEFAULT_BASIC_SALARY_RATIO,
        }
    }

    /// Returns true if splitting is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the share of split earnings that becomes basic salary.
    pub fn basic_salary_ratio(&self) -> Decimal {
        self.basic_salary_ratio
    }

    /// Returns the share of split earnings that becomes allowance (`1 - ratio`).
    pub fn allowance_ratio(&self) -> Decimal {
        Decimal::ONE - self.basic_salary_ratio
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self::disabled()
    }
}

impl From<SplitSettings> for SplitConfig {
    fn from(settings: SplitSettings) -> Self {
        match settings.basic_salary_ratio {
            Some(ratio) => Self::new(settings.enabled, ratio),
            None => Self {
                enabled: settings.enabled,
                basic_salary_ratio: DEFAULT_BASIC_SALARY_RATIO,
            },
        }
    }
}

/// A country entry in countries.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryDefinition {
    /// The human-readable country name.
    pub name: String,
    /// The minimum basic salary.
    pub minimum_wage: Decimal,
    /// Tax brackets, in any order.
    #[serde(default)]
    pub tax_brackets: Vec<TaxBracket>,
}

/// countries.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct CountriesConfig {
    /// Map of country code to country definition.
    pub countries: HashMap<String, CountryDefinition>,
}

/// pension.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PensionConfig {
    /// Pension tiers in report order.
    pub tiers: Vec<PensionTier>,
}

/// split.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct SplitFileConfig {
    /// Salary splitting settings.
    pub split: SplitConfig,
}

/// The complete payroll configuration.
///
/// Aggregates the countries, pension tiers and split configuration that
/// every calculation in a run reads.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    /// Countries keyed by upper-case code.
    countries: HashMap<String, Country>,
    /// Pension tiers in report order.
    tiers: Vec<PensionTier>,
    /// Salary splitting configuration.
    split: SplitConfig,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    ///
    /// Country codes are normalized to upper case.
    pub fn new(countries: Vec<Country>, tiers: Vec<PensionTier>, split: SplitConfig) -> Self {
        let countries = countries
            .into_iter()
            .map(|mut country| {
                country.code = Country::normalize_code(&country.code);
                (country.code.clone(), country)
            })
            .collect();

        Self {
            countries,
            tiers,
            split,
        }
    }

    /// Returns all countries keyed by code.
    pub fn countries(&self) -> &HashMap<String, Country> {
        &self.countries
    }

    /// Looks up a country by code, ignoring case and surrounding whitespace.
    pub fn country(&self, code: &str) -> Option<&Country> {
        self.countries.get(&Country::normalize_code(code))
    }

    /// Returns the pension tiers.
    pub fn tiers(&self) -> &[PensionTier] {
        &self.tiers
    }

    /// Returns the split configuration.
    pub fn split(&self) -> SplitConfig {
        self.split
    }

    /// Returns a copy of this configuration with a different split configuration.
    pub fn with_split(&self, split: SplitConfig) -> Self {
        Self {
            split,
            ..self.clone()
        }
    }
}
