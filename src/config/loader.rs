//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::models::Country;

use super::types::{
    CountriesConfig, PayrollConfig, PensionConfig, PensionTier, SplitConfig, SplitFileConfig,
};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── countries.yaml  # Minimum wages and tax brackets per country
/// ├── pension.yaml    # Pension tiers
/// └── split.yaml      # Salary splitting settings
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// let ghana = loader.get_country("GHA")?;
/// println!("Minimum wage in {}: {}", ghana.name, ghana.minimum_wage);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if any file is missing or contains invalid YAML, or
    /// if a country definition is malformed.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let countries_config = Self::load_yaml::<CountriesConfig>(&path.join("countries.yaml"))?;
        let countries = Self::build_countries(countries_config)?;

        let pension_config = Self::load_yaml::<PensionConfig>(&path.join("pension.yaml"))?;
        let split_config = Self::load_yaml::<SplitFileConfig>(&path.join("split.yaml"))?;

        info!(
            path = %path.display(),
            countries = countries.len(),
            tiers = pension_config.tiers.len(),
            split_enabled = split_config.split.is_enabled(),
            "Loaded payroll configuration"
        );

        Ok(Self::from_parts(
            countries,
            pension_config.tiers,
            split_config.split,
        ))
    }

    /// Builds a loader from already-validated parts.
    pub fn from_parts(countries: Vec<Country>, tiers: Vec<PensionTier>, split: SplitConfig) -> Self {
        Self {
            config: PayrollConfig::new(countries, tiers, split),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();
        debug!(path = %path_str, "Reading configuration file");

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Turns the countries file into validated countries.
    fn build_countries(config: CountriesConfig) -> EngineResult<Vec<Country>> {
        let mut countries = Vec::with_capacity(config.countries.len());

        for (code, definition) in config.countries {
            let country = Country {
                code: Country::normalize_code(&code),
                name: definition.name,
                minimum_wage: definition.minimum_wage,
                tax_brackets: definition.tax_brackets,
            };
            country.validate()?;
            countries.push(country);
        }

        Ok(countries)
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Gets a country by its code.
    ///
    /// Returns `CountryNotFound` if no country with that code is configured.
    pub fn get_country(&self, code: &str) -> EngineResult<&Country> {
        self.config
            .country(code)
            .ok_or_else(|| EngineError::CountryNotFound {
                code: Country::normalize_code(code),
            })
    }

    /// Returns the configured pension tiers.
    pub fn tiers(&self) -> &[PensionTier] {
        self.config.tiers()
    }

    /// Returns the configured split settings.
    pub fn split(&self) -> SplitConfig {
        self.config.split()
    }
}
