//! Configuration loading and management for the payroll engine.
//!
//! This module provides functionality to load payroll configurations from YAML
//! files: countries with their minimum wages and tax brackets, pension tiers,
//! and salary splitting settings.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Pension tiers: {}", config.tiers().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CountriesConfig, CountryDefinition, DEFAULT_BASIC_SALARY_RATIO, PayrollConfig, PensionConfig,
    PensionTier, SplitConfig, SplitFileConfig, SplitSettings,
};
