//! Country model and tax brackets.
//!
//! A country supplies the minimum wage and the tax brackets that apply to
//! every employee assigned to it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::MAX_AMOUNT;
use crate::error::{EngineError, EngineResult};

/// A tax bracket: the salary level at which a flat rate activates.
///
/// The rate is a percentage (e.g., `10` for 10%) and is applied to the
/// whole salary once the threshold is met, not only to the portion above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Salary level at which this bracket's rate activates.
    pub threshold: Decimal,
    /// Rate as a percentage between 0 and 100.
    pub rate: Decimal,
}

/// A jurisdiction with a minimum wage and tax brackets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// Three-letter upper-case country code (e.g., "GHA").
    pub code: String,
    /// Human-readable country name.
    pub name: String,
    /// Minimum basic salary for employees in this country.
    pub minimum_wage: Decimal,
    /// Tax brackets in any order.
    #[serde(default)]
    pub tax_brackets: Vec<TaxBracket>,
}

impl Country {
    /// Normalizes a raw country code: trims it and upper-cases it.
    ///
    /// ```
    /// use payroll_engine::models::Country;
    ///
    /// assert_eq!(Country::normalize_code(" gha "), "GHA");
    /// ```
    pub fn normalize_code(code: &str) -> String {
        code.trim().to_ascii_uppercase()
    }

    /// Checks the country definition.
    ///
    /// The code must be exactly three ASCII letters, the minimum wage must be
    /// non-negative and every bracket must have a non-negative threshold and a
    /// rate between 0 and 100.
    pub fn validate(&self) -> EngineResult<()> {
        if self.code.len() != 3 || !self.code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(self.invalid("country code must be exactly 3 letters"));
        }

        if self.minimum_wage < Decimal::ZERO {
            return Err(self.invalid("minimum wage cannot be negative"));
        }
        if self.minimum_wage > MAX_AMOUNT {
            return Err(self.invalid(&format!("minimum wage cannot exceed {}", MAX_AMOUNT)));
        }

        for bracket in &self.tax_brackets {
            if bracket.threshold < Decimal::ZERO {
                return Err(self.invalid(&format!(
                    "tax bracket threshold {} cannot be negative",
                    bracket.threshold
                )));
            }
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE_HUNDRED {
                return Err(self.invalid(&format!(
                    "tax bracket rate {} must be between 0 and 100",
                    bracket.rate
                )));
            }
        }

        Ok(())
    }

    fn invalid(&self, message: &str) -> EngineError {
        EngineError::InvalidCountry {
            code: self.code.clone(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_country(code: &str) -> Country {
        Country {
            code: code.to_string(),
            name: "Ghana".to_string(),
            minimum_wage: dec("60"),
            tax_brackets: vec![
                TaxBracket {
                    threshold: dec("1000"),
                    rate: dec("10"),
                },
                TaxBracket {
                    threshold: dec("500"),
                    rate: dec("5"),
                },
            ],
        }
    }

    #[test]
    fn test_valid_country() {
        assert!(create_test_country("GHA").validate().is_ok());
    }

    #[test]
    fn test_two_letter_code_is_rejected() {
        match create_test_country("GH").validate() {
            Err(EngineError::InvalidCountry { code, message }) => {
                assert_eq!(code, "GH");
                assert!(message.contains("3 letters"));
            }
            other => panic!("Expected InvalidCountry, got {:?}", other),
        }
    }

    #[test]
    fn test_numeric_code_is_rejected() {
        assert!(create_test_country("G1A").validate().is_err());
    }

    #[test]
    fn test_negative_minimum_wage_is_rejected() {
        let mut country = create_test_country("GHA");
        country.minimum_wage = dec("-5");
        assert!(country.validate().is_err());
    }

    #[test]
    fn test_minimum_wage_above_max_is_rejected() {
        let mut country = create_test_country("GHA");
        country.minimum_wage = dec("50000000000000000000000000000");

        match country.validate() {
            Err(EngineError::InvalidCountry { message, .. }) => {
                assert!(message.contains("minimum wage cannot exceed"))
            }
            other => panic!("Expected InvalidCountry, got {:?}", other),
        }
    }

    #[test]
    fn test_rate_above_100_is_rejected() {
        let mut country = create_test_country("GHA");
        country.tax_brackets[0].rate = dec("100.5");

        match country.validate() {
            Err(EngineError::InvalidCountry { message, .. }) => {
                assert!(message.contains("between 0 and 100"));
            }
            other => panic!("Expected InvalidCountry, got {:?}", other),
        }
    }

    #[test]
    fn test_rate_of_exactly_100_is_allowed() {
        let mut country = create_test_country("GHA");
        country.tax_brackets[0].rate = dec("100");
        assert!(country.validate().is_ok());
    }

    #[test]
    fn test_normalize_code_uppercases_and_trims() {
        assert_eq!(Country::normalize_code("nga"), "NGA");
        assert_eq!(Country::normalize_code("  Ken\n"), "KEN");
    }

    #[test]
    fn test_deserialize_country_without_brackets() {
        let json = r#"{"code": "TGO", "name": "Togo", "minimum_wage": "52"}"#;
        let country: Country = serde_json::from_str(json).unwrap();
        assert!(country.tax_brackets.is_empty());
        assert_eq!(country.minimum_wage, dec("52"));
    }
}
