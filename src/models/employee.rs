//! Employee model and related types.
//!
//! This module defines the Employee struct and the piece-rate work items
//! that feed the payroll calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::checked_piece_rate_total;
use crate::error::{EngineError, EngineResult};

/// Largest basic salary or piece-rate income accepted at intake (10^15).
///
/// Keeps gross pay, tax at a 100% rate and pension far inside the range of
/// [`Decimal`].
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// A single piece-rate work item: a number of units produced at a unit rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceRateItem {
    /// Label for the work item (e.g., "shirts", "crates").
    pub item: String,
    /// The amount paid per unit.
    pub rate: Decimal,
    /// The number of units produced.
    pub quantity: Decimal,
}

impl PieceRateItem {
    /// Returns the earnings for this item (`rate * quantity`), saturating at
    /// [`Decimal::MAX`].
    pub fn earnings(&self) -> Decimal {
        self.rate.saturating_mul(self.quantity)
    }

    /// Returns the earnings for this item, or `None` if the product overflows.
    pub fn checked_earnings(&self) -> Option<Decimal> {
        self.rate.checked_mul(self.quantity)
    }
}

/// Represents an employee whose pay is resolved by the engine.
///
/// An employee is never modified by a calculation. The rewritten basic
/// salary and the derived allowance are reported on the
/// [`PayrollResult`](super::PayrollResult) instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Name used to identify the employee in reports.
    pub name: String,
    /// Fixed salary component. Zero means the employee has no fixed salary.
    pub basic_salary: Decimal,
    /// Code of the country whose rules apply (e.g., "GHA").
    pub country_code: String,
    /// Piece-rate work recorded for this employee, in entry order.
    #[serde(default)]
    pub piece_rate_items: Vec<PieceRateItem>,
}

impl Employee {
    /// Returns true if any piece-rate work has been recorded.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Employee, PieceRateItem};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     name: "Kofi".to_string(),
    ///     basic_salary: Decimal::new(1000, 0),
    ///     country_code: "GHA".to_string(),
    ///     piece_rate_items: vec![PieceRateItem {
    ///         item: "baskets".to_string(),
    ///         rate: Decimal::new(5, 0),
    ///         quantity: Decimal::new(10, 0),
    ///     }],
    /// };
    /// assert!(employee.has_piece_rate_items());
    /// ```
    pub fn has_piece_rate_items(&self) -> bool {
        !self.piece_rate_items.is_empty()
    }

    /// Checks the record before it is handed to the engine.
    ///
    /// Rejects an empty name, a negative basic salary, negative piece-rate
    /// rates or quantities, and an employee with neither a basic salary nor
    /// any piece-rate income. Basic salary and piece-rate income are each
    /// capped at [`MAX_AMOUNT`].
    pub fn validate(&self) -> EngineResult<()> {
        if self.name.trim().is_empty() {
            return Err(self.invalid("name", "cannot be empty"));
        }

        if self.basic_salary < Decimal::ZERO {
            return Err(self.invalid("basic_salary", "cannot be negative"));
        }
        if self.basic_salary > MAX_AMOUNT {
            return Err(self.invalid("basic_salary", &format!("cannot exceed {}", MAX_AMOUNT)));
        }

        for (index, item) in self.piece_rate_items.iter().enumerate() {
            if item.rate < Decimal::ZERO {
                return Err(self.invalid(
                    &format!("piece_rate_items[{}].rate", index),
                    "cannot be negative",
                ));
            }
            if item.quantity < Decimal::ZERO {
                return Err(self.invalid(
                    &format!("piece_rate_items[{}].quantity", index),
                    "cannot be negative",
                ));
            }
        }

        let piece_income = match checked_piece_rate_total(&self.piece_rate_items) {
            Some(total) if total <= MAX_AMOUNT => total,
            _ => {
                return Err(self.invalid(
                    "piece_rate_items",
                    &format!("piece-rate income cannot exceed {}", MAX_AMOUNT),
                ));
            }
        };
        if self.basic_salary.is_zero() && piece_income.is_zero() {
            return Err(self.invalid(
                "basic_salary",
                "employee requires a basic salary or piece-rate income",
            ));
        }

        Ok(())
    }

    fn invalid(&self, field: &str, message: &str) -> EngineError {
        EngineError::InvalidEmployee {
            name: self.name.clone(),
            field: field.to_string(),
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

    fn item(rate: &str, quantity: &str) -> PieceRateItem {
        PieceRateItem {
            item: "units".to_string(),
            rate: dec(rate),
            quantity: dec(quantity),
        }
    }

    fn create_test_employee(basic: &str, items: Vec<PieceRateItem>) -> Employee {
        Employee {
            name: "Ama Mensah".to_string(),
            basic_salary: dec(basic),
            country_code: "GHA".to_string(),
            piece_rate_items: items,
        }
    }

    #[test]
    fn test_deserialize_employee_with_piece_rate() {
        let json = r#"{
            "name": "Ama Mensah",
            "basic_salary": "0",
            "country_code": "GHA",
            "piece_rate_items": [
                {"item": "baskets", "rate": "10", "quantity": "5"}
            ]
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.name, "Ama Mensah");
        assert_eq!(employee.basic_salary, Decimal::ZERO);
        assert_eq!(employee.piece_rate_items.len(), 1);
        assert_eq!(employee.piece_rate_items[0].earnings(), dec("50"));
    }

    #[test]
    fn test_deserialize_employee_without_items_defaults_to_empty() {
        let json = r#"{
            "name": "Kwame",
            "basic_salary": "1500.00",
            "country_code": "GHA"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert!(employee.piece_rate_items.is_empty());
        assert!(!employee.has_piece_rate_items());
    }

    #[test]
    fn test_valid_employee_with_basic_only() {
        let employee = create_test_employee("1000", vec![]);
        assert!(employee.validate().is_ok());
    }

    #[test]
    fn test_valid_employee_with_piece_rate_only() {
        let employee = create_test_employee("0", vec![item("10", "5")]);
        assert!(employee.validate().is_ok());
    }

    #[test]
    fn test_no_income_is_rejected() {
        let employee = create_test_employee("0", vec![]);

        match employee.validate() {
            Err(EngineError::InvalidEmployee { field, message, .. }) => {
                assert_eq!(field, "basic_salary");
                assert!(message.contains("piece-rate"));
            }
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_quantity_items_without_basic_are_rejected() {
        let employee = create_test_employee("0", vec![item("10", "0")]);
        assert!(employee.validate().is_err());
    }

    #[test]
    fn test_negative_basic_salary_is_rejected() {
        let employee = create_test_employee("-1", vec![]);

        match employee.validate() {
            Err(EngineError::InvalidEmployee { name, field, .. }) => {
                assert_eq!(name, "Ama Mensah");
                assert_eq!(field, "basic_salary");
            }
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_rate_is_rejected_with_item_index() {
        let employee = create_test_employee("100", vec![item("1", "1"), item("-2", "3")]);

        match employee.validate() {
            Err(EngineError::InvalidEmployee { field, .. }) => {
                assert_eq!(field, "piece_rate_items[1].rate");
            }
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_quantity_is_rejected() {
        let employee = create_test_employee("100", vec![item("2", "-3")]);

        match employee.validate() {
            Err(EngineError::InvalidEmployee { field, .. }) => {
                assert_eq!(field, "piece_rate_items[0].quantity");
            }
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut employee = create_test_employee("100", vec![]);
        employee.name = "   ".to_string();

        match employee.validate() {
            Err(EngineError::InvalidEmployee { field, .. }) => assert_eq!(field, "name"),
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_max_amount_is_10_pow_15() {
        assert_eq!(MAX_AMOUNT, dec("1000000000000000"));
    }

    #[test]
    fn test_piece_rate_product_overflow_is_rejected() {
        let employee =
            create_test_employee("0", vec![item("1000000000000000", "1000000000000000")]);

        match employee.validate() {
            Err(EngineError::InvalidEmployee { field, message, .. }) => {
                assert_eq!(field, "piece_rate_items");
                assert!(message.contains("cannot exceed"));
            }
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_piece_rate_income_above_max_is_rejected() {
        let employee = create_test_employee(
            "100",
            vec![item("600000000000000", "1"), item("600000000000000", "1")],
        );

        match employee.validate() {
            Err(EngineError::InvalidEmployee { field, .. }) => {
                assert_eq!(field, "piece_rate_items");
            }
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_basic_salary_above_max_is_rejected() {
        let employee = create_test_employee("50000000000000000000000000000", vec![]);

        match employee.validate() {
            Err(EngineError::InvalidEmployee { field, .. }) => assert_eq!(field, "basic_salary"),
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_amounts_at_max_are_accepted() {
        let employee =
            create_test_employee("1000000000000000", vec![item("1000000000000000", "1")]);
        assert!(employee.validate().is_ok());
    }

    #[test]
    fn test_earnings_saturate_instead_of_overflowing() {
        let huge = item("50000000000000000000000000000", "10");
        assert_eq!(huge.earnings(), Decimal::MAX);
        assert_eq!(huge.checked_earnings(), None);
    }

    #[test]
    fn test_serialize_employee() {
        let employee = create_test_employee("1000", vec![item("2.5", "4")]);
        let json = serde_json::to_string(&employee).unwrap();

        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }
}
