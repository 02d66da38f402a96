//! Minimum-wage floor.
//!
//! Raises a basic salary to the country's minimum wage when it falls short.
//! Applied after salary resolution, so a split or piece-rate basic can still
//! be topped up.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The result of applying the minimum-wage floor.
#[derive(Debug, Clone)]
pub struct MinimumWageResult {
    /// The basic salary after the floor.
    pub basic_salary: Decimal,
    /// The amount added to reach the minimum (zero when not applied).
    pub adjustment: Decimal,
    /// Whether the basic salary was raised.
    pub applied: bool,
    /// The audit step recording this decision.
    pub audit_step: AuditStep,
}

/// Raises `basic_salary` to `minimum_wage` if it is below it.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::apply_minimum_wage;
/// use rust_decimal::Decimal;
///
/// let result = apply_minimum_wage(Decimal::new(40, 0), Decimal::new(60, 0), 1);
/// assert_eq!(result.basic_salary, Decimal::new(60, 0));
/// assert_eq!(result.adjustment, Decimal::new(20, 0));
/// ```
pub fn apply_minimum_wage(
    basic_salary: Decimal,
    minimum_wage: Decimal,
    step_number: u32,
) -> MinimumWageResult {
    let applied = basic_salary < minimum_wage;
    let (final_basic, adjustment) = if applied {
        (minimum_wage, minimum_wage - basic_salary)
    } else {
        (basic_salary, Decimal::ZERO)
    };

    let reasoning = if applied {
        format!(
            "Basic salary ${} is below minimum wage ${} - raised by ${}",
            basic_salary.normalize(),
            minimum_wage.normalize(),
            adjustment.normalize()
        )
    } else {
        format!(
            "Basic salary ${} meets minimum wage ${}",
            basic_salary.normalize(),
            minimum_wage.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "minimum_wage_floor".to_string(),
        rule_name: "Minimum Wage Floor".to_string(),
        input: serde_json::json!({
            "basic_salary": basic_salary.normalize().to_string(),
            "minimum_wage": minimum_wage.normalize().to_string()
        }),
        output: serde_json::json!({
            "basic_salary": final_basic.normalize().to_string(),
            "adjustment": adjustment.normalize().to_string(),
            "floor_applied": applied
        }),
        reasoning,
    };

    MinimumWageResult {
        basic_salary: final_basic,
        adjustment,
        applied,
        audit_step,
    }
}
