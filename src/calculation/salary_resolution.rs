//! Salary resolution: deciding how piece-rate earnings combine with basic salary.
//!
//! ## Branches (checked in order)
//!
//! 1. **No basic** - no fixed salary and positive piece-rate earnings: the
//!    piece-rate total becomes the basic salary.
//! 2. **Split** - splitting enabled and piece-rate earnings at least equal to
//!    the basic salary: the earnings are converted into a new basic salary
//!    (`total * ratio`) and an allowance (`total * (1 - ratio)`).
//! 3. **Bonus** - a basic salary plus piece-rate work that was not split: the
//!    basic salary is kept and the earnings are paid as an allowance.
//! 4. **Basic only** - nothing else applies: no allowance.
//!
//! Piece-rate earnings consumed by branches 1 and 2 are reported as zero so
//! they are never counted twice.

use rust_decimal::Decimal;

use crate::config::SplitConfig;
use crate::models::{AuditStep, SalaryResolution};

/// The outcome of salary resolution, before the minimum-wage floor.
#[derive(Debug, Clone)]
pub struct SalaryResolutionResult {
    /// The branch that was taken.
    pub resolution: SalaryResolution,
    /// The resolved basic salary.
    pub basic_salary: Decimal,
    /// The resolved allowance.
    pub allowance: Decimal,
    /// Piece-rate earnings still reported separately.
    pub piece_rate_total: Decimal,
    /// The audit step recording this decision.
    pub audit_step: AuditStep,
}

/// Resolves basic salary and allowance from the original basic salary and
/// the aggregated piece-rate earnings.
///
/// # Arguments
///
/// * `original_basic` - The basic salary as supplied (zero for none)
/// * `piece_total` - The aggregated piece-rate earnings
/// * `has_piece_rate_items` - Whether any piece-rate items were recorded
/// * `split` - The salary splitting configuration
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::resolve_salary;
/// use payroll_engine::config::SplitConfig;
/// use payroll_engine::models::SalaryResolution;
/// use rust_decimal::Decimal;
///
/// let split = SplitConfig::new(true, Decimal::new(7, 1));
/// let result = resolve_salary(Decimal::new(100, 0), Decimal::new(150, 0), true, &split, 1);
///
/// assert_eq!(result.resolution, SalaryResolution::Split);
/// assert_eq!(result.basic_salary, Decimal::new(105, 0));
/// assert_eq!(result.allowance, Decimal::new(45, 0));
/// ```
pub fn resolve_salary(
    original_basic: Decimal,
    piece_total: Decimal,
    has_piece_rate_items: bool,
    split: &SplitConfig,
    step_number: u32,
) -> SalaryResolutionResult {
    let has_basic = original_basic > Decimal::ZERO;

    let (resolution, basic_salary, allowance, piece_rate_total, reasoning) =
        if original_basic.is_zero() && piece_total > Decimal::ZERO {
            (
                SalaryResolution::NoBasic,
                piece_total,
                Decimal::ZERO,
                Decimal::ZERO,
                format!(
                    "No basic salary - piece-rate earnings ${} become the basic salary",
                    piece_total.normalize()
                ),
            )
        } else if has_basic && split.is_enabled() && piece_total >= original_basic {
            let basic = piece_total * split.basic_salary_ratio();
            let allowance = piece_total * split.allowance_ratio();
            (
                SalaryResolution::Split,
                basic,
                allowance,
                Decimal::ZERO,
                format!(
                    "Piece-rate ${} >= basic ${} - split into basic ${} x {} = ${} and allowance ${} x {} = ${}",
                    piece_total.normalize(),
                    original_basic.normalize(),
                    piece_total.normalize(),
                    split.basic_salary_ratio().normalize(),
                    basic.normalize(),
                    piece_total.normalize(),
                    split.allowance_ratio().normalize(),
                    allowance.normalize()
                ),
            )
        } else if has_basic && has_piece_rate_items {
            let reason = if split.is_enabled() {
                "piece-rate below basic salary"
            } else {
                "splitting disabled"
            };
            (
                SalaryResolution::Bonus,
                original_basic,
                piece_total,
                piece_total,
                format!(
                    "Basic salary ${} kept; piece-rate ${} paid as allowance ({})",
                    original_basic.normalize(),
                    piece_total.normalize(),
                    reason
                ),
            )
        } else {
            (
                SalaryResolution::BasicOnly,
                original_basic,
                Decimal::ZERO,
                Decimal::ZERO,
                format!(
                    "Basic salary ${} with no piece-rate earnings - no allowance",
                    original_basic.normalize()
                ),
            )
        };

    let audit_step = AuditStep {
        step_number,
        rule_id: "salary_resolution".to_string(),
        rule_name: "Salary Resolution".to_string(),
        input: serde_json::json!({
            "original_basic_salary": original_basic.normalize().to_string(),
            "piece_rate_total": piece_total.normalize().to_string(),
            "has_piece_rate_items": has_piece_rate_items,
            "split_enabled": split.is_enabled(),
            "basic_salary_ratio": split.basic_salary_ratio().normalize().to_string()
        }),
        output: serde_json::json!({
            "resolution": resolution.as_str(),
            "basic_salary": basic_salary.normalize().to_string(),
            "allowance": allowance.normalize().to_string(),
            "piece_rate_total": piece_rate_total.normalize().to_string()
        }),
        reasoning,
    };

    SalaryResolutionResult {
        resolution,
        basic_salary,
        allowance,
        piece_rate_total,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn split_enabled() -> SplitConfig {
        SplitConfig::new(true, dec("0.7"))
    }

    /// SR-001: no basic salary - piece-rate becomes basic
    #[test]
    fn test_no_basic_consumes_piece_rate() {
        let result = resolve_salary(Decimal::ZERO, dec("110"), true, &split_enabled(), 1);

        assert_eq!(result.resolution, SalaryResolution::NoBasic);
        assert_eq!(result.basic_salary, dec("110"));
        assert_eq!(result.allowance, Decimal::ZERO);
        assert_eq!(result.piece_rate_total, Decimal::ZERO);
        assert_eq!(result.audit_step.rule_id, "salary_resolution");
        assert_eq!(
            result.audit_step.output["resolution"].as_str().unwrap(),
            "no_basic"
        );
    }

    /// SR-002: no basic salary is never split, even when splitting is enabled
    #[test]
    fn test_no_basic_takes_precedence_over_split() {
        let result = resolve_salary(Decimal::ZERO, dec("500"), true, &split_enabled(), 1);

        assert_eq!(result.resolution, SalaryResolution::NoBasic);
        assert_eq!(result.basic_salary, dec("500"));
    }

    /// SR-003: split replaces the basic salary
    #[test]
    fn test_split_when_piece_rate_exceeds_basic() {
        let result = resolve_salary(dec("100"), dec("150"), true, &split_enabled(), 1);

        assert_eq!(result.resolution, SalaryResolution::Split);
        assert_eq!(result.basic_salary, dec("105"));
        assert_eq!(result.allowance, dec("45"));
        assert_eq!(result.piece_rate_total, Decimal::ZERO);
    }

    /// SR-004: split triggers when piece-rate equals basic
    #[test]
    fn test_split_when_piece_rate_equals_basic() {
        let result = resolve_salary(dec("100"), dec("100"), true, &split_enabled(), 1);

        assert_eq!(result.resolution, SalaryResolution::Split);
        assert_eq!(result.basic_salary, dec("70"));
        assert_eq!(result.allowance, dec("30"));
    }

    /// SR-005: bonus when splitting disabled
    #[test]
    fn test_bonus_when_split_disabled() {
        let result = resolve_salary(dec("100"), dec("50"), true, &SplitConfig::disabled(), 1);

        assert_eq!(result.resolution, SalaryResolution::Bonus);
        assert_eq!(result.basic_salary, dec("100"));
        assert_eq!(result.allowance, dec("50"));
        assert_eq!(result.piece_rate_total, dec("50"));
        assert!(result.audit_step.reasoning.contains("splitting disabled"));
    }

    /// SR-006: bonus when piece-rate is below basic
    #[test]
    fn test_bonus_when_piece_rate_below_basic() {
        let result = resolve_salary(dec("100"), dec("99.99"), true, &split_enabled(), 1);

        assert_eq!(result.resolution, SalaryResolution::Bonus);
        assert_eq!(result.allowance, dec("99.99"));
        assert!(result.audit_step.reasoning.contains("below basic"));
    }

    /// SR-007: bonus when splitting disabled even if piece-rate exceeds basic
    #[test]
    fn test_bonus_when_split_disabled_and_piece_rate_exceeds_basic() {
        let result = resolve_salary(dec("100"), dec("300"), true, &SplitConfig::disabled(), 1);

        assert_eq!(result.resolution, SalaryResolution::Bonus);
        assert_eq!(result.basic_salary, dec("100"));
        assert_eq!(result.allowance, dec("300"));
    }

    /// SR-008: basic only
    #[test]
    fn test_basic_only_without_items() {
        let result = resolve_salary(dec("1000"), Decimal::ZERO, false, &split_enabled(), 1);

        assert_eq!(result.resolution, SalaryResolution::BasicOnly);
        assert_eq!(result.basic_salary, dec("1000"));
        assert_eq!(result.allowance, Decimal::ZERO);
        assert_eq!(result.piece_rate_total, Decimal::ZERO);
    }

    #[test]
    fn test_zero_earning_items_with_basic_is_bonus_of_zero() {
        let result = resolve_salary(dec("1000"), Decimal::ZERO, true, &split_enabled(), 1);

        assert_eq!(result.resolution, SalaryResolution::Bonus);
        assert_eq!(result.allowance, Decimal::ZERO);
    }

    #[test]
    fn test_no_income_falls_through_to_basic_only() {
        let result = resolve_salary(Decimal::ZERO, Decimal::ZERO, false, &split_enabled(), 1);

        assert_eq!(result.resolution, SalaryResolution::BasicOnly);
        assert_eq!(result.basic_salary, Decimal::ZERO);
    }

    #[test]
    fn test_split_uses_configured_ratio() {
        let split = SplitConfig::new(true, dec("0.6"));
        let result = resolve_salary(dec("200"), dec("250"), true, &split, 1);

        assert_eq!(result.basic_salary, dec("150"));
        assert_eq!(result.allowance, dec("100"));
        assert_eq!(result.basic_salary + result.allowance, dec("250"));
    }

    #[test]
    fn test_audit_reasoning_explains_split() {
        let result = resolve_salary(dec("100"), dec("150"), true, &split_enabled(), 2);

        assert_eq!(result.audit_step.step_number, 2);
        assert!(result.audit_step.reasoning.contains("$150 x 0.7 = $105"));
        assert!(result.audit_step.reasoning.contains("$150 x 0.3 = $45"));
    }
}
