//! Pension contribution calculation.
//!
//! The employee contributes 5.5% and the employer 13% of the basic salary.
//! Their sum, the total mandatory contribution, is then allocated across the
//! configured tiers. The allocation is a reporting view of the combined
//! amount and is independent of the employee/employer split.

use rust_decimal::Decimal;

use crate::config::PensionTier;
use crate::models::{AuditStep, AuditWarning, PensionContribution, TierAllocation};

/// Employee contribution rate (5.5%).
pub const EMPLOYEE_PENSION_RATE: Decimal = Decimal::from_parts(55, 0, 0, false, 3);

/// Employer contribution rate (13%).
pub const EMPLOYER_PENSION_RATE: Decimal = Decimal::from_parts(13, 0, 0, false, 2);

/// The result of a pension calculation, including the contribution and audit step.
#[derive(Debug, Clone)]
pub struct PensionResult {
    /// The employee/employer contributions and tier allocations.
    pub contribution: PensionContribution,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes pension contributions on a basic salary.
///
/// Tier percentages are not checked; whatever allocation results is reported.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_pension;
/// use rust_decimal::Decimal;
///
/// let pension = compute_pension(Decimal::new(1000, 0), &[]);
/// assert_eq!(pension.employee_contribution, Decimal::new(55, 0));
/// assert_eq!(pension.employer_contribution, Decimal::new(130, 0));
/// assert_eq!(pension.total_mandatory, Decimal::new(185, 0));
/// ```
pub fn compute_pension(basic_salary: Decimal, tiers: &[PensionTier]) -> PensionContribution {
    let employee_contribution = basic_salary * EMPLOYEE_PENSION_RATE;
    let employer_contribution = basic_salary * EMPLOYER_PENSION_RATE;
    let total_mandatory = employee_contribution + employer_contribution;

    let tier_allocations = tiers
        .iter()
        .map(|tier| TierAllocation {
            name: tier.name.clone(),
            percentage: tier.percentage,
            amount: total_mandatory.saturating_mul(tier.percentage),
        })
        .collect();

    PensionContribution {
        employee_contribution,
        employer_contribution,
        total_mandatory,
        tier_allocations,
    }
}

/// Returns a warning if the tier percentages do not sum to exactly 1.
///
/// An empty tier set produces no warning.
pub fn tier_allocation_warning(tiers: &[PensionTier]) -> Option<AuditWarning> {
    if tiers.is_empty() {
        return None;
    }

    let sum: Decimal = tiers.iter().map(|t| t.percentage).sum();
    if sum == Decimal::ONE {
        return None;
    }

    Some(AuditWarning {
        code: "TIER_ALLOCATION_MISMATCH".to_string(),
        message: format!(
            "Pension tier percentages sum to {} instead of 1; tier amounts will not add up to the total mandatory contribution",
            sum.normalize()
        ),
        severity: "low".to_string(),
    })
}

/// Calculates pension contributions and records them in an audit step.
pub fn calculate_pension(
    basic_salary: Decimal,
    tiers: &[PensionTier],
    step_number: u32,
) -> PensionResult {
    let contribution = compute_pension(basic_salary, tiers);

    let tier_json: Vec<serde_json::Value> = contribution
        .tier_allocations
        .iter()
        .map(|t| {
            serde_json::json!({
                "name": t.name,
                "percentage": t.percentage.normalize().to_string(),
                "amount": t.amount.normalize().to_string()
            })
        })
        .collect();

    let audit_step = AuditStep {
        step_number,
        rule_id: "pension_contribution".to_string(),
        rule_name: "Pension Contribution".to_string(),
        input: serde_json::json!({
            "basic_salary": basic_salary.normalize().to_string(),
            "employee_rate": EMPLOYEE_PENSION_RATE.normalize().to_string(),
            "employer_rate": EMPLOYER_PENSION_RATE.normalize().to_string(),
            "tier_count": tiers.len()
        }),
        output: serde_json::json!({
            "employee_contribution": contribution.employee_contribution.normalize().to_string(),
            "employer_contribution": contribution.employer_contribution.normalize().to_string(),
            "total_mandatory": contribution.total_mandatory.normalize().to_string(),
            "tiers": tier_json
        }),
        reasoning: format!(
            "${} x {} = ${} (employee) + ${} x {} = ${} (employer) = ${} mandatory",
            basic_salary.normalize(),
            EMPLOYEE_PENSION_RATE.normalize(),
            contribution.employee_contribution.normalize(),
            basic_salary.normalize(),
            EMPLOYER_PENSION_RATE.normalize(),
            contribution.employer_contribution.normalize(),
            contribution.total_mandatory.normalize()
        ),
    };

    PensionResult {
        contribution,
        audit_step,
    }
}
