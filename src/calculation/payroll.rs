//! Per-employee payroll calculation.
//!
//! Chains the individual rules in a fixed order: piece-rate aggregation,
//! salary resolution, minimum-wage floor, gross pay, peak-bracket tax on the
//! gross, pension on the final basic salary, and net pay.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{PensionTier, SplitConfig};
use crate::models::{AuditStep, AuditTrace, AuditWarning, Country, Employee, PayrollResult};

use super::minimum_wage::apply_minimum_wage;
use super::pension::{calculate_pension, tier_allocation_warning};
use super::piece_rate::aggregate_piece_rate;
use super::salary_resolution::resolve_salary;
use super::tax::{calculate_tax, duplicate_threshold_warning};

/// Calculates pay for one employee under one country's rules.
///
/// This is a pure function of its inputs: the employee is not modified and
/// no state is carried between calls. It never fails; intake validation is
/// expected to have run first (see [`Employee::validate`]).
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_payroll;
/// use payroll_engine::config::SplitConfig;
/// use payroll_engine::models::{Country, Employee, SalaryResolution};
/// use rust_decimal::Decimal;
///
/// let country = Country {
///     code: "TGO".to_string(),
///     name: "Togo".to_string(),
///     minimum_wage: Decimal::new(60, 0),
///     tax_brackets: vec![],
/// };
/// let employee = Employee {
///     name: "Kossi".to_string(),
///     basic_salary: Decimal::new(40, 0),
///     country_code: "TGO".to_string(),
///     piece_rate_items: vec![],
/// };
///
/// let result = calculate_payroll(&employee, &country, &SplitConfig::disabled(), &[]);
/// assert_eq!(result.resolution, SalaryResolution::BasicOnly);
/// assert_eq!(result.basic_salary, Decimal::new(60, 0));
/// assert!(result.minimum_wage_applied);
/// ```
pub fn calculate_payroll(
    employee: &Employee,
    country: &Country,
    split: &SplitConfig,
    tiers: &[PensionTier],
) -> PayrollResult {
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    let original_basic = employee.basic_salary;

    let piece_rate = aggregate_piece_rate(&employee.piece_rate_items, step_number);
    steps.push(piece_rate.audit_step);
    step_number += 1;

    let resolved = resolve_salary(
        original_basic,
        piece_rate.total,
        employee.has_piece_rate_items(),
        split,
        step_number,
    );
    steps.push(resolved.audit_step);
    step_number += 1;

    let floor = apply_minimum_wage(resolved.basic_salary, country.minimum_wage, step_number);
    steps.push(floor.audit_step);
    step_number += 1;

    let basic_salary = floor.basic_salary;
    let allowance = resolved.allowance;
    let gross_pay = basic_salary.saturating_add(allowance);

    let tax_result = calculate_tax(gross_pay, &country.tax_brackets, step_number);
    steps.push(tax_result.audit_step);
    step_number += 1;
    warnings.extend(duplicate_threshold_warning(&country.tax_brackets));

    let pension_result = calculate_pension(basic_salary, tiers, step_number);
    steps.push(pension_result.audit_step);
    step_number += 1;
    warnings.extend(tier_allocation_warning(tiers));

    let pension = pension_result.contribution;
    let net_pay = gross_pay - tax_result.tax - pension.employee_contribution;

    steps.push(AuditStep {
        step_number,
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        input: serde_json::json!({
            "basic_salary": basic_salary.normalize().to_string(),
            "allowance": allowance.normalize().to_string(),
            "tax": tax_result.tax.normalize().to_string(),
            "employee_contribution": pension.employee_contribution.normalize().to_string()
        }),
        output: serde_json::json!({
            "gross_pay": gross_pay.normalize().to_string(),
            "net_pay": net_pay.normalize().to_string()
        }),
        reasoning: format!(
            "(${} + ${}) - ${} tax - ${} pension = ${}",
            basic_salary.normalize(),
            allowance.normalize(),
            tax_result.tax.normalize(),
            pension.employee_contribution.normalize(),
            net_pay.normalize()
        ),
    });

    if net_pay < Decimal::ZERO {
        warnings.push(AuditWarning {
            code: "NEGATIVE_NET_PAY".to_string(),
            message: format!(
                "Deductions exceed gross pay for '{}': net pay is {}",
                employee.name,
                net_pay.normalize()
            ),
            severity: "medium".to_string(),
        });
    }

    debug!(
        employee = %employee.name,
        country = %country.code,
        resolution = resolved.resolution.as_str(),
        gross_pay = %gross_pay,
        net_pay = %net_pay,
        "Resolved payroll"
    );

    PayrollResult {
        employee_name: employee.name.clone(),
        country_code: country.code.clone(),
        resolution: resolved.resolution,
        original_basic_salary: original_basic,
        basic_salary,
        allowance,
        piece_rate_total: resolved.piece_rate_total,
        minimum_wage_applied: floor.applied,
        gross_pay,
        tax: tax_result.tax,
        tax_bracket: tax_result.applied_bracket,
        pension,
        net_pay,
        audit_trace: AuditTrace { steps, warnings },
    }
}
