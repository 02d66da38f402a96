//! Payroll result models for the payroll engine.
//!
//! This module contains the [`PayrollResult`] snapshot produced for each
//! employee, the pension breakdown it carries, the audit trace recording
//! every rule decision, and the [`PayrollRun`] envelope for a batch.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TaxBracket;
use crate::error::{EngineError, EngineResult};

/// Report label for the basic salary in the contribution breakdown.
pub const BASIC_SALARY_LABEL: &str = "Basic Salary";
/// Report label for the employee pension contribution.
pub const EMPLOYEE_CONTRIBUTION_LABEL: &str = "Employee Contribution";
/// Report label for the employer pension contribution.
pub const EMPLOYER_CONTRIBUTION_LABEL: &str = "Employer Contribution";
/// Report label for the combined mandatory pension contribution.
pub const TOTAL_MANDATORY_LABEL: &str = "Total Mandatory";

/// Which salary resolution branch produced the basic salary and allowance.
///
/// # Example
///
/// ```
/// use payroll_engine::models::SalaryResolution;
///
/// let json = serde_json::to_string(&SalaryResolution::NoBasic).unwrap();
/// assert_eq!(json, "\"no_basic\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryResolution {
    /// No fixed salary: the piece-rate total became the basic salary.
    NoBasic,
    /// Piece-rate met or exceeded the basic salary and was split into basic and allowance.
    Split,
    /// Piece-rate was paid as an allowance on top of the basic salary.
    Bonus,
    /// Basic salary only, no piece-rate work.
    BasicOnly,
}

impl SalaryResolution {
    /// Returns the snake_case identifier used in audit steps.
    pub fn as_str(&self) -> &'static str {
        match self {
            SalaryResolution::NoBasic => "no_basic",
            SalaryResolution::Split => "split",
            SalaryResolution::Bonus => "bonus",
            SalaryResolution::BasicOnly => "basic_only",
        }
    }
}

/// The share of the mandatory pension contribution allocated to one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierAllocation {
    /// The tier name.
    pub name: String,
    /// The tier's fraction of the total mandatory contribution.
    pub percentage: Decimal,
    /// The amount allocated to this tier.
    pub amount: Decimal,
}

/// Employee and employer pension contributions with the tier allocation view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PensionContribution {
    /// Contribution deducted from the employee's pay.
    pub employee_contribution: Decimal,
    /// Contribution paid by the employer.
    pub employer_contribution: Decimal,
    /// Employee plus employer contribution.
    pub total_mandatory: Decimal,
    /// Allocation of the total across the configured tiers, in tier order.
    pub tier_allocations: Vec<TierAllocation>,
}

impl PensionContribution {
    /// Returns the contribution breakdown keyed by the fixed report labels.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::PensionContribution;
    /// use rust_decimal::Decimal;
    ///
    /// let pension = PensionContribution {
    ///     employee_contribution: Decimal::new(55, 0),
    ///     employer_contribution: Decimal::new(130, 0),
    ///     total_mandatory: Decimal::new(185, 0),
    ///     tier_allocations: vec![],
    /// };
    /// let breakdown = pension.contribution_breakdown(Decimal::new(1000, 0));
    /// assert_eq!(breakdown["Total Mandatory"], Decimal::new(185, 0));
    /// ```
    pub fn contribution_breakdown(&self, basic_salary: Decimal) -> BTreeMap<String, Decimal> {
        BTreeMap::from([
            (BASIC_SALARY_LABEL.to_string(), basic_salary),
            (
                EMPLOYEE_CONTRIBUTION_LABEL.to_string(),
                self.employee_contribution,
            ),
            (
                EMPLOYER_CONTRIBUTION_LABEL.to_string(),
                self.employer_contribution,
            ),
            (TOTAL_MANDATORY_LABEL.to_string(), self.total_mandatory),
        ])
    }

    /// Returns the tier allocation keyed by tier name.
    ///
    /// A later tier with the same name replaces an earlier one.
    pub fn tier_breakdown(&self) -> BTreeMap<String, Decimal> {
        self.tier_allocations
            .iter()
            .map(|t| (t.name.clone(), t.amount))
            .collect()
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag assumptions the engine relies on but does not enforce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for one employee's calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// The payroll outcome for a single employee.
///
/// A snapshot handed to reporting: it is created fresh for each employee and
/// carries no link back to the input record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// The employee's name.
    pub employee_name: String,
    /// The country whose rules were applied.
    pub country_code: String,
    /// The branch that resolved basic salary and allowance.
    pub resolution: SalaryResolution,
    /// The basic salary as supplied.
    pub original_basic_salary: Decimal,
    /// The basic salary after resolution and the minimum-wage floor.
    pub basic_salary: Decimal,
    /// The derived allowance (bonus or split share).
    pub allowance: Decimal,
    /// Piece-rate total still reported separately (zero once consumed into basic pay).
    pub piece_rate_total: Decimal,
    /// Whether the minimum-wage floor raised the basic salary.
    pub minimum_wage_applied: bool,
    /// Basic salary plus allowance.
    pub gross_pay: Decimal,
    /// Tax owed on the gross pay.
    pub tax: Decimal,
    /// The bracket whose rate was applied, if any.
    pub tax_bracket: Option<TaxBracket>,
    /// Pension contributions on the final basic salary.
    pub pension: PensionContribution,
    /// Gross pay less tax and the employee pension contribution.
    pub net_pay: Decimal,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl PayrollResult {
    /// Returns the contribution breakdown for reporting, keyed by the fixed labels.
    pub fn pension_breakdown(&self) -> BTreeMap<String, Decimal> {
        self.pension.contribution_breakdown(self.basic_salary)
    }
}

/// Aggregated totals for a payroll run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunTotals {
    /// Number of employees resolved.
    pub employee_count: usize,
    /// Sum of gross pay.
    pub gross_pay: Decimal,
    /// Sum of tax.
    pub tax: Decimal,
    /// Sum of employee pension contributions.
    pub pension_employee: Decimal,
    /// Sum of employer pension contributions.
    pub pension_employer: Decimal,
    /// Sum of net pay.
    pub net_pay: Decimal,
}

impl RunTotals {
    /// Adds one employee's result to the totals.
    ///
    /// Returns `TotalOutOfRange` if any sum overflows; the totals are left
    /// unchanged in that case.
    pub fn add(&mut self, result: &PayrollResult) -> EngineResult<()> {
        let next = RunTotals {
            employee_count: self.employee_count + 1,
            gross_pay: checked_sum("gross_pay", self.gross_pay, result.gross_pay)?,
            tax: checked_sum("tax", self.tax, result.tax)?,
            pension_employee: checked_sum(
                "pension_employee",
                self.pension_employee,
                result.pension.employee_contribution,
            )?,
            pension_employer: checked_sum(
                "pension_employer",
                self.pension_employer,
                result.pension.employer_contribution,
            )?,
            net_pay: checked_sum("net_pay", self.net_pay, result.net_pay)?,
        };
        *self = next;
        Ok(())
    }
}

fn checked_sum(field: &str, total: Decimal, amount: Decimal) -> EngineResult<Decimal> {
    total
        .checked_add(amount)
        .ok_or_else(|| EngineError::TotalOutOfRange {
            field: field.to_string(),
        })
}

/// The outcome of resolving a batch of employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRun {
    /// Unique identifier for this run.
    pub run_id: Uuid,
    /// When the run was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the run.
    pub engine_version: String,
    /// Per-employee results, in input order.
    pub results: Vec<PayrollResult>,
    /// Aggregated totals across all results.
    pub totals: RunTotals,
    /// The total run duration in microseconds.
    pub duration_us: u64,
}
