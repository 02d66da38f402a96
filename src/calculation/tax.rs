//! Peak-bracket tax calculation.
//!
//! The highest threshold a salary meets or exceeds selects a single flat
//! rate, and that rate applies to the entire salary. This is deliberately
//! not marginal taxation: a salary one unit above a threshold pays the
//! higher rate on every unit.
//!
//! ## Example
//!
//! With brackets `500 → 5%` and `1000 → 10%`:
//! - 400 pays 0 (below every threshold)
//! - 500 pays 25 (5% of 500)
//! - 1200 pays 120 (10% of 1200)

use rust_decimal::Decimal;

use crate::models::{AuditStep, AuditWarning, TaxBracket};

/// The result of a tax calculation, including the tax and audit step.
#[derive(Debug, Clone)]
pub struct TaxResult {
    /// The tax owed.
    pub tax: Decimal,
    /// The bracket whose rate was applied, if the salary met any threshold.
    pub applied_bracket: Option<TaxBracket>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the brackets sorted ascending by threshold.
///
/// The sort is stable, so brackets sharing a threshold keep their relative order.
fn sorted_brackets(brackets: &[TaxBracket]) -> Vec<TaxBracket> {
    let mut sorted = brackets.to_vec();
    sorted.sort_by(|a, b| a.threshold.cmp(&b.threshold));
    sorted
}

/// Finds the bracket with the highest threshold the salary meets or exceeds.
///
/// Among brackets with equal thresholds the one listed last wins.
pub fn find_peak_bracket(salary: Decimal, brackets: &[TaxBracket]) -> Option<TaxBracket> {
    sorted_brackets(brackets)
        .into_iter()
        .rev()
        .find(|b| salary >= b.threshold)
}

/// Computes peak-bracket tax on a salary.
///
/// Returns zero when the brackets are empty or the salary is below every
/// threshold. The caller's slice is never reordered.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_tax;
/// use payroll_engine::models::TaxBracket;
/// use rust_decimal::Decimal;
///
/// let brackets = vec![
///     TaxBracket { threshold: Decimal::new(1000, 0), rate: Decimal::new(10, 0) },
///     TaxBracket { threshold: Decimal::new(500, 0), rate: Decimal::new(5, 0) },
/// ];
/// assert_eq!(compute_tax(Decimal::new(1200, 0), &brackets), Decimal::new(120, 0));
/// assert_eq!(compute_tax(Decimal::new(400, 0), &brackets), Decimal::ZERO);
/// ```
pub fn compute_tax(salary: Decimal, brackets: &[TaxBracket]) -> Decimal {
    match find_peak_bracket(salary, brackets) {
        Some(bracket) => salary.saturating_mul(bracket.rate) / Decimal::ONE_HUNDRED,
        None => Decimal::ZERO,
    }
}

/// Returns a warning if two or more brackets share a threshold.
pub fn duplicate_threshold_warning(brackets: &[TaxBracket]) -> Option<AuditWarning> {
    let sorted = sorted_brackets(brackets);
    let duplicate = sorted
        .windows(2)
        .find(|pair| pair[0].threshold == pair[1].threshold)?;

    Some(AuditWarning {
        code: "DUPLICATE_TAX_THRESHOLD".to_string(),
        message: format!(
            "Multiple tax brackets share threshold {}; the last one listed is used",
            duplicate[0].threshold.normalize()
        ),
        severity: "low".to_string(),
    })
}

/// Calculates peak-bracket tax and records the decision in an audit step.
pub fn calculate_tax(salary: Decimal, brackets: &[TaxBracket], step_number: u32) -> TaxResult {
    let applied_bracket = find_peak_bracket(salary, brackets);
    let tax = compute_tax(salary, brackets);

    let bracket_json: Vec<serde_json::Value> = sorted_brackets(brackets)
        .iter()
        .map(|b| {
            serde_json::json!({
                "threshold": b.threshold.normalize().to_string(),
                "rate": b.rate.normalize().to_string()
            })
        })
        .collect();

    let (output, reasoning) = match applied_bracket {
        Some(bracket) => (
            serde_json::json!({
                "tax": tax.normalize().to_string(),
                "bracket_applied": true,
                "threshold": bracket.threshold.normalize().to_string(),
                "rate": bracket.rate.normalize().to_string()
            }),
            format!(
                "${} meets threshold ${}: ${} x {}% = ${}",
                salary.normalize(),
                bracket.threshold.normalize(),
                salary.normalize(),
                bracket.rate.normalize(),
                tax.normalize()
            ),
        ),
        None if brackets.is_empty() => (
            serde_json::json!({
                "tax": "0",
                "bracket_applied": false
            }),
            "No tax brackets configured - no tax applied".to_string(),
        ),
        None => (
            serde_json::json!({
                "tax": "0",
                "bracket_applied": false
            }),
            format!(
                "${} is below every tax threshold - no tax applied",
                salary.normalize()
            ),
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "peak_bracket_tax".to_string(),
        rule_name: "Peak Bracket Tax".to_string(),
        input: serde_json::json!({
            "salary": salary.normalize().to_string(),
            "brackets": bracket_json
        }),
        output,
        reasoning,
    };

    TaxResult {
        tax,
        applied_bracket,
        audit_step,
    }
}
