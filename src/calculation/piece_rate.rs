//! Piece-rate aggregation.
//!
//! Sums `rate * quantity` over an employee's piece-rate work items.

use rust_decimal::Decimal;

use crate::models::{AuditStep, PieceRateItem};

/// The result of aggregating piece-rate work, including the total and audit step.
#[derive(Debug, Clone)]
pub struct PieceRateResult {
    /// Sum of `rate * quantity` over all items.
    pub total: Decimal,
    /// The audit step recording this aggregation.
    pub audit_step: AuditStep,
}

/// Returns the total piece-rate earnings for a set of work items.
///
/// The sum is order-independent and an empty slice totals zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::piece_rate_total;
/// use payroll_engine::models::PieceRateItem;
/// use rust_decimal::Decimal;
///
/// let items = vec![
///     PieceRateItem { item: "a".to_string(), rate: Decimal::new(10, 0), quantity: Decimal::new(5, 0) },
///     PieceRateItem { item: "b".to_string(), rate: Decimal::new(20, 0), quantity: Decimal::new(3, 0) },
/// ];
/// assert_eq!(piece_rate_total(&items), Decimal::new(110, 0));
/// assert_eq!(piece_rate_total(&[]), Decimal::ZERO);
/// ```
pub fn piece_rate_total(items: &[PieceRateItem]) -> Decimal {
    items
        .iter()
        .fold(Decimal::ZERO, |total, item| total.saturating_add(item.earnings()))
}

/// Returns the total piece-rate earnings, or `None` if any product or the
/// sum overflows.
///
/// Intake validation uses this so an employee it accepts always has a
/// representable total. [`piece_rate_total`] saturates instead.
pub fn checked_piece_rate_total(items: &[PieceRateItem]) -> Option<Decimal> {
    items
        .iter()
        .try_fold(Decimal::ZERO, |total, item| total.checked_add(item.checked_earnings()?))
}

/// Aggregates piece-rate work and records the calculation in an audit step.
pub fn aggregate_piece_rate(items: &[PieceRateItem], step_number: u32) -> PieceRateResult {
    let total = piece_rate_total(items);

    let lines: Vec<serde_json::Value> = items
        .iter()
        .map(|item| {
            serde_json::json!({
                "item": item.item,
                "rate": item.rate.normalize().to_string(),
                "quantity": item.quantity.normalize().to_string(),
                "earnings": item.earnings().normalize().to_string()
            })
        })
        .collect();

    let reasoning = if items.is_empty() {
        "No piece-rate work recorded".to_string()
    } else {
        let terms: Vec<String> = items
            .iter()
            .map(|item| {
                format!(
                    "{} x ${}",
                    item.quantity.normalize(),
                    item.rate.normalize()
                )
            })
            .collect();
        format!("{} = ${}", terms.join(" + "), total.normalize())
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "piece_rate_aggregation".to_string(),
        rule_name: "Piece-Rate Aggregation".to_string(),
        input: serde_json::json!({
            "item_count": items.len(),
            "items": lines
        }),
        output: serde_json::json!({
            "total": total.normalize().to_string()
        }),
        reasoning,
    };

    PieceRateResult { total, audit_step }
}
