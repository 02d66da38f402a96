//! Batch payroll runs.
//!
//! Validates a batch of employees, resolves each one's country and
//! calculates their pay in input order.

use std::time::Instant;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::PayrollConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Country, Employee, PayrollResult, PayrollRun, RunTotals};

use super::payroll::calculate_payroll;

/// Validates an employee and looks up their country.
///
/// Returns `InvalidEmployee` for a malformed record and `CountryNotFound`
/// for an unknown country code.
pub fn resolve_country<'a>(
    employee: &Employee,
    config: &'a PayrollConfig,
) -> EngineResult<&'a Country> {
    employee.validate()?;

    config
        .country(&employee.country_code)
        .ok_or_else(|| EngineError::CountryNotFound {
            code: Country::normalize_code(&employee.country_code),
        })
}

/// Runs payroll for a batch of employees.
///
/// Every employee is validated before any is calculated, so a single bad
/// record rejects the whole batch. Results keep the input order. A batch
/// whose totals leave the decimal range fails with `TotalOutOfRange`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::run_payroll;
/// use payroll_engine::config::{PayrollConfig, SplitConfig};
/// use payroll_engine::models::{Country, Employee};
/// use rust_decimal::Decimal;
///
/// let config = PayrollConfig::new(
///     vec![Country {
///         code: "GHA".to_string(),
///         name: "Ghana".to_string(),
///         minimum_wage: Decimal::new(60, 0),
///         tax_brackets: vec![],
///     }],
///     vec![],
///     SplitConfig::disabled(),
/// );
/// let employees = vec![Employee {
///     name: "Ama".to_string(),
///     basic_salary: Decimal::new(1000, 0),
///     country_code: "gha".to_string(),
///     piece_rate_items: vec![],
/// }];
///
/// let run = run_payroll(&employees, &config)?;
/// assert_eq!(run.results.len(), 1);
/// assert_eq!(run.totals.gross_pay, Decimal::new(1000, 0));
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn run_payroll(employees: &[Employee], config: &PayrollConfig) -> EngineResult<PayrollRun> {
    let start_time = Instant::now();
    let run_id = Uuid::new_v4();

    let mut resolved: Vec<(&Employee, &Country)> = Vec::with_capacity(employees.len());
    for employee in employees {
        match resolve_country(employee, config) {
            Ok(country) => resolved.push((employee, country)),
            Err(err) => {
                warn!(
                    run_id = %run_id,
                    employee = %employee.name,
                    error = %err,
                    "Rejected payroll input"
                );
                return Err(err);
            }
        }
    }

    let split = config.split();
    let mut totals = RunTotals::default();
    let mut results: Vec<PayrollResult> = Vec::with_capacity(resolved.len());
    for (employee, country) in resolved {
        let result = calculate_payroll(employee, country, &split, config.tiers());
        if let Err(err) = totals.add(&result) {
            warn!(
                run_id = %run_id,
                employee = %employee.name,
                error = %err,
                "Payroll run totals out of range"
            );
            return Err(err);
        }
        results.push(result);
    }

    let duration_us = start_time.elapsed().as_micros() as u64;

    info!(
        run_id = %run_id,
        employees = totals.employee_count,
        gross_pay = %totals.gross_pay,
        net_pay = %totals.net_pay,
        duration_us,
        "Payroll run completed"
    );

    Ok(PayrollRun {
        run_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        results,
        totals,
        duration_us,
    })
}
