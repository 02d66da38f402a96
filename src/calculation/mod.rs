//! Calculation logic for the payroll engine.
//!
//! This module contains the payroll rules: piece-rate aggregation, salary
//! resolution (no-basic, split, bonus), the minimum-wage floor, peak-bracket
//! tax, pension contributions with tier allocation, the per-employee
//! calculation chaining them, and batch payroll runs.

mod minimum_wage;
mod payroll;
mod payroll_run;
mod pension;
mod piece_rate;
mod salary_resolution;
mod tax;

pub use minimum_wage::{MinimumWageResult, apply_minimum_wage};
pub use payroll::calculate_payroll;
pub use payroll_run::{resolve_country, run_payroll};
pub use pension::{
    EMPLOYEE_PENSION_RATE, EMPLOYER_PENSION_RATE, PensionResult, calculate_pension,
    compute_pension, tier_allocation_warning,
};
pub use piece_rate::{
    PieceRateResult, aggregate_piece_rate, checked_piece_rate_total, piece_rate_total,
};
pub use salary_resolution::{SalaryResolutionResult, resolve_salary};
pub use tax::{
    TaxResult, calculate_tax, compute_tax, duplicate_threshold_warning, find_peak_bracket,
};
