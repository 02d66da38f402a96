//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod country;
mod employee;
mod payroll_result;

pub use country::{Country, TaxBracket};
pub use employee::{Employee, MAX_AMOUNT, PieceRateItem};
pub use payroll_result::{
    AuditStep, AuditTrace, AuditWarning, BASIC_SALARY_LABEL, EMPLOYEE_CONTRIBUTION_LABEL,
    EMPLOYER_CONTRIBUTION_LABEL, PayrollResult, PayrollRun, PensionContribution, RunTotals,
    SalaryResolution, TOTAL_MANDATORY_LABEL, TierAllocation,
};
