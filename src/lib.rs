//! Payroll Engine for multi-country piece-rate and salaried workforces
//!
//! This crate computes per-employee pay from a basic salary and piece-rate work:
//! salary resolution (no-basic, split and bonus modes), the minimum-wage floor,
//! peak-bracket income tax and tiered pension contributions, each step recorded
//! in an audit trace.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
