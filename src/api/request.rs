//! Request types for the payroll API.
//!
//! This module defines the JSON request structures for the `/payroll` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::SplitSettings;
use crate::models::{Employee, PieceRateItem};

/// Request body for the `/payroll` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The employees to pay.
    pub employees: Vec<EmployeeRequest>,
    /// Optional override of the configured split settings for this run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split: Option<SplitSettings>,
}

/// Employee information in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// The employee's name.
    pub name: String,
    /// Fixed salary; omitted or zero for piece-rate only.
    #[serde(default)]
    pub basic_salary: Decimal,
    /// The employee's country code.
    pub country_code: String,
    /// Piece-rate work items.
    #[serde(default)]
    pub piece_rate_items: Vec<PieceRateItemRequest>,
}

/// Piece-rate work in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PieceRateItemRequest {
    /// Label for the work item.
    pub item: String,
    /// The amount paid per unit.
    pub rate: Decimal,
    /// The number of units produced.
    pub quantity: Decimal,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            name: req.name,
            basic_salary: req.basic_salary,
            country_code: req.country_code,
            piece_rate_items: req.piece_rate_items.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<PieceRateItemRequest> for PieceRateItem {
    fn from(req: PieceRateItemRequest) -> Self {
        PieceRateItem {
            item: req.item,
            rate: req.rate,
            quantity: req.quantity,
        }
    }
}
