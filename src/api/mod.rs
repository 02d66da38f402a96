//! HTTP API module for the payroll engine.
//!
//! This module provides the REST API endpoint for running payroll over a
//! batch of employees.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EmployeeRequest, PayrollRequest, PieceRateItemRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
