// ==========================================
// Sales Payroll - API Layer
// ==========================================
// Responsibility: business-facing operations for payroll callers
// ==========================================

pub mod error;
pub mod payroll_api;

// Re-export core types
pub use error::{ApiError, ApiResult};
pub use payroll_api::{AnnualStatement, PayrollApi, PayrollRun, Payslip};
