// ==========================================
// Sales Payroll - Domain Error Types
// ==========================================
// Tool: thiserror derive
// Every variant is an invalid-argument condition: raised before any
// state change, the rejected operation leaves the entity untouched.
// ==========================================

use thiserror::Error;

/// Domain error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("invalid argument: month {month} is outside [0, 11]")]
    MonthOutOfRange { month: i32 },

    #[error("invalid argument: revenue for month {month} must be >= 0 (got {amount})")]
    NegativeRevenue { month: i32, amount: f64 },

    #[error("invalid argument: commission percentage must be >= 0 (got {0})")]
    NegativePercentage(f64),

    #[error("invalid argument: monthly revenue needs exactly {expected} values (got {actual})")]
    RevenueLengthMismatch { expected: usize, actual: usize },
}

impl DomainError {
    /// All domain failures are precondition violations on caller input
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            DomainError::MonthOutOfRange { .. }
                | DomainError::NegativeRevenue { .. }
                | DomainError::NegativePercentage(_)
                | DomainError::RevenueLengthMismatch { .. }
        )
    }
}

/// Result alias
pub type DomainResult<T> = Result<T, DomainError>;
