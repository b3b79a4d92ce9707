// ==========================================
// Sales Payroll - API Error Types
// ==========================================
// Responsibility: wrap domain and config failures for API callers
// ==========================================

use crate::config::ConfigError;
use crate::domain::DomainError;
use thiserror::Error;

/// API error type
#[derive(Error, Debug)]
pub enum ApiError {
    /// A domain precondition was violated (month, revenue, percentage, length)
    #[error(transparent)]
    InvalidArgument(#[from] DomainError),

    /// Payroll settings could not be turned into a usable config
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ApiError {
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            ApiError::InvalidArgument(err) => err.is_invalid_argument(),
            ApiError::Config(_) => false,
        }
    }
}

/// Result alias
pub type ApiResult<T> = Result<T, ApiError>;
