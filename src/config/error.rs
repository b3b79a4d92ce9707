// ==========================================
// Sales Payroll - Configuration Error Types
// ==========================================
// Tool: thiserror derive
// ==========================================

use thiserror::Error;

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(String),

    #[error("config file read failed ({path}): {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse failed: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("config value for {key} is not a string or number")]
    UnsupportedValue { key: String },

    #[error("config value error (key: {key}, value: {value}): {message}")]
    ValueError {
        key: String,
        value: String,
        message: String,
    },
}

/// Result alias
pub type ConfigResult<T> = Result<T, ConfigError>;
