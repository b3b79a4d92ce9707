// ==========================================
// Sales Payroll - Configuration Layer
// ==========================================
// Responsibility: payroll settings as key/value pairs with defaults,
// loaded from a JSON file or overridden in code
// ==========================================

pub mod config_manager;
pub mod error;

// Re-export config manager
pub use config_manager::{
    config_keys, default_config_path, ConfigManager, PayrollConfig, CONFIG_PATH_ENV,
};
pub use error::{ConfigError, ConfigResult};
