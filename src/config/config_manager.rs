// ==========================================
// Sales Payroll - Config Manager
// ==========================================
// Responsibility: load, query and override payroll settings
// Storage: in-memory key/value map, seeded from a flat JSON object
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::types::is_non_negative;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "SALES_PAYROLL_CONFIG";

// ==========================================
// Config keys
// ==========================================
pub mod config_keys {
    // Payroll
    pub const DEFAULT_COMMISSION_PERCENTAGE: &str = "payroll.default_commission_percentage";
    pub const CURRENCY_LABEL: &str = "payroll.currency_label"; // display only

    // Logging
    pub const LOG_LEVEL: &str = "log.level";
}

const DEFAULT_COMMISSION_PERCENTAGE: &str = "0.0";
const DEFAULT_CURRENCY_LABEL: &str = "EUR";
const DEFAULT_LOG_LEVEL: &str = "info";

// ==========================================
// PayrollConfig - typed view used by the API layer
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollConfig {
    /// Percentage applied when a request does not name one
    pub default_commission_percentage: f64,
    /// Label printed next to amounts
    pub currency_label: String,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            default_commission_percentage: 0.0,
            currency_label: DEFAULT_CURRENCY_LABEL.to_string(),
        }
    }
}

// ==========================================
// ConfigManager
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: HashMap<String, String>,
}

impl ConfigManager {
    /// Manager with built-in defaults only
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a flat JSON object (`{"key": "value" | number | bool}`)
    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        let parsed: HashMap<String, serde_json::Value> = serde_json::from_str(raw)?;

        let mut values = HashMap::with_capacity(parsed.len());
        for (key, value) in parsed {
            let text = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                _ => return Err(ConfigError::UnsupportedValue { key }),
            };
            values.insert(key, text);
        }

        Ok(Self { values })
    }

    /// Load a JSON config file
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let raw = fs::read_to_string(path).map_err(|source| ConfigError::FileReadError {
            path: path.display().to_string(),
            source,
        })?;

        let manager = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.display(), keys = manager.values.len(), "config loaded");
        Ok(manager)
    }

    /// Load from `SALES_PAYROLL_CONFIG` or the user config dir
    ///
    /// - env var set: that file must exist, a missing file is `FileNotFound`
    /// - env var unset: `<config_dir>/sales-payroll/config.json` if present,
    ///   built-in defaults otherwise
    ///
    /// A file that exists but fails to parse is always an error.
    pub fn from_env_or_default() -> ConfigResult<Self> {
        if let Some(path) = explicit_config_path() {
            return Self::from_file(&path);
        }

        match user_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::new())
            }
            None => Ok(Self::new()),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get_or_default<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Log filter directive (`log.level`)
    pub fn log_level(&self) -> &str {
        self.get_or_default(config_keys::LOG_LEVEL, DEFAULT_LOG_LEVEL)
    }

    /// Typed payroll settings
    ///
    /// # Errors
    /// - `ValueError`: the default percentage is unparsable or negative
    pub fn payroll_config(&self) -> ConfigResult<PayrollConfig> {
        let key = config_keys::DEFAULT_COMMISSION_PERCENTAGE;
        let raw = self.get_or_default(key, DEFAULT_COMMISSION_PERCENTAGE);

        let percentage: f64 = raw.trim().parse().map_err(|_| ConfigError::ValueError {
            key: key.to_string(),
            value: raw.to_string(),
            message: "expected a number".to_string(),
        })?;

        if !is_non_negative(percentage) {
            return Err(ConfigError::ValueError {
                key: key.to_string(),
                value: raw.to_string(),
                message: "commission percentage must be >= 0".to_string(),
            });
        }

        Ok(PayrollConfig {
            default_commission_percentage: percentage,
            currency_label: self
                .get_or_default(config_keys::CURRENCY_LABEL, DEFAULT_CURRENCY_LABEL)
                .to_string(),
        })
    }
}

/// Config file location
///
/// `SALES_PAYROLL_CONFIG` wins when set and non-blank; otherwise
/// `<config_dir>/sales-payroll/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    explicit_config_path().or_else(user_config_path)
}

/// Path named by `SALES_PAYROLL_CONFIG`, if set and non-blank
fn explicit_config_path() -> Option<PathBuf> {
    let path = std::env::var(CONFIG_PATH_ENV).ok()?;
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(PathBuf::from(trimmed))
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sales-payroll").join("config.json"))
}
