// ==========================================
// Sales Payroll - Core Library
// ==========================================
// Monthly compensation of sales representatives:
// fixed salary + zone meal allowance + revenue commission
// ==========================================

// ==========================================
// Modules
// ==========================================

// Domain layer - entities and validation
pub mod domain;

// Configuration layer
pub mod config;

// Import layer - roster / revenue files
pub mod importer;

// Logging
pub mod logging;

// API layer - payslips and payroll runs
pub mod api;

// ==========================================
// Re-exports
// ==========================================

pub use domain::{DomainError, DomainResult, GeographicZone, Representative, ZoneHandle};

pub use api::{AnnualStatement, ApiError, ApiResult, PayrollApi, PayrollRun, Payslip};

pub use config::{ConfigManager, PayrollConfig};

pub use importer::{RevenueCsvImporter, Roster, RosterImporter};

// ==========================================
// Constants
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "Sales Payroll";
