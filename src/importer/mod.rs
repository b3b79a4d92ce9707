// ==========================================
// Sales Payroll - Import Layer
// ==========================================
// Responsibility: turn external files into domain objects
// Supported: roster JSON, revenue CSV
// ==========================================

pub mod error;
pub mod revenue_csv;
pub mod roster_importer;

// Re-export core types
pub use error::{ImportError, ImportResult};
pub use revenue_csv::RevenueCsvImporter;
pub use roster_importer::{Roster, RosterDocument, RosterImporter};
