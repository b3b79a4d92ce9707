// ==========================================
// Sales Payroll - Domain Layer
// ==========================================
// Responsibility: entities, value types and their validation rules
// No I/O, no logging sinks, no configuration lookups
// ==========================================

pub mod error;
pub mod representative;
pub mod types;
pub mod zone;

// Re-export core types
pub use error::{DomainError, DomainResult};
pub use representative::Representative;
pub use types::{month_name, MonthlyRevenue, MONTHS_PER_YEAR};
pub use zone::{GeographicZone, ZoneHandle};
