// ==========================================
// Sales Payroll - Domain Types
// ==========================================
// Month indexing and revenue storage shape
// ==========================================

use chrono::Month;

/// Number of revenue slots held by a representative (one per calendar month)
pub const MONTHS_PER_YEAR: usize = 12;

/// Revenue figures for one year, index 0 = January
pub type MonthlyRevenue = [f64; MONTHS_PER_YEAR];

// ==========================================
// Month index helpers
// ==========================================
// Month indices are signed so that a caller passing -1 gets an error,
// not a wrapped unsigned value.

/// Convert a month index into a slot position
///
/// # Returns
/// - `Some(slot)`: index in [0, 11]
/// - `None`: out of range
pub fn month_slot(month: i32) -> Option<usize> {
    usize::try_from(month)
        .ok()
        .filter(|slot| *slot < MONTHS_PER_YEAR)
}

/// Calendar month for a month index (0 = January)
pub fn calendar_month(month: i32) -> Option<Month> {
    let slot = month_slot(month)?;
    Month::try_from(slot as u8 + 1).ok()
}

/// English month name for a month index, used on payslips
pub fn month_name(month: i32) -> Option<&'static str> {
    calendar_month(month).map(|m| m.name())
}

/// A non-negative, non-NaN amount
pub(crate) fn is_non_negative(value: f64) -> bool {
    value >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_slot_bounds() {
        assert_eq!(month_slot(0), Some(0));
        assert_eq!(month_slot(11), Some(11));
        assert_eq!(month_slot(12), None);
        assert_eq!(month_slot(-1), None);
        assert_eq!(month_slot(i32::MIN), None);
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(0), Some("January"));
        assert_eq!(month_name(11), Some("December"));
        assert_eq!(month_name(12), None);
    }

    #[test]
    fn test_is_non_negative_rejects_nan() {
        assert!(is_non_negative(0.0));
        assert!(is_non_negative(12.5));
        assert!(!is_non_negative(-0.1));
        assert!(!is_non_negative(f64::NAN));
    }
}
