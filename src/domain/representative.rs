// ==========================================
// Sales Payroll - Representative
// ==========================================
// Monthly pay = fixed salary + zone meal allowance + revenue * percentage
// ==========================================
// Guarded state: 12 revenue slots, all >= 0. Every check runs before
// the write, so a rejected call never leaves a partial update.
// ==========================================

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::types::{is_non_negative, month_slot, MonthlyRevenue, MONTHS_PER_YEAR};
use crate::domain::zone::ZoneHandle;
use std::fmt;

// ==========================================
// Representative
// ==========================================
#[derive(Debug, Clone)]
pub struct Representative {
    // ===== identity =====
    number: i32,
    last_name: String,
    first_name: String,
    address: String,

    // ===== compensation =====
    fixed_salary: f64,
    zone: ZoneHandle, // shared with other representatives of the zone
    monthly_revenue: MonthlyRevenue,
}

impl Representative {
    /// Create a representative assigned to `zone`
    ///
    /// Revenue starts at zero for every month, fixed salary at zero and the
    /// address empty.
    pub fn new(
        number: i32,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        zone: ZoneHandle,
    ) -> Self {
        Self {
            number,
            last_name: last_name.into(),
            first_name: first_name.into(),
            address: String::new(),
            fixed_salary: 0.0,
            zone,
            monthly_revenue: [0.0; MONTHS_PER_YEAR],
        }
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    pub fn fixed_salary(&self) -> f64 {
        self.fixed_salary
    }

    /// Overwrite the fixed salary (not validated)
    pub fn set_fixed_salary(&mut self, amount: f64) {
        self.fixed_salary = amount;
    }

    pub fn zone(&self) -> &ZoneHandle {
        &self.zone
    }

    /// Move the representative to another zone
    pub fn set_zone(&mut self, zone: ZoneHandle) {
        self.zone = zone;
    }

    // ==========================================
    // Revenue
    // ==========================================

    /// Record the revenue achieved in `month`
    ///
    /// # Errors
    /// - `MonthOutOfRange`: month outside [0, 11]
    /// - `NegativeRevenue`: amount < 0
    pub fn register_revenue(&mut self, month: i32, amount: f64) -> DomainResult<()> {
        let slot = Self::validate_revenue(month, amount)?;
        self.monthly_revenue[slot] = amount;
        Ok(())
    }

    /// Checks `register_revenue` applies, without touching any entity
    ///
    /// # Returns
    /// The revenue slot for `month`
    pub fn validate_revenue(month: i32, amount: f64) -> DomainResult<usize> {
        let slot = checked_slot(month)?;
        if !is_non_negative(amount) {
            return Err(DomainError::NegativeRevenue { month, amount });
        }
        Ok(slot)
    }

    /// Revenue recorded for `month`
    pub fn revenue(&self, month: i32) -> DomainResult<f64> {
        Ok(self.monthly_revenue[checked_slot(month)?])
    }

    /// All 12 revenue slots, January first
    pub fn monthly_revenue(&self) -> &MonthlyRevenue {
        &self.monthly_revenue
    }

    /// Replace the whole revenue sequence
    ///
    /// Any length other than 12 is rejected, shorter sequences included;
    /// nothing is padded. A negative value anywhere rejects the whole call.
    pub fn set_monthly_revenue(&mut self, values: &[f64]) -> DomainResult<()> {
        let revenue: MonthlyRevenue =
            values.try_into().map_err(|_| DomainError::RevenueLengthMismatch {
                expected: MONTHS_PER_YEAR,
                actual: values.len(),
            })?;

        if let Some((slot, amount)) = revenue
            .iter()
            .enumerate()
            .find(|(_, amount)| !is_non_negative(**amount))
        {
            return Err(DomainError::NegativeRevenue {
                month: slot as i32,
                amount: *amount,
            });
        }

        self.monthly_revenue = revenue;
        Ok(())
    }

    /// Total revenue over the year
    pub fn annual_revenue(&self) -> f64 {
        self.monthly_revenue.iter().sum()
    }

    // ==========================================
    // Salary
    // ==========================================

    /// Salary owed for `month` at the given commission `percentage`
    ///
    /// `fixed_salary + zone meal allowance + revenue[month] * percentage`
    ///
    /// # Errors
    /// - `MonthOutOfRange`: month outside [0, 11]
    /// - `NegativePercentage`: percentage < 0
    pub fn compute_monthly_salary(&self, month: i32, percentage: f64) -> DomainResult<f64> {
        let slot = checked_slot(month)?;
        check_percentage(percentage)?;

        Ok(self.fixed_salary
            + self.zone.meal_allowance()
            + self.monthly_revenue[slot] * percentage)
    }

    /// Sum of the 12 monthly salaries at one commission percentage
    pub fn compute_annual_salary(&self, percentage: f64) -> DomainResult<f64> {
        check_percentage(percentage)?;

        let allowance = self.zone.meal_allowance();
        Ok(self
            .monthly_revenue
            .iter()
            .map(|revenue| self.fixed_salary + allowance + revenue * percentage)
            .sum())
    }
}

impl fmt::Display for Representative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Representant{{numero={}, nom={}, prenom={}}}",
            self.number, self.last_name, self.first_name
        )
    }
}

fn checked_slot(month: i32) -> DomainResult<usize> {
    month_slot(month).ok_or(DomainError::MonthOutOfRange { month })
}

fn check_percentage(percentage: f64) -> DomainResult<()> {
    if is_non_negative(percentage) {
        Ok(())
    } else {
        Err(DomainError::NegativePercentage(percentage))
    }
}
