// ==========================================
// Sales Payroll - Payroll API
// ==========================================
// Responsibility: payslips, annual statements and monthly payroll runs
// built on top of Representative::compute_monthly_salary
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::error::{ApiError, ApiResult};
use crate::config::{ConfigManager, PayrollConfig};
use crate::domain::{month_name, DomainError, Representative, MONTHS_PER_YEAR};

// ==========================================
// DTOs
// ==========================================

/// Breakdown of one month's pay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    pub number: i32,
    pub full_name: String,
    pub zone_name: String,
    pub month: i32,
    pub month_name: String,
    pub fixed_salary: f64,
    pub meal_allowance: f64,
    pub revenue: f64,
    pub percentage: f64,
    pub commission: f64,
    pub total: f64,
    pub currency: String,
}

/// A full year of payslips for one representative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualStatement {
    pub number: i32,
    pub full_name: String,
    pub percentage: f64,
    pub payslips: Vec<Payslip>,
    pub annual_revenue: f64,
    pub annual_commission: f64,
    pub annual_salary: f64,
    pub currency: String,
}

/// Payslips for a set of representatives for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRun {
    pub run_id: String,
    pub generated_at: DateTime<Utc>,
    pub month: i32,
    pub month_name: String,
    pub payslips: Vec<Payslip>,
    pub grand_total: f64,
    pub currency: String,
}

// ==========================================
// PayrollApi
// ==========================================

/// Payroll API
///
/// 1. Resolves the commission percentage (request value or configured default)
/// 2. Delegates all validation and arithmetic to the domain entity
/// 3. Shapes the result into serializable reports
pub struct PayrollApi {
    config: PayrollConfig,
}

impl PayrollApi {
    pub fn new(config: PayrollConfig) -> Self {
        Self { config }
    }

    /// Build from loaded settings
    ///
    /// # Errors
    /// - `ApiError::Config`: the default percentage is unparsable or negative
    pub fn from_config(manager: &ConfigManager) -> ApiResult<Self> {
        let config = manager.payroll_config()?;
        tracing::debug!(
            default_commission_percentage = config.default_commission_percentage,
            "payroll api configured"
        );
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Payslip for one representative and month
    ///
    /// # Parameters
    /// - month: 0 = January ... 11 = December
    /// - percentage: commission multiplier; `None` uses the configured default
    ///
    /// # Errors
    /// - `ApiError::InvalidArgument`: month out of range or negative percentage
    pub fn payslip(
        &self,
        rep: &Representative,
        month: i32,
        percentage: Option<f64>,
    ) -> ApiResult<Payslip> {
        let percentage = self.resolve_percentage(percentage);

        let total = rep
            .compute_monthly_salary(month, percentage)
            .inspect_err(|e| {
                tracing::warn!(number = rep.number(), month, percentage, "payslip rejected: {}", e)
            })?;
        let revenue = rep.revenue(month)?;

        let payslip = Payslip {
            number: rep.number(),
            full_name: full_name(rep),
            zone_name: rep.zone().name(),
            month,
            month_name: month_label(month)?,
            fixed_salary: rep.fixed_salary(),
            meal_allowance: rep.zone().meal_allowance(),
            revenue,
            percentage,
            commission: revenue * percentage,
            total,
            currency: self.config.currency_label.clone(),
        };

        tracing::debug!(number = payslip.number, month, total, "payslip computed");
        Ok(payslip)
    }

    /// Twelve payslips plus yearly totals
    pub fn annual_statement(
        &self,
        rep: &Representative,
        percentage: Option<f64>,
    ) -> ApiResult<AnnualStatement> {
        let percentage = self.resolve_percentage(percentage);

        let payslips = (0..MONTHS_PER_YEAR as i32)
            .map(|month| self.payslip(rep, month, Some(percentage)))
            .collect::<ApiResult<Vec<_>>>()?;

        let annual_salary = rep.compute_annual_salary(percentage)?;
        let annual_commission = payslips.iter().map(|p| p.commission).sum();

        tracing::info!(number = rep.number(), annual_salary, "annual statement computed");

        Ok(AnnualStatement {
            number: rep.number(),
            full_name: full_name(rep),
            percentage,
            payslips,
            annual_revenue: rep.annual_revenue(),
            annual_commission,
            annual_salary,
            currency: self.config.currency_label.clone(),
        })
    }

    /// Payslips for every representative for `month`
    ///
    /// All-or-nothing: the first invalid input fails the whole run.
    pub fn run_month(
        &self,
        reps: &[Representative],
        month: i32,
        percentage: Option<f64>,
    ) -> ApiResult<PayrollRun> {
        let month_name = month_label(month)?;

        let payslips = reps
            .iter()
            .map(|rep| self.payslip(rep, month, percentage))
            .collect::<ApiResult<Vec<_>>>()?;
        let grand_total = payslips.iter().map(|p| p.total).sum();

        let run = PayrollRun {
            run_id: Uuid::new_v4().to_string(),
            generated_at: Utc::now(),
            month,
            month_name,
            payslips,
            grand_total,
            currency: self.config.currency_label.clone(),
        };

        tracing::info!(
            run_id = %run.run_id,
            month,
            representatives = run.payslips.len(),
            grand_total,
            "payroll run completed"
        );
        Ok(run)
    }

    fn resolve_percentage(&self, percentage: Option<f64>) -> f64 {
        percentage.unwrap_or(self.config.default_commission_percentage)
    }
}

fn full_name(rep: &Representative) -> String {
    format!("{} {}", rep.first_name(), rep.last_name())
}

fn month_label(month: i32) -> ApiResult<String> {
    month_name(month)
        .map(str::to_string)
        .ok_or(ApiError::InvalidArgument(DomainError::MonthOutOfRange { month }))
}
