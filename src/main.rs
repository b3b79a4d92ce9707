// ==========================================
// Sales Payroll - Command Line Entry
// ==========================================
// Usage:
//   sales-payroll <roster.json> <month> [percentage] [revenue.csv]
//
// month: 0 = January ... 11 = December
// percentage: commission multiplier, defaults to the configured value
// Prints the payroll run as JSON on stdout.
// ==========================================

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

use sales_payroll::{logging, ConfigManager, PayrollApi, RevenueCsvImporter, RosterImporter};

const USAGE: &str = "usage: sales-payroll <roster.json> <month> [percentage] [revenue.csv]";

/// Parsed command line
#[derive(Debug, PartialEq)]
struct CliArgs {
    roster_path: PathBuf,
    month: i32,
    percentage: Option<f64>,
    revenue_path: Option<PathBuf>,
}

/// Parse positional arguments (program name already skipped)
fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<CliArgs> {
    let mut args = args.into_iter();

    let (roster_path, month) = match (args.next(), args.next()) {
        (Some(roster), Some(month)) => (PathBuf::from(roster), month),
        _ => bail!(USAGE),
    };

    let month: i32 = month
        .trim()
        .parse()
        .with_context(|| format!("month must be an integer, got {month:?}"))?;

    let percentage = match args.next() {
        Some(raw) => Some(
            raw.trim()
                .parse::<f64>()
                .with_context(|| format!("percentage must be a number, got {raw:?}"))?,
        ),
        None => None,
    };

    let revenue_path = args.next().map(PathBuf::from);

    if args.next().is_some() {
        bail!(USAGE);
    }

    Ok(CliArgs {
        roster_path,
        month,
        percentage,
        revenue_path,
    })
}

fn main() -> Result<()> {
    let config = ConfigManager::from_env_or_default().context("failed to load configuration")?;
    logging::init(config.log_level());

    let args = parse_args(std::env::args().skip(1))?;

    tracing::info!("==================================================");
    tracing::info!("{} v{}", sales_payroll::APP_NAME, sales_payroll::VERSION);
    tracing::info!("==================================================");

    let mut roster = RosterImporter::from_file(&args.roster_path)
        .with_context(|| format!("failed to import roster {}", args.roster_path.display()))?;

    if let Some(revenue_path) = &args.revenue_path {
        RevenueCsvImporter::import_file(revenue_path, &mut roster.representatives)
            .with_context(|| format!("failed to import revenue {}", revenue_path.display()))?;
    }

    let api = PayrollApi::from_config(&config)?;
    let run = api.run_month(&roster.representatives, args.month, args.percentage)?;

    println!("{}", serde_json::to_string_pretty(&run)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_all_arguments() {
        let parsed = parse_args(args(&["roster.json", "3", "0.1", "revenue.csv"])).unwrap();

        assert_eq!(
            parsed,
            CliArgs {
                roster_path: PathBuf::from("roster.json"),
                month: 3,
                percentage: Some(0.1),
                revenue_path: Some(PathBuf::from("revenue.csv")),
            }
        );
    }

    #[test]
    fn test_parse_required_only() {
        let parsed = parse_args(args(&["roster.json", "0"])).unwrap();
        assert_eq!(parsed.percentage, None);
        assert_eq!(parsed.revenue_path, None);
    }

    #[test]
    fn test_missing_month_is_usage_error() {
        let err = parse_args(args(&["roster.json"])).unwrap_err();
        assert_eq!(err.to_string(), USAGE);
    }

    #[test]
    fn test_extra_arguments_rejected() {
        let extra = args(&["roster.json", "0", "0.1", "revenue.csv", "extra"]);
        let err = parse_args(extra).unwrap_err();
        assert_eq!(err.to_string(), USAGE);
    }

    #[test]
    fn test_bad_month() {
        assert!(parse_args(args(&["roster.json", "june"])).is_err());
    }
}
