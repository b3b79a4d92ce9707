// ==========================================
// Sales Payroll - Logging
// ==========================================
// tracing + tracing-subscriber, level from RUST_LOG or config
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// Initialise the global subscriber
///
/// # Environment
/// - RUST_LOG: filter directive, takes precedence over `default_level`
///   e.g. RUST_LOG=debug or RUST_LOG=sales_payroll=trace
///
/// # Example
/// ```no_run
/// use sales_payroll::logging;
/// logging::init("info");
/// ```
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries the JSON report, logs go to stderr
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Subscriber for tests: debug level, captured by the test harness
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
