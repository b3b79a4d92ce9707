// ==========================================
// Representative integration tests
// ==========================================
// Target: revenue registration, salary computation, display
// ==========================================


use sales_payroll::domain::MONTHS_PER_YEAR;
use sales_payroll::{DomainError, GeographicZone, Representative, ZoneHandle};
use test_helpers::{bastide, bastide_in, occitanie, ALLOWANCE_OCCITANIE, FIXED_BASTIDE};

const TOLERANCE: f64 = 0.001;

// ==========================================
// Salary computation
// ==========================================

#[test]
fn test_monthly_salary() {
    let mut r = bastide();
    let revenue = 50_000.0;
    let percentage = 0.1; // 10% commission

    r.register_revenue(0, revenue).unwrap();
    let salary = r.compute_monthly_salary(0, percentage).unwrap();

    assert!(
        (salary - (FIXED_BASTIDE + ALLOWANCE_OCCITANIE + revenue * percentage)).abs() < TOLERANCE,
        "monthly salary is wrong: {}",
        salary
    );
    assert!((salary - 6200.0).abs() < TOLERANCE);
}

#[test]
fn test_salary_formula_every_month() {
    let mut r = bastide();
    for month in 0..MONTHS_PER_YEAR as i32 {
        r.register_revenue(month, 1000.0 * (month + 1) as f64).unwrap();
    }

    for month in 0..MONTHS_PER_YEAR as i32 {
        for percentage in [0.0, 0.05, 0.1, 1.5] {
            let expected = r.fixed_salary()
                + r.zone().meal_allowance()
                + r.monthly_revenue()[month as usize] * percentage;
            let salary = r.compute_monthly_salary(month, percentage).unwrap();
            assert!((salary - expected).abs() < TOLERANCE);
        }
    }
}

#[test]
fn test_default_revenue_is_zero() {
    let r = bastide();

    // no revenue registered: commission is zero whatever the percentage
    for percentage in [0.0, 0.1, 3.0] {
        let salary = r.compute_monthly_salary(0, percentage).unwrap();
        assert!(
            (salary - (FIXED_BASTIDE + ALLOWANCE_OCCITANIE)).abs() < TOLERANCE,
            "revenue is not initialised to zero"
        );
    }
}

#[test]
fn test_salary_month_twelve_rejected() {
    let r = bastide();

    let err = r.compute_monthly_salary(12, FIXED_BASTIDE).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(err, DomainError::MonthOutOfRange { month: 12 });
}

#[test]
fn test_negative_percentage_rejected() {
    let r = bastide();

    let err = r.compute_monthly_salary(0, -0.1).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(matches!(err, DomainError::NegativePercentage(_)));
}

#[test]
fn test_unvalidated_fixed_salary() {
    let mut r = bastide();
    r.set_fixed_salary(-50.0);

    let salary = r.compute_monthly_salary(0, 0.1).unwrap();
    assert!((salary - (-50.0 + ALLOWANCE_OCCITANIE)).abs() < TOLERANCE);
}

// ==========================================
// Revenue registration
// ==========================================

#[test]
fn test_register_revenue() {
    let mut r = bastide();
    r.register_revenue(0, 50_000.0).unwrap();

    assert_eq!(r.monthly_revenue()[0], 50_000.0, "registered revenue is wrong");
}

#[test]
fn test_register_negative_month_rejected() {
    let mut r = bastide();

    let err = r.register_revenue(-1, 5000.0).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(r.monthly_revenue(), &[0.0; MONTHS_PER_YEAR]);
}

#[test]
fn test_register_negative_revenue_rejected() {
    let mut r = bastide();

    for month in 0..MONTHS_PER_YEAR as i32 {
        let err = r.register_revenue(month, -10_000.0).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(r.revenue(month).unwrap(), 0.0);
    }
}

// ==========================================
// Bulk revenue replacement
// ==========================================

#[test]
fn test_thirteen_values_rejected() {
    let mut r = bastide();

    let err = r.set_monthly_revenue(&[0.0; 13]).unwrap_err();
    assert_eq!(
        err,
        DomainError::RevenueLengthMismatch {
            expected: 12,
            actual: 13
        }
    );
}

#[test]
fn test_short_sequence_rejected() {
    // shorter sequences are not padded
    let mut r = bastide();
    r.register_revenue(2, 700.0).unwrap();

    let err = r.set_monthly_revenue(&[5000.0, 6000.0]).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(r.revenue(2).unwrap(), 700.0);
    assert_eq!(r.monthly_revenue().len(), MONTHS_PER_YEAR);
}

#[test]
fn test_set_then_get_monthly_revenue() {
    let mut r = bastide();
    let values: Vec<f64> = (1..=12).map(|m| m as f64 * 500.0).collect();

    r.set_monthly_revenue(&values).unwrap();

    assert_eq!(r.monthly_revenue().as_slice(), values.as_slice());
    assert!((r.annual_revenue() - 39_000.0).abs() < TOLERANCE);
}

// ==========================================
// Identity and display
// ==========================================

#[test]
fn test_display() {
    let r = bastide();
    assert_eq!(
        r.to_string(),
        "Representant{numero=36, nom=Bastide, prenom=Rémi}",
        "display output is wrong"
    );
}

#[test]
fn test_display_ignores_compensation() {
    let mut r = bastide();
    r.set_fixed_salary(99_999.0);
    r.register_revenue(5, 1.0).unwrap();
    r.set_address("12 avenue Foch");

    assert_eq!(r.to_string(), "Representant{numero=36, nom=Bastide, prenom=Rémi}");
}

#[test]
fn test_address_empty_by_default() {
    let r = bastide();
    assert!(r.address().is_empty());
}

// ==========================================
// Shared zone
// ==========================================

#[test]
fn test_zone_allowance_change_seen_by_all_representatives() {
    let zone = occitanie();
    let a = bastide_in(zone.clone());
    let b = Representative::new(37, "Durand", "Anne", zone.clone());

    zone.set_meal_allowance(300.0);

    assert!((a.compute_monthly_salary(0, 0.0).unwrap() - 1300.0).abs() < TOLERANCE);
    assert!((b.compute_monthly_salary(0, 0.0).unwrap() - 300.0).abs() < TOLERANCE);
    assert!(a.zone().ptr_eq(b.zone()));
}

#[test]
fn test_cloned_representative_keeps_zone_reference() {
    let zone = ZoneHandle::new(GeographicZone::new(4, "Alsace"));
    let original = bastide_in(zone.clone());
    let copy = original.clone();

    assert!(copy.zone().ptr_eq(&zone));
}
