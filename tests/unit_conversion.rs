use enviro_dashboard_wasm::domain::environment::{
    Temperature, TemperatureUnit, celsius_to_fahrenheit, fahrenheit_to_celsius,
};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

#[test]
fn reference_points() {
    assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
    assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
}

#[quickcheck]
fn conversion_is_monotonic(a: f64, b: f64) -> TestResult {
    if !a.is_finite() || !b.is_finite() || a.abs() > 1e12 || b.abs() > 1e12 {
        return TestResult::discard();
    }
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    TestResult::from_bool(celsius_to_fahrenheit(lo) <= celsius_to_fahrenheit(hi))
}

#[quickcheck]
fn fahrenheit_round_trip_restores_celsius(c: f64) -> TestResult {
    if !c.is_finite() || c.abs() > 1e9 {
        return TestResult::discard();
    }
    let back = fahrenheit_to_celsius(celsius_to_fahrenheit(c));
    TestResult::from_bool((back - c).abs() <= 1e-9 * c.abs().max(1.0))
}

#[test]
fn unit_selection_never_changes_the_stored_value() {
    let t = Temperature::from_celsius(21.7);
    let shown_f = t.in_unit(TemperatureUnit::Fahrenheit);
    let shown_c = t.in_unit(TemperatureUnit::Celsius);
    assert_eq!(shown_c, 21.7);
    assert!((TemperatureUnit::Fahrenheit.to_celsius(shown_f) - 21.7).abs() < 1e-12);
    assert_eq!(t.celsius(), 21.7);
}
