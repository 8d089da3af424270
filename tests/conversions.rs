//! End-to-end conversion scenarios and boundary behavior.

use dimensional::{Quantity, UnitError};

/// Relative-tolerance comparison for converted magnitudes.
fn assert_close(actual: f64, expected: f64) {
    let tolerance = expected.abs().max(1.0) * 1e-7;
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

fn convert(magnitude: f64, from: &str, to: &str) -> Quantity {
    Quantity::new(magnitude, from).unwrap().convert(to).unwrap()
}

// ============================================================================
// Temperature
// ============================================================================

#[test]
fn celsius_to_fahrenheit() {
    assert_close(convert(100.0, "degC", "degF").get().magnitude, 212.0);
    assert_close(convert(0.0, "degC", "degF").get().magnitude, 32.0);
}

#[test]
fn fahrenheit_to_kelvin() {
    assert_close(convert(32.0, "degF", "K").get().magnitude, 273.15);
    assert_close(convert(-40.0, "degF", "degC").get().magnitude, -40.0);
}

#[test]
fn temperature_differences_are_linear() {
    // deltaC is a difference, not an absolute scale
    assert_close(convert(5.0, "deltaC", "K").get().magnitude, 5.0);
    assert_close(convert(300.0, "K", "K").get().magnitude, 300.0);
}

// ============================================================================
// Compound expressions
// ============================================================================

#[test]
fn grams_to_a_newton_expression() {
    let q = convert(500.0, "g", "s^2 N / m");
    assert_close(q.get().magnitude, 0.5);
    assert_eq!(q.get().units, "s^2⋅N/m");
    assert_eq!(q.get_raw().units, "s^2 N / m");
}

#[test]
fn kilowatt_hours_to_megajoules() {
    assert_close(convert(1.0, "kWh", "MJ").get().magnitude, 3.6);
}

#[test]
fn speed_of_light_in_km_per_h() {
    assert_close(
        convert(1.0, "c", "km/h").get().magnitude,
        299_792_458.0 * 3.6,
    );
}

#[test]
fn newton_hours_squared_per_foot() {
    // exotic but dimensionally sound: N⋅h^2/ft is a mass
    let q = convert(1.0, "N⋅h^2/ft", "kg");
    assert_close(q.get().magnitude, 3600.0 * 3600.0 / 0.3048);
}

// ============================================================================
// Information units
// ============================================================================

#[test]
fn binary_and_metric_gigabytes_differ() {
    assert_close(convert(1.0, "GiB", "B").get().magnitude, 1_073_741_824.0);
    assert_close(convert(1.0, "GB", "B").get().magnitude, 1_000_000_000.0);
    assert_close(convert(1.0, "B", "b").get().magnitude, 8.0);
}

// ============================================================================
// Dimensionless closure
// ============================================================================

#[test]
fn percent_ppm_and_unity_are_mutually_convertible() {
    assert_close(convert(1.0, "", "%").get().magnitude, 100.0);
    assert_close(convert(1.0, "", "ppm").get().magnitude, 1e6);
    assert_close(convert(1.0, "%", "ppm").get().magnitude, 1e4);
    assert_close(convert(250000.0, "ppm", "%").get().magnitude, 25.0);
    assert_close(convert(50.0, "%", "").get().magnitude, 0.5);
}

#[test]
fn dimensioned_sources_cannot_become_dimensionless() {
    let q = Quantity::new(1.0, "m").unwrap();
    assert!(matches!(
        q.convert(""),
        Err(UnitError::InvalidConversion { .. })
    ));
}

// ============================================================================
// Custom dimensions
// ============================================================================

#[test]
fn pphpd_expands_to_custom_dimensions() {
    let q = convert(3600.0, "pphpd", "_pax/h⋅_dir");
    assert_close(q.get().magnitude, 3600.0);
    assert_eq!(q.get().units, "_pax/h⋅_dir");
}

#[test]
fn custom_dimensions_do_not_unify_with_basics() {
    let q = Quantity::new(1.0, "_pax/s").unwrap();
    assert!(matches!(
        q.convert("Hz"),
        Err(UnitError::InvalidConversion { .. })
    ));
}

// ============================================================================
// Canonical SI form
// ============================================================================

#[test]
fn si_form_of_a_velocity() {
    let si = Quantity::new(36.0, "km/h").unwrap().to_si();
    assert_close(si.get().magnitude, 10.0);
    assert_eq!(si.get().units, "m/s");
}

#[test]
fn si_form_prefers_newton() {
    let si = Quantity::new(1234.0, "kg⋅m/s^2").unwrap().to_si();
    assert_close(si.get().magnitude, 1234.0);
    assert_eq!(si.get().units, "N");
}

#[test]
fn si_form_prefers_reciprocal_seconds_over_hertz() {
    let si = Quantity::new(10.0, "Hz").unwrap().to_si();
    assert_close(si.get().magnitude, 10.0);
    assert_eq!(si.get().units, "s^-1");
}

#[test]
fn si_form_of_a_mixed_product() {
    let si = Quantity::new(5.0, "V⋅kg^3⋅b^2⋅K^4⋅mol").unwrap().to_si();
    assert_close(si.get().magnitude, 5.0);
    assert_eq!(si.get().units, "V⋅kg^3⋅K^4⋅mol⋅b^2");
}

#[test]
fn si_form_is_identity_on_base_quantities() {
    let q = Quantity::new(2.5, "m/s").unwrap();
    assert_eq!(q.to_si().get().magnitude, q.get().magnitude);
}

// ============================================================================
// Customary units
// ============================================================================

#[test]
fn customary_scales() {
    assert_close(convert(1.0, "lb", "g").get().magnitude, 453.59237);
    assert_close(convert(1.0, "mi", "ft").get().magnitude, 5280.0);
    assert_close(convert(1.0, "atm", "psi").get().magnitude, 14.695948775);
    assert_close(convert(1.0, "HP", "W").get().magnitude, 745.69987158227);
    assert_close(convert(1.0, "ha", "m^2").get().magnitude, 1e4);
    assert_close(convert(1.0, "Ah", "C").get().magnitude, 3600.0);
    assert_close(convert(1.0, "M", "mol/L").get().magnitude, 1.0);
    assert_close(convert(1.0, "Ga", "yr").get().magnitude, 1e9);
}

// ============================================================================
// Failure modes
// ============================================================================

#[test]
fn incompatible_dimensions_are_rejected() {
    for (from, to) in [("kg", "m"), ("day", "kg"), ("A", "s/C"), ("A", "C s")] {
        let q = Quantity::new(1.0, from).unwrap();
        assert!(
            matches!(q.convert(to), Err(UnitError::InvalidConversion { .. })),
            "{from} -> {to}"
        );
    }
}

#[test]
fn malformed_unit_strings_are_rejected() {
    assert!(matches!(
        Quantity::new(1.0, "kg/s/s"),
        Err(UnitError::InvalidUnitString(_))
    ));
    assert!(matches!(
        Quantity::new(1.0, "m^0"),
        Err(UnitError::InvalidExponent(_))
    ));
    assert!(matches!(
        Quantity::new(1.0, "m^2.5"),
        Err(UnitError::InvalidExponent(_))
    ));
    assert!(matches!(
        Quantity::new(1.0, "flibber"),
        Err(UnitError::UnknownUnit(_))
    ));
}

#[test]
fn offset_units_are_rejected_in_compounds() {
    assert!(matches!(
        Quantity::new(1.0, "degC/s"),
        Err(UnitError::InvalidOffsetUse(_))
    ));
    assert!(matches!(
        Quantity::new(1.0, "degF^2"),
        Err(UnitError::InvalidOffsetUse(_))
    ));
}
