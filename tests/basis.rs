use approx::assert_abs_diff_eq;
use combustion_engineering_toolbox::fuel::{
    basis_coefficients, combustible_composition, dry_composition, lower_heating_value_kj_per_kg,
    rebase_heating_value, WorkingComposition,
};

fn variant3_coal() -> WorkingComposition {
    WorkingComposition {
        hydrogen_pct: 3.8,
        carbon_pct: 62.4,
        sulfur_pct: 3.6,
        nitrogen_pct: 1.1,
        oxygen_pct: 4.3,
        ash_pct: 18.8,
        moisture_pct: 6.0,
    }
}

#[test]
fn coefficients_ordering() {
    let coeffs = basis_coefficients(6.0, 18.8).expect("valid basis");
    assert!(coeffs.combustible >= coeffs.dry);
    assert!(coeffs.dry > 1.0);
}

#[test]
fn coefficients_monotonic_in_moisture_and_ash() {
    let low = basis_coefficients(5.0, 10.0).expect("valid basis");
    let wetter = basis_coefficients(10.0, 10.0).expect("valid basis");
    let ashier = basis_coefficients(5.0, 20.0).expect("valid basis");
    assert!(wetter.dry > low.dry);
    assert!(wetter.combustible > low.combustible);
    assert!(ashier.combustible > low.combustible);
    assert_abs_diff_eq!(ashier.dry, low.dry, epsilon = 1e-12);
}

#[test]
fn coefficients_reject_degenerate_basis() {
    assert!(basis_coefficients(100.0, 0.0).is_err());
    assert!(basis_coefficients(0.0, 100.0).is_err());
    assert!(basis_coefficients(60.0, 40.0).is_err());
    assert!(basis_coefficients(110.0, 0.0).is_err());
}

#[test]
fn consistent_composition_sums_to_100_on_both_bases() {
    let coal = variant3_coal();
    let coeffs = basis_coefficients(coal.moisture_pct, coal.ash_pct).expect("valid basis");
    let dry = dry_composition(&coal, coeffs.dry);
    let combustible = combustible_composition(&coal, coeffs.combustible);
    assert_abs_diff_eq!(dry.sum_pct(), 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(combustible.sum_pct(), 100.0, epsilon = 1e-9);
}

#[test]
fn variant3_coefficients_and_dry_hydrogen() {
    let coal = variant3_coal();
    let coeffs = basis_coefficients(coal.moisture_pct, coal.ash_pct).expect("valid basis");
    assert_abs_diff_eq!(coeffs.dry, 100.0 / 94.0, epsilon = 1e-12);
    assert_abs_diff_eq!(coeffs.combustible, 100.0 / 75.2, epsilon = 1e-12);
    assert!((coeffs.dry - 1.0638).abs() < 1e-4);

    let dry = dry_composition(&coal, coeffs.dry);
    assert!((dry.hydrogen_pct - 4.043).abs() < 1e-3);
}

#[test]
fn lower_heating_value_matches_correlation() {
    let coal = variant3_coal();
    let q = lower_heating_value_kj_per_kg(&coal);
    let expected = 339.0 * 62.4 + 1030.0 * 3.8 - 108.8 * (4.3 - 3.6) - 25.0 * 6.0;
    assert_abs_diff_eq!(q, expected, epsilon = 1e-9);
    assert_abs_diff_eq!(q, 24_841.44, epsilon = 1e-6);
}

#[test]
fn rebased_heating_value_round_trips_to_working_basis() {
    let coal = variant3_coal();
    let coeffs = basis_coefficients(coal.moisture_pct, coal.ash_pct).expect("valid basis");
    let q_working = lower_heating_value_kj_per_kg(&coal);
    let rebased = rebase_heating_value(q_working, coal.moisture_pct, &coeffs);

    let recovered = rebased.dry_mj_per_kg * 1000.0 / coeffs.dry - 25.0 * coal.moisture_pct;
    assert_abs_diff_eq!(recovered, q_working, epsilon = 1e-9);

    // 가연 기준이 건조 기준보다 항상 크거나 같다 (회분 제거 효과).
    assert!(rebased.combustible_mj_per_kg >= rebased.dry_mj_per_kg);
}
