//! Tests for the Vector3 functions.

use super::*;
use crate::error::MathError;
use approx::assert_relative_eq;

// =============================================================================
// CONSTRUCTION
// =============================================================================

#[test]
fn vec3_keeps_components_exactly() {
    let v = vec3(1.5, -2.25, 1e9).unwrap();
    assert_eq!((v.x, v.y, v.z), (1.5, -2.25, 1e9));
}

#[test]
fn vec3_rejects_non_finite_components() {
    match vec3(0.0, f64::NAN, 0.0) {
        Err(MathError::InvalidArgument { label, .. }) => assert_eq!(label, "y"),
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
    assert!(vec3(0.0, 0.0, f64::NEG_INFINITY).is_err());
}

#[test]
fn vec3_from_matches_component_form() {
    let record = Vec3Record { x: 4.0, y: 5.0, z: 6.0 };
    assert_eq!(vec3_from(record).unwrap(), vec3(4.0, 5.0, 6.0).unwrap());
    assert_eq!(vec3_from((4.0, 5.0, 6.0)).unwrap(), Vec3::new(4.0, 5.0, 6.0));
    assert_eq!(
        vec3_from(glam::Vec3::new(0.5, 1.0, 2.0)).unwrap(),
        Vec3::new(0.5, 1.0, 2.0)
    );
}

#[test]
fn vec3_from_validates_source_components() {
    let record = Vec3Record { x: f64::NAN, y: 0.0, z: 0.0 };
    assert!(vec3_from(record).is_err());
}

#[test]
fn constant_constructors() {
    assert_eq!(vec3_zero(), Vec3::new(0.0, 0.0, 0.0));
    assert_eq!(vec3_one(), Vec3::new(1.0, 1.0, 1.0));
}

#[test]
fn axis_constructors_default_to_unit_length() {
    assert_eq!(vec3_x(None).unwrap(), Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(vec3_y(None).unwrap(), Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(vec3_z(None).unwrap(), Vec3::new(0.0, 0.0, 1.0));
}

#[test]
fn axis_constructors_scale_one_axis() {
    assert_eq!(vec3_x(Some(3.0)).unwrap(), Vec3::new(3.0, 0.0, 0.0));
    assert_eq!(vec3_y(Some(-2.0)).unwrap(), Vec3::new(0.0, -2.0, 0.0));
    assert_eq!(vec3_z(Some(0.5)).unwrap(), Vec3::new(0.0, 0.0, 0.5));
    assert!(vec3_z(Some(f64::INFINITY)).is_err());
}

// =============================================================================
// ARITHMETIC
// =============================================================================

#[test]
fn add_and_sub_are_component_wise() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = [0.5, -1.0, 10.0];
    assert_eq!(vec3_add(a, b), Vec3::new(1.5, 1.0, 13.0));
    assert_eq!(vec3_sub(a, b), Vec3::new(0.5, 3.0, -7.0));
}

#[test]
fn add_is_commutative() {
    let a = Vec3::new(0.1, 0.2, 0.3);
    let b = Vec3::new(7.0, -3.5, 1e-3);
    assert_eq!(vec3_add(a, b), vec3_add(b, a));
}

#[test]
fn zero_is_additive_identity() {
    let v = Vec3::new(-4.0, 8.5, 0.25);
    assert_eq!(vec3_add(v, vec3_zero()), v);
}

#[test]
fn sub_equals_add_of_negation() {
    let a = Vec3::new(3.0, -1.0, 2.5);
    let b = Vec3::new(0.75, 4.0, -6.0);
    assert_eq!(vec3_sub(a, b), vec3_add(a, vec3_neg(b)));
}

#[test]
fn single_component_add() {
    let v = Vec3Record { x: 1.0, y: 2.0, z: 3.0 };
    assert_eq!(vec3_add_x(v, 10.0), Vec3::new(11.0, 2.0, 3.0));
    assert_eq!(vec3_add_y(v, 10.0), Vec3::new(1.0, 12.0, 3.0));
    assert_eq!(vec3_add_z(v, 10.0), Vec3::new(1.0, 2.0, 13.0));
}

#[test]
fn single_component_replace() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(vec3_with_x(v, 9.0), Vec3::new(9.0, 2.0, 3.0));
    assert_eq!(vec3_with_y(v, 9.0), Vec3::new(1.0, 9.0, 3.0));
    assert_eq!(vec3_with_z(v, 9.0), Vec3::new(1.0, 2.0, 9.0));
    // Input untouched
    assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn scale_and_scale_add() {
    let v = Vec3::new(1.0, -2.0, 0.5);
    assert_eq!(vec3_scale(v, 2.0), Vec3::new(2.0, -4.0, 1.0));
    assert_eq!(
        vec3_scale_add([1.0, 1.0, 1.0], 3.0, v),
        Vec3::new(4.0, -5.0, 2.5)
    );
}

#[test]
fn neg_flips_signs() {
    assert_eq!(vec3_neg((1.0, -2.0, 0.0)), Vec3::new(-1.0, 2.0, -0.0));
}

// =============================================================================
// GEOMETRY
// =============================================================================

#[test]
fn length_and_length_sq() {
    let v = [2.0, 3.0, 6.0];
    assert_eq!(vec3_length_sq(v), 49.0);
    assert_eq!(vec3_length(v), 7.0);
}

#[test]
fn scale_multiplies_length_by_abs_factor() {
    let v = Vec3::new(1.0, -4.0, 2.5);
    for s in [-3.0, -0.5, 0.0, 2.0, 10.0] {
        assert_relative_eq!(
            vec3_length(vec3_scale(v, s)),
            f64::abs(s) * vec3_length(v),
            epsilon = 1e-12
        );
    }
}

#[test]
fn normalized_has_unit_length() {
    for v in [
        Vec3::new(3.0, 4.0, 0.0),
        Vec3::new(-1e-3, 2e-3, 5e-4),
        Vec3::new(1e6, -1e6, 3.0),
    ] {
        assert!((vec3_length(vec3_normalized(v)) - 1.0).abs() <= 1e-6);
    }
}

#[test]
fn normalized_zero_vector_is_nan() {
    let n = vec3_normalized(vec3_zero());
    assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan());
}

#[test]
fn rescaled_sets_length() {
    let v = vec3_rescaled(Vec3::new(0.0, 3.0, 4.0), 10.0);
    assert_relative_eq!(v.y, 6.0, epsilon = 1e-12);
    assert_relative_eq!(v.z, 8.0, epsilon = 1e-12);
    assert!(vec3_rescaled(vec3_zero(), 2.0).x.is_nan());
}

#[test]
fn dot_product() {
    assert_eq!(vec3_dot([1.0, 2.0, 3.0], [4.0, -5.0, 6.0]), 12.0);
    assert_eq!(vec3_dot(Vec3::X, Vec3::Y), 0.0);
}

// =============================================================================
// COMPARISON & FORMATTING
// =============================================================================

#[test]
fn equal_respects_epsilon() {
    let a = Vec3::new(1.0, 1.0, 1.0);
    let b = Vec3::new(1.0005, 1.0, 1.0);
    assert!(vec3_equal(a, b, Some(0.001)));
    assert!(!vec3_equal(a, b, Some(0.0001)));
}

#[test]
fn equal_uses_default_epsilon() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    assert!(vec3_equal(a, Vec3::new(1.0, 2.0, 3.0 + 5e-7), None));
    assert!(!vec3_equal(a, Vec3::new(1.0, 2.0, 3.001), None));
}

#[test]
fn equal_with_nan_is_false() {
    let nan = Vec3::new(f64::NAN, 0.0, 0.0);
    assert!(!vec3_equal(nan, nan, None));
}

#[test]
fn to_string_default_format() {
    assert_eq!(vec3_to_string(Vec3::new(1.0, 2.5, -3.0), None), "(1, 2.5, -3)");
    assert_eq!(vec3_to_string(Vec3::new(-0.0, 0.0, 0.0), None), "(0, 0, 0)");
}

#[test]
fn to_string_fixed_digits() {
    assert_eq!(
        vec3_to_string(Vec3::new(1.0, 2.0, 3.0), Some(2)),
        "(1.00, 2.00, 3.00)"
    );
    assert_eq!(
        vec3_to_string(Vec3::new(0.123456, -7.6, 10.0), Some(0)),
        "(0, -8, 10)"
    );
}

#[test]
fn to_string_fixed_digits_rounds_ties_up() {
    assert_eq!(
        vec3_to_string(Vec3::new(0.5, 2.5, -2.5), Some(0)),
        "(1, 3, -3)"
    );
    assert_eq!(
        vec3_to_string(Vec3::new(0.125, 1.005, -2.5), Some(2)),
        "(0.13, 1.00, -2.50)"
    );
}

#[test]
fn to_string_uses_exponent_form_for_extreme_magnitudes() {
    assert_eq!(
        vec3_to_string(Vec3::new(1e300, 1e-7, 123.0), None),
        "(1e+300, 1e-7, 123)"
    );
}

#[test]
fn to_string_non_finite() {
    assert_eq!(
        vec3_to_string(vec3_normalized(vec3_zero()), None),
        "(NaN, NaN, NaN)"
    );
}

// =============================================================================
// SCALAR ARGUMENTS
// =============================================================================

#[test]
fn scalar_arguments_propagate_without_checks() {
    assert!(vec3_scale(Vec3::ONE, f64::NAN).is_nan());
    assert!(vec3_add_x(Vec3::ONE, f64::NAN).x.is_nan());
    assert_eq!(vec3_add_x(Vec3::ONE, f64::NAN).y, 1.0);
    assert_eq!(vec3_with_z(Vec3::ONE, f64::INFINITY).z, f64::INFINITY);
    assert!(vec3_rescaled(Vec3::X, f64::NAN).is_nan());
}

#[test]
fn axis_constructors_check_their_scale() {
    assert!(matches!(
        vec3_x(Some(f64::NAN)),
        Err(MathError::InvalidArgument { .. })
    ));
}
