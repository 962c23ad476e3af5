//! Algebraic properties of `FixedVector`.

use rstest::rstest;

use geoset_core::math::{vec2, vec3, vec4, FixedVector, Vec3};
use geoset_core::CoreError;

const EPSILON: f32 = 1e-4;

fn assert_close<const N: usize>(a: FixedVector<N, f32>, b: FixedVector<N, f32>) {
    assert!(
        (a - b).as_array().iter().all(|d| d.abs() < EPSILON),
        "{a} != {b}"
    );
}

#[rstest]
#[case::axes(vec3(1, 0, 0), vec3(0, 1, 0))]
#[case::mixed(vec3(1, 2, 3), vec3(-4, 5, 6))]
#[case::parallel(vec3(2, 2, 2), vec3(4, 4, 4))]
fn dot_is_symmetric_and_cross_anticommutative(
    #[case] u: FixedVector<3, i32>,
    #[case] v: FixedVector<3, i32>,
) {
    assert_eq!(u * v, v * u);
    assert_eq!(u % v, -(v % u));
    // The cross product is perpendicular to both operands.
    assert_eq!((u % v) * u, 0);
    assert_eq!((u % v) * v, 0);
}

#[rstest]
#[case::small(vec3(1.0, 2.0, 3.0), 3.0)]
#[case::fraction(vec3(-0.5, 0.25, 8.0), 0.125)]
#[case::negative(vec3(10.0, -20.0, 30.0), -7.0)]
fn divide_then_multiply_recovers_vector(#[case] v: Vec3, #[case] s: f32) {
    assert_close((v / s) * s, v);
    let mut w = v;
    w /= s;
    w *= s;
    assert_close(w, v);
}

#[rstest]
#[case::unit_axis(vec3(0.0, 0.0, 2.0))]
#[case::diagonal(vec3(1.0, 1.0, 1.0))]
#[case::large(vec3(300.0, -400.0, 1200.0))]
fn normalized_vectors_have_unit_length(#[case] v: Vec3) {
    let n = v.normalized().unwrap();
    assert!((n.length() - 1.0).abs() < EPSILON);
    let mut m = v;
    m.normalize().unwrap();
    assert_close(m, n);
}

#[test]
fn normalize_keeps_zero_components_exact() {
    let mut v = vec4(0.0f64, 3.0, 0.0, 4.0);
    v.normalize().unwrap();
    assert_eq!(v.get(0), Ok(0.0));
    assert_eq!(v.get(2), Ok(0.0));
}

#[test]
fn integer_normalize_truncates() {
    let mut v = vec2(0, 7);
    v.normalize().unwrap();
    assert_eq!(v, vec2(0, 1));
    let mut v = vec2(3, 4);
    v.normalize().unwrap();
    assert_eq!(v, vec2(0, 0));
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
#[case(3)]
fn write_then_read_each_index(#[case] i: usize) {
    let mut v = FixedVector::<4, f32>::zero();
    v.set(i, 42.5).unwrap();
    assert_eq!(v.get(i), Ok(42.5));
    assert_eq!(v.sum(), 42.5);
}

#[cfg(feature = "checked")]
#[rstest]
#[case::just_past(3)]
#[case::far(1000)]
#[case::max(usize::MAX)]
fn access_outside_range_is_reported(#[case] i: usize) {
    let mut v = vec3(1u32, 2, 3);
    let expected = CoreError::IndexOutOfBounds {
        index: i,
        lower: 0,
        upper: 3,
    };
    assert_eq!(v.get(i), Err(expected.clone()));
    assert_eq!(v.set(i, 9), Err(expected));
    assert_eq!(v, vec3(1, 2, 3));
}

#[cfg(feature = "checked")]
#[test]
fn division_by_zero_is_reported_for_every_scalar_type() {
    assert_eq!(vec2(1, 2).try_div(0), Err(CoreError::DivisionByZero));
    assert_eq!(vec2(1u8, 2).try_div(0), Err(CoreError::DivisionByZero));
    assert_eq!(vec2(1.0f64, 2.0).try_div(0.0), Err(CoreError::DivisionByZero));
    assert_eq!(vec2(1.0f32, 2.0).try_div(-0.0), Err(CoreError::DivisionByZero));
}

#[cfg(feature = "checked")]
#[test]
#[should_panic(expected = "Division by zero")]
fn division_operator_panics_on_zero() {
    let _ = vec3(1.0f32, 2.0, 3.0) / 0.0;
}

#[cfg(feature = "checked")]
#[test]
fn normalizing_zero_vector_is_an_arithmetic_error() {
    let err = Vec3::zero().normalized().unwrap_err();
    assert!(matches!(err, CoreError::Arithmetic(_)));
    assert_eq!(
        err.to_string(),
        "Arithmetic error: Can not normalize the zero vector."
    );
}

#[cfg(not(feature = "checked"))]
#[test]
fn unchecked_division_by_zero_yields_infinity() {
    let v = vec2(1.0f32, -1.0).try_div(0.0).unwrap();
    assert_eq!(v, vec2(f32::INFINITY, f32::NEG_INFINITY));
}

#[cfg(not(feature = "checked"))]
#[test]
fn unchecked_zero_normalize_is_a_no_op() {
    let mut v = Vec3::zero();
    v.normalize().unwrap();
    assert!(v.is_zero());
}

#[cfg(not(feature = "checked"))]
#[test]
#[should_panic]
fn unchecked_index_hits_array_bounds() {
    let v = vec3(1, 2, 3);
    let _ = v.get(3);
}

#[test]
fn scalar_on_either_side() {
    let v = vec3(1.5f64, 2.0, -1.0);
    assert_eq!(2.0 * v, v * 2.0);
    assert_eq!(1.0 + v, v + 1.0);
    assert_eq!(v - 1.0, vec3(0.5, 1.0, -2.0));
}

#[test]
fn reductions_and_display() {
    let v = vec4(3, 9, -2, 9);
    assert_eq!((v.max(), v.max_index()), (9, 1));
    assert_eq!((v.min(), v.min_index()), (-2, 2));
    assert_eq!(v.to_string(), "[3, 9, -2, 9]");
    assert_eq!(format!("{}", vec2(0.25f32, 4.0)), "[0.25, 4]");
}

#[test]
fn integer_length_does_not_overflow_component_type() {
    assert_eq!(vec3(50000i32, 0, 0).length(), 50000.0);
    assert_eq!(vec3(200u8, 0, 0).length(), 200.0);
    assert_eq!(vec2(i64::MAX, 0).length(), i64::MAX as f32);
}

#[test]
fn integer_normalize_with_large_components() {
    let mut v = vec3(0i32, 60000, 0);
    v.normalize().unwrap();
    assert_eq!(v, vec3(0, 1, 0));
    let n = vec3(0u8, 0, 250).normalized().unwrap();
    assert_eq!(n, vec3(0.0, 0.0, 1.0));
}

#[rstest]
#[case::ordered(vec3(1u32, 2, 3), vec3(4u32, 6, 3))]
#[case::mixed(vec3(4u32, 2, 3), vec3(1u32, 6, 3))]
fn unsigned_distance_does_not_underflow(
    #[case] a: FixedVector<3, u32>,
    #[case] b: FixedVector<3, u32>,
) {
    assert_eq!(a.distance(&b), 5.0);
    assert_eq!(b.distance(&a), 5.0);
}

#[test]
fn distance_is_symmetric() {
    let a = vec3(1.0f32, 2.0, 3.0);
    let b = vec3(4.0f32, 6.0, 3.0);
    assert_eq!(a.distance(&b), 5.0);
    assert_eq!(b.distance(&a), 5.0);
}
