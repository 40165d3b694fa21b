//! Algebraic laws of 2D and 3D vectors.

use metron_core::{Angle, Length, Real};
use metron_test_utils::magnitude;
use metron_vector::{Vector2, Vector3};
use proptest::prelude::*;

fn close(a: Real, b: Real, scale: Real) -> bool {
    (a - b).abs() <= 1e-9 * scale.max(1.0)
}

fn vec2() -> impl Strategy<Value = Vector2<Real>> {
    (magnitude(), magnitude()).prop_map(|(x, y)| Vector2::new(x, y))
}

fn vec3() -> impl Strategy<Value = Vector3<Real>> {
    (magnitude(), magnitude(), magnitude()).prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

fn length_vec3() -> impl Strategy<Value = Vector3<Length>> {
    vec3().prop_map(|v| v.map(Length::new))
}

#[test]
fn float_dot_and_distance() {
    let a = Vector2::new(1.0f32, 2.0);
    let b = Vector2::new(5.0f32, 4.0);
    assert_eq!(a.dot(b), 13.0);
    assert_eq!(a.distance_squared(b), 20.0);
}

proptest! {
    #[test]
    fn dot_self_is_length_squared(a in vec3()) {
        prop_assert_eq!(a.dot(a), a.length_squared());
    }

    #[test]
    fn distance_to_self_is_zero(a in vec2()) {
        prop_assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn cross_is_anticommutative(a in length_vec3(), b in length_vec3()) {
        let ab = a.cross(b);
        let ba = b.cross(a);
        prop_assert_eq!(ab, -ba);
    }

    #[test]
    fn cross_is_orthogonal(a in vec3(), b in vec3()) {
        let c = a.cross(b);
        let scale = a.length_squared() * b.length();
        prop_assert!(close(c.dot(a), 0.0, scale));
    }

    #[test]
    fn rotation_inverts(v in vec2(), theta in -10.0f64..10.0) {
        let back = v.rotate(Angle::new(theta)).rotate(Angle::new(-theta));
        let scale = v.length();
        prop_assert!(close(back.x(), v.x(), scale));
        prop_assert!(close(back.y(), v.y(), scale));
    }

    #[test]
    fn rotation_preserves_length(v in vec2(), theta in -10.0f64..10.0) {
        let r = v.rotate(Angle::new(theta));
        prop_assert!(close(r.length(), v.length(), v.length()));
    }

    #[test]
    fn unit_length_matches_float_length(a in vec3()) {
        let l = a.map(Length::new).length();
        prop_assert_eq!(l.value(), a.length());
    }
}
