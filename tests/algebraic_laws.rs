//! Property-based tests for the ring, field and norm laws

use numalg::prelude::*;
use proptest::prelude::*;

fn component() -> impl Strategy<Value = f64> {
    -10.0f64..10.0
}

fn complex() -> impl Strategy<Value = Complex128> {
    (component(), component()).prop_map(|(re, im)| Complex128::new(re, im))
}

fn quaternion() -> impl Strategy<Value = Quaternion256> {
    prop::array::uniform4(component()).prop_map(|[r, i, j, k]| Quaternion256::new(r, i, j, k))
}

fn octonion() -> impl Strategy<Value = Octonion512> {
    prop::array::uniform8(component()).prop_map(|c| Octonion512::from_components(&c).unwrap())
}

fn matrix3() -> impl Strategy<Value = Matrix<f64>> {
    prop::collection::vec(component(), 9).prop_map(|v| Matrix::from_slice(3, 3, &v).unwrap())
}

fn close<T: Tolerance<Component = f64>>(a: T, b: T, scale: f64) -> bool {
    a.within(&b, 1e-11 * scale.max(1.0))
}

proptest! {
    #[test]
    fn test_identities_are_exact(a in octonion()) {
        prop_assert_eq!(a + Octonion512::zero(), a);
        prop_assert_eq!(a * Octonion512::unity(), a);
        prop_assert_eq!(Octonion512::unity() * a, a);
        prop_assert_eq!(a.conjugate().conjugate(), a);
    }

    #[test]
    fn test_multiplicative_inverse(a in quaternion()) {
        prop_assume!(a.norm() > 1e-3);
        prop_assert!(close(a * a.invert(), Quaternion256::unity(), 1.0));
        prop_assert!(close(a.invert() * a, Quaternion256::unity(), 1.0));
    }

    #[test]
    fn test_octonion_inverse(a in octonion()) {
        prop_assume!(a.norm() > 1e-3);
        prop_assert!(close(a * a.invert(), Octonion512::unity(), 1.0));
    }

    #[test]
    fn test_norm_scale_law(a in quaternion(), c in component()) {
        let lhs = a.scale(c).norm();
        let rhs = c.abs() * a.norm();
        prop_assert!((lhs - rhs).abs() <= 1e-12 * rhs.max(1.0));
    }

    #[test]
    fn test_norm_positive_and_triangle(a in octonion(), b in octonion()) {
        prop_assume!(!a.is_zero());
        prop_assert!(a.norm() > 0.0);
        prop_assert!((a + b).norm() <= a.norm() + b.norm() + 1e-12);
    }

    #[test]
    fn test_norm_is_multiplicative(a in octonion(), b in octonion()) {
        let lhs = (a * b).norm();
        let rhs = a.norm() * b.norm();
        prop_assert!((lhs - rhs).abs() <= 1e-12 * rhs.max(1.0));
    }

    #[test]
    fn test_exp_ln_round_trip(a in complex()) {
        prop_assume!(a.norm() > 1e-3);
        let back = a.ln().unwrap().exp();
        prop_assert!(close(back, a, a.norm()));
    }

    #[test]
    fn test_pow_identities(a in complex()) {
        prop_assume!(a.norm() > 1e-3);
        prop_assert!(close(a.pow(&Complex128::unity()).unwrap(), a, a.norm()));
        prop_assert!(close(a.pow(&Complex128::zero()).unwrap(), Complex128::unity(), 1.0));
    }

    #[test]
    fn test_sqrt_squares_back(a in quaternion()) {
        let s = a.sqrt();
        prop_assert!(close(s * s, a, a.norm()));
    }

    #[test]
    fn test_matrix_multiply_associative(a in matrix3(), b in matrix3(), c in matrix3()) {
        let left = a.multiply(&b).unwrap().multiply(&c).unwrap();
        let right = a.multiply(&b.multiply(&c).unwrap()).unwrap();
        prop_assert!(left.within(&right, 1e-9 * left.norm().max(1.0)));
    }

    #[test]
    fn test_display_parse_round_trip(a in octonion()) {
        prop_assert_eq!(a.to_string().parse::<Octonion512>().unwrap(), a);
    }
}
