//! Common test utilities
#![allow(dead_code)]

use numalg::dtype::Element;

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert two member slices are close, component by component
pub fn assert_members_close<T: Element>(a: &[T], b: &[T], rtol: f64, atol: f64, msg: &str) {
    let flat = |xs: &[T]| -> Vec<f64> { xs.iter().flat_map(|x| x.to_f64_components()).collect() };
    assert_allclose_f64(&flat(a), &flat(b), rtol, atol, msg);
}

/// Assert two members are close, component by component
pub fn assert_member_close<T: Element>(a: T, b: T, tol: f64, msg: &str) {
    assert_members_close(&[a], &[b], 0.0, tol, msg);
}
