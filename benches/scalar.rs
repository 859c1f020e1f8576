#![allow(dead_code)]

use fluxbench::{Bencher, flux};
use std::hint::black_box;

use numalg::prelude::*;

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

#[flux::bench(group = "product")]
fn complex_product(b: &mut Bencher) {
    let x = Complex128::new(1.5, -2.0);
    let y = Complex128::new(0.25, 3.0);
    b.iter(|| black_box(black_box(x) * black_box(y)));
}

#[flux::bench(group = "product")]
fn quaternion_product(b: &mut Bencher) {
    let x = Quaternion256::new(1.5, -2.0, 0.5, 1.0);
    let y = Quaternion256::new(0.25, 3.0, -1.0, 2.0);
    b.iter(|| black_box(black_box(x) * black_box(y)));
}

#[flux::bench(group = "product")]
fn octonion_product(b: &mut Bencher) {
    let x = Octonion512::new(1.5, -2.0, 0.5, 1.0, 0.0, 1.0, -1.0, 2.0);
    let y = Octonion512::new(0.25, 3.0, -1.0, 2.0, 1.0, 0.5, 0.0, -0.5);
    b.iter(|| black_box(black_box(x) * black_box(y)));
}

// ---------------------------------------------------------------------------
// Transcendentals
// ---------------------------------------------------------------------------

#[flux::bench(group = "transcendental")]
fn complex_exp(b: &mut Bencher) {
    let x = Complex128::new(0.5, -1.25);
    b.iter(|| black_box(black_box(x).exp()));
}

#[flux::bench(group = "transcendental")]
fn quaternion_ln(b: &mut Bencher) {
    let x = Quaternion256::new(0.5, -1.25, 2.0, 0.75);
    b.iter(|| black_box(black_box(x).ln().unwrap()));
}

#[flux::bench(group = "transcendental")]
fn complex_pow(b: &mut Bencher) {
    let x = Complex128::new(0.5, -1.25);
    let y = Complex128::new(2.5, 0.5);
    b.iter(|| black_box(black_box(x).pow(&y).unwrap()));
}

#[flux::bench(group = "transcendental")]
fn octonion_sin_and_cos(b: &mut Bencher) {
    let x = Octonion512::new(0.5, -0.25, 0.125, 1.0, 0.0, 0.5, -0.5, 0.25);
    b.iter(|| black_box(black_box(x).sin_and_cos()));
}

#[flux::bench(group = "transcendental")]
fn complex_series_exp(b: &mut Bencher) {
    let x = Complex128::new(0.5, -1.25);
    let config = SeriesConfig::default();
    b.iter(|| black_box(numalg::algorithm::taylor_exp(&black_box(x), &config)));
}

fn main() {
    fluxbench::run().unwrap();
}
