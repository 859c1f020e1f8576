//! Capability implementations for the shipped member types
//!
//! - real - `f16`, `f32`, `f64` through `num_traits::Float`
//! - hypercomplex - `Complex`, `Quaternion`, `Octonion` through one set of
//!   generic polar kernels

mod hypercomplex;
mod real;
