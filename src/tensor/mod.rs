//! Aggregate containers of members
//!
//! Three containers share one [`Layout`] + [`Storage`] representation:
//!
//! - [`RModule`]: a vector of members with dot, cross and triple products
//! - [`Matrix`]: a rows × cols grid with multiply, invert, determinant and
//!   matrix transcendental functions
//! - [`Tensor`]: a Cartesian tensor with outer product and contraction
//!
//! Members are stored row-major in an [`ArrayStorage`] unless another
//! [`Storage`] is supplied as the second type parameter.

mod core;
mod elementwise;
mod layout;
mod matrix;
mod rmodule;
mod storage;

pub use core::Tensor;
pub use layout::{Layout, Shape, Strides};
pub use matrix::{Matrix, SQRT_DENMAN_BEAVERS_MAX_ITER};
pub use rmodule::RModule;
pub use storage::{ArrayStorage, Storage};
