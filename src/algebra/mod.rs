//! Dense linear algebra for the barrier solver.
//!
//! Every matrix the solver touches is a small dense Hessian, constraint
//! matrix or KKT system, so this module provides a single column major
//! [`Matrix`] type together with the vector and matrix operations the
//! solver needs and a pivoted LU solver for the Newton systems.

mod dense;
mod error_types;
mod floats;
mod math_traits;
mod matrix_traits;
mod matrix_types;
mod vecmath;

pub use dense::*;
pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub use matrix_traits::*;
pub use matrix_types::*;

#[cfg(test)]
mod tests;
