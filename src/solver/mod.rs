//! Log-barrier interior point solver.
//!
//! A problem is assembled as a [`BarrierProblem`] from a smooth convex
//! objective, smooth convex inequality constraints `g_i(x) < 0` and
//! optional linear equality constraints `A*x = b`.  The
//! [`BarrierSolver`] follows the central path from a strictly feasible
//! starting point, solving each barrier subproblem by Newton's method
//! with a backtracking line search.
//!
//! The [`interior_point`] function wraps problem assembly and solve in
//! a single call.

mod barrier;
mod callbacks;
mod info;
mod info_print;
mod ipsolver;
mod kkt;
mod linesearch;
mod problem;
mod settings;
mod solution;

#[cfg(feature = "serde")]
mod json;

pub use barrier::*;
pub use info::*;
pub use ipsolver::*;
pub use kkt::*;
pub use linesearch::*;
pub use problem::*;
pub use settings::*;
pub use solution::*;

#[cfg(feature = "serde")]
pub use json::*;
