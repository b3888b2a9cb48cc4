//! __logbarrier__ is a primal interior point solver for smooth convex
//! optimization problems using the logarithmic barrier method.  It solves
//!
//! $$
//! \begin{array}{rl}
//! \text{minimize} & f(x)\\\\\[2ex\]
//!  \text{subject to} & g_i(x) < 0, \quad i = 1,\dots,m \\\\\[1ex\]
//!         & Ax = b
//!  \end{array}
//! $$
//!
//! with decision variable $x \in \mathbb{R}^n$, a convex, twice
//! differentiable objective $f$, convex, twice differentiable
//! constraints $g_i$ and (optional) data $A \in \mathbb{R}^{p \times n}$,
//! $b \in \mathbb{R}^p$.
//!
//! Values, gradients and Hessians of $f$ and $g_i$ are supplied by the
//! caller.  Starting from a strictly feasible point, the solver minimizes
//! $t f(x) - \sum_i \log(-g_i(x))$ by Newton's method for an increasing
//! sequence of barrier weights $t$, stopping once the suboptimality bound
//! $m/t$ drops below the requested tolerance.
//!
//! ```
//! use logbarrier::algebra::*;
//! use logbarrier::solver::*;
//!
//! // minimize -x - y  s.t.  0 <= y <= 1,  x <= 2,  x + y >= 1
//! let f = AffineFunction::new(vec![-1., -1.], 0.);
//! let g = vec![
//!     AffineFunction::new(vec![0., -1.], 0.),
//!     AffineFunction::new(vec![0., 1.], -1.),
//!     AffineFunction::new(vec![1., 0.], -2.),
//!     AffineFunction::new(vec![-1., -1.], 1.),
//! ];
//!
//! let settings: BarrierSettings<f64> = BarrierSettingsBuilder::default().verbose(false).build().unwrap();
//! let solution = interior_point(f, g, None, &[0.5, 0.75], settings).unwrap();
//!
//! assert!((solution.obj_val + 3.).abs() < 1e-6);
//! ```

//Rust hates greek characters
#![allow(confusable_idents)]

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod io;
pub mod solver;
