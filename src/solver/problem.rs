#![allow(non_snake_case)]

use super::{EvaluatedFunction, SolverError};
use crate::algebra::*;
use thiserror::Error;

/// Value, gradient and Hessian of a smooth function at a point.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation<T> {
    pub value: T,
    pub gradient: Vec<T>,
    pub hessian: Matrix<T>,
}

impl<T> Evaluation<T>
where
    T: FloatT,
{
    pub fn new(value: T, gradient: Vec<T>, hessian: Matrix<T>) -> Self {
        Self {
            value,
            gradient,
            hessian,
        }
    }

    /// An all-zero evaluation of dimension `n`
    pub fn zeros(n: usize) -> Self {
        Self::new(T::zero(), vec![T::zero(); n], Matrix::zeros((n, n)))
    }

    pub(crate) fn has_dimension(&self, n: usize) -> bool {
        self.gradient.len() == n && self.hessian.size() == (n, n)
    }
}

/// A twice differentiable function supplied by the caller.
///
/// Used both for the objective and for inequality constraints, where
/// the feasible region is `{x : value(x) < 0}`.  The gradient and
/// Hessian must be consistent with the value; this is not checked.
/// Constraints are also evaluated at trial points outside the feasible
/// region, where only the sign of the value is relied upon.
///
/// Any `Fn(&[T]) -> Evaluation<T>` closure implements this trait.
pub trait SmoothFunction<T: FloatT> {
    /// value, gradient and Hessian at `x`
    fn evaluate(&self, x: &[T]) -> Evaluation<T>;

    /// value only at `x`.  Override when the value is much cheaper
    /// than the derivatives.
    fn value(&self, x: &[T]) -> T {
        self.evaluate(x).value
    }

    /// Number of variables, if known before evaluation.  A known
    /// dimension is checked against the problem before solving.
    fn dimension(&self) -> Option<usize> {
        None
    }
}

impl<T, F> SmoothFunction<T> for F
where
    T: FloatT,
    F: Fn(&[T]) -> Evaluation<T>,
{
    fn evaluate(&self, x: &[T]) -> Evaluation<T> {
        self(x)
    }
}

/// The affine function `a'x + b`.
///
/// As a constraint this is the halfspace `a'x < -b`.
#[derive(Debug, Clone)]
pub struct AffineFunction<T> {
    pub a: Vec<T>,
    pub b: T,
}

impl<T> AffineFunction<T>
where
    T: FloatT,
{
    pub fn new(a: Vec<T>, b: T) -> Self {
        Self { a, b }
    }
}

impl<T> SmoothFunction<T> for AffineFunction<T>
where
    T: FloatT,
{
    fn evaluate(&self, x: &[T]) -> Evaluation<T> {
        let n = self.a.len();
        Evaluation::new(self.value(x), self.a.clone(), Matrix::zeros((n, n)))
    }

    fn value(&self, x: &[T]) -> T {
        self.a.dot(x) + self.b
    }

    fn dimension(&self) -> Option<usize> {
        Some(self.a.len())
    }
}

/// The quadratic function `½x'Px + q'x + r`.  `P` should be symmetric.
#[derive(Debug, Clone)]
pub struct QuadraticFunction<T> {
    pub P: Matrix<T>,
    pub q: Vec<T>,
    pub r: T,
}

impl<T> QuadraticFunction<T>
where
    T: FloatT,
{
    pub fn new(P: Matrix<T>, q: Vec<T>, r: T) -> Result<Self, ProblemError> {
        if !P.is_square() || P.nrows() != q.len() {
            return Err(ProblemError::QuadraticDimension {
                rows: P.nrows(),
                cols: P.ncols(),
                len: q.len(),
            });
        }
        Ok(Self { P, q, r })
    }
}

impl<T> SmoothFunction<T> for QuadraticFunction<T>
where
    T: FloatT,
{
    fn evaluate(&self, x: &[T]) -> Evaluation<T> {
        // gradient = P*x + q
        let mut gradient = self.q.clone();
        self.P.gemv(&mut gradient, x, T::one(), T::one());
        Evaluation::new(self.value(x), gradient, self.P.clone())
    }

    fn value(&self, x: &[T]) -> T {
        let half: T = (0.5).as_T();
        half * self.P.quad_form(x, x) + self.q.dot(x) + self.r
    }

    fn dimension(&self) -> Option<usize> {
        Some(self.q.len())
    }
}

/// Linear equality constraints `A*x = b`
#[derive(Debug, Clone)]
pub struct EqualityConstraints<T> {
    pub A: Matrix<T>,
    pub b: Vec<T>,
}

impl<T> EqualityConstraints<T>
where
    T: FloatT,
{
    pub fn new(A: Matrix<T>, b: Vec<T>) -> Result<Self, ProblemError> {
        if A.nrows() != b.len() {
            return Err(ProblemError::EqualityRhsDimension {
                rows: A.nrows(),
                rhs: b.len(),
            });
        }
        Ok(Self { A, b })
    }

    /// number of equality constraints
    pub fn len(&self) -> usize {
        self.b.len()
    }

    pub fn is_empty(&self) -> bool {
        self.b.is_empty()
    }

    /// Computes the feasibility gap `r = b - A*x`
    pub fn residual(&self, x: &[T], r: &mut [T]) {
        r.copy_from(&self.b);
        self.A.gemv(r, x, -T::one(), T::one());
    }
}

/// Error type returned when assembling a [`BarrierProblem`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProblemError {
    #[error("Problem dimension must be positive")]
    EmptyProblem,
    #[error("Equality matrix has {cols} columns, expected {n}")]
    EqualityMatrixDimension { n: usize, cols: usize },
    #[error("Equality matrix has {rows} rows but right hand side has length {rhs}")]
    EqualityRhsDimension { rows: usize, rhs: usize },
    #[error("Quadratic term is {rows}x{cols} but linear term has length {len}")]
    QuadraticDimension { rows: usize, cols: usize, len: usize },
    #[error("Starting point has length {len}, expected {n}")]
    StartingPointDimension { n: usize, len: usize },
}

pub(crate) type BoxedFunction<T> = Box<dyn SmoothFunction<T> + Send + Sync>;

/// A convex problem in the form
///
/// ```text
/// minimize    f(x)
/// subject to  g_i(x) < 0,  i = 1..m
///             A*x = b
/// ```
///
/// with objective `f`, inequality constraints `g_i` and optional
/// equality constraints, all in `n` variables.
pub struct BarrierProblem<T: FloatT> {
    pub n: usize,
    pub(crate) objective: BoxedFunction<T>,
    pub(crate) inequalities: Vec<BoxedFunction<T>>,
    pub(crate) equalities: Option<EqualityConstraints<T>>,
}

impl<T> BarrierProblem<T>
where
    T: FloatT,
{
    pub fn new<F>(n: usize, objective: F) -> Result<Self, ProblemError>
    where
        F: SmoothFunction<T> + Send + Sync + 'static,
    {
        if n == 0 {
            return Err(ProblemError::EmptyProblem);
        }
        Ok(Self {
            n,
            objective: Box::new(objective),
            inequalities: Vec::new(),
            equalities: None,
        })
    }

    /// Append an inequality constraint `g(x) < 0`
    pub fn add_inequality<F>(&mut self, constraint: F) -> &mut Self
    where
        F: SmoothFunction<T> + Send + Sync + 'static,
    {
        self.inequalities.push(Box::new(constraint));
        self
    }

    /// Set the equality constraints `A*x = b`, replacing any existing ones
    pub fn set_equalities(&mut self, eq: EqualityConstraints<T>) -> Result<&mut Self, ProblemError> {
        if eq.A.ncols() != self.n {
            return Err(ProblemError::EqualityMatrixDimension {
                n: self.n,
                cols: eq.A.ncols(),
            });
        }
        self.equalities = Some(eq);
        Ok(self)
    }

    /// Checks each function of known dimension against `n`
    pub(crate) fn check_dimensions(&self) -> Result<(), SolverError> {
        let n = self.n;
        let mismatched = |g: &BoxedFunction<T>| matches!(g.dimension(), Some(d) if d != n);

        if mismatched(&self.objective) {
            return Err(SolverError::EvaluationDimension {
                function: EvaluatedFunction::Objective,
                n,
            });
        }
        if let Some(i) = self.inequalities.iter().position(mismatched) {
            return Err(SolverError::EvaluationDimension {
                function: EvaluatedFunction::Inequality(i),
                n,
            });
        }
        Ok(())
    }

    /// number of inequality constraints
    pub fn num_inequalities(&self) -> usize {
        self.inequalities.len()
    }

    /// number of equality constraints
    pub fn num_equalities(&self) -> usize {
        self.equalities.as_ref().map_or(0, |eq| eq.len())
    }

    pub fn equalities(&self) -> Option<&EqualityConstraints<T>> {
        self.equalities.as_ref()
    }

    /// objective value at `x`
    pub fn objective_value(&self, x: &[T]) -> T {
        self.objective.value(x)
    }

    /// value of each inequality constraint at `x`
    pub fn inequality_values(&self, x: &[T]) -> Vec<T> {
        self.inequalities.iter().map(|g| g.value(x)).collect()
    }

    /// index and value of the first inequality with `g_i(x) >= 0`
    pub fn first_violated(&self, x: &[T]) -> Option<(usize, T)> {
        self.inequalities
            .iter()
            .map(|g| g.value(x))
            .enumerate()
            .find(|(_, v)| !(*v < T::zero()))
    }
}

impl<T> std::fmt::Debug for BarrierProblem<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BarrierProblem")
            .field("n", &self.n)
            .field("inequalities", &self.inequalities.len())
            .field("equalities", &self.equalities)
            .finish()
    }
}
