use super::*;
use crate::algebra::*;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Solution returned by the barrier method, including the path of
/// iterates followed by the outer iteration.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub struct BarrierSolution<T> {
    /// final iterate
    pub x: Vec<T>,
    /// objective value at `x`
    pub obj_val: T,
    /// inequality constraint values at `x`
    pub ineq_vals: Vec<T>,
    /// equality residual `A*x - b`
    pub eq_residual: Vec<T>,
    /// equality multiplier estimate
    pub eq_dual: Vec<T>,
    /// starting point followed by the iterate after each barrier weight
    pub path: Vec<Vec<T>>,
    /// objective value at each point of `path`
    pub obj_trace: Vec<T>,
    /// final solver status
    pub status: SolverStatus,
    /// number of barrier weights
    pub outer_iterations: u32,
    /// total number of Newton steps
    pub inner_iterations: u32,
    /// solve time in seconds
    pub solve_time: f64,
}

impl<T> BarrierSolution<T>
where
    T: FloatT,
{
    /// Create a new `BarrierSolution` object
    pub fn new(n: usize, m: usize, p: usize) -> Self {
        Self {
            x: vec![T::zero(); n],
            obj_val: T::nan(),
            ineq_vals: vec![T::zero(); m],
            eq_residual: vec![T::zero(); p],
            eq_dual: vec![T::zero(); p],
            path: Vec::new(),
            obj_trace: Vec::new(),
            status: SolverStatus::Unsolved,
            outer_iterations: 0,
            inner_iterations: 0,
            solve_time: 0f64,
        }
    }

    /// Start a new path at `x0`
    pub(crate) fn reset(&mut self, problem: &BarrierProblem<T>, x0: &[T]) {
        let p = problem.num_equalities();
        self.path.clear();
        self.obj_trace.clear();
        self.eq_residual.resize(p, T::zero());
        self.eq_dual.clear();
        self.eq_dual.resize(p, T::zero());
        self.push_path_point(problem, x0);
    }

    pub(crate) fn push_path_point(&mut self, problem: &BarrierProblem<T>, x: &[T]) {
        self.path.push(x.to_vec());
        self.obj_trace.push(problem.objective_value(x));
    }

    pub(crate) fn finalize(&mut self, problem: &BarrierProblem<T>, x: &[T], info: &BarrierInfo<T>) {
        self.x.copy_from(x);
        self.obj_val = problem.objective_value(x);
        self.ineq_vals = problem.inequality_values(x);

        if let Some(eq) = problem.equalities() {
            // residual() gives b - A*x
            eq.residual(x, &mut self.eq_residual);
            self.eq_residual.negate();
        }

        self.status = info.status;
        self.outer_iterations = info.outer_iterations;
        self.inner_iterations = info.inner_iterations;
        self.solve_time = info.solve_time;
    }
}
