use crate::algebra::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Status of solver at termination

#[repr(u32)]
#[derive(PartialEq, Eq, Clone, Debug, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolverStatus {
    /// Problem is not solved (solver hasn't run).
    #[default]
    Unsolved,
    /// Every barrier subproblem converged and the path stayed feasible.
    Solved,
    /// Solver reached the final barrier weight, but some subproblem hit
    /// its Newton iteration limit or a line search failed.
    AlmostSolved,
    /// Time limit reached before the final barrier weight.
    MaxTime,
    /// Termination requested by the user callback.
    CallbackTerminated,
    /// Solver terminated with a numerical error
    NumericalError,
    /// An iterate left the domain of the barrier.
    InfeasibleIterate,
}

impl SolverStatus {
    /// Solved, or solved to reduced accuracy
    pub fn is_converged(&self) -> bool {
        matches!(*self, SolverStatus::Solved | SolverStatus::AlmostSolved)
    }
}

impl std::fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Progress information for the barrier method, updated after every
/// barrier weight.
#[derive(Default, Debug, Clone)]
pub struct BarrierInfo<T> {
    /// current barrier weight
    pub t: T,
    /// completed barrier weights
    pub outer_iterations: u32,
    /// total Newton steps over all barrier weights
    pub inner_iterations: u32,
    /// Newton steps at the most recent barrier weight
    pub newton_steps: u32,
    /// bound `m/t` on the suboptimality of the current iterate
    pub gap_bound: T,
    /// most recent value of `λ²/2`
    pub newton_decrement: T,
    /// most recent line search step
    pub step_length: T,
    /// true objective value at the current iterate
    pub cost: T,
    /// line searches that failed to satisfy sufficient decrease
    pub linesearch_failures: u32,
    /// barrier weights whose Newton iteration hit `max_iter`
    pub inner_cap_hits: u32,
    /// path points violating some inequality constraint
    pub infeasible_path_points: u32,
    /// solve time in seconds
    pub solve_time: f64,
    pub status: SolverStatus,
}

impl<T> BarrierInfo<T>
where
    T: FloatT,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reset(&mut self, t_init: T) {
        *self = Self::default();
        self.t = t_init;
    }

    /// count of all warnings raised so far
    pub fn warnings(&self) -> u32 {
        self.linesearch_failures + self.inner_cap_hits + self.infeasible_path_points
    }

    /// Final status when the outer iteration ran to completion
    pub(crate) fn finished_status(&self) -> SolverStatus {
        if self.warnings() == 0 {
            SolverStatus::Solved
        } else {
            SolverStatus::AlmostSolved
        }
    }
}

#[test]
fn test_finished_status() {
    let mut info = BarrierInfo::<f64>::new();
    info.reset(1.);
    assert_eq!(info.t, 1.);
    assert_eq!(info.status, SolverStatus::Unsolved);
    assert_eq!(info.finished_status(), SolverStatus::Solved);

    info.inner_cap_hits = 1;
    assert_eq!(info.finished_status(), SolverStatus::AlmostSolved);
    assert!(info.finished_status().is_converged());
    assert!(!SolverStatus::MaxTime.is_converged());
}
