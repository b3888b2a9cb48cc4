use super::callbacks::*;
use super::info_print::print_banner;
use super::*;
use crate::algebra::*;
use crate::io::{ConfigurablePrintTarget, PrintTarget};
use std::io::Write;
use thiserror::Error;

#[cfg(not(target_family = "wasm"))]
use std::time::Instant;
#[cfg(target_family = "wasm")]
use web_time::Instant;

/// A user supplied function identified in evaluation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluatedFunction {
    Objective,
    Inequality(usize),
}

impl std::fmt::Display for EvaluatedFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            EvaluatedFunction::Objective => write!(f, "objective"),
            EvaluatedFunction::Inequality(i) => write!(f, "inequality constraint {i}"),
        }
    }
}

/// Error type returned by [`BarrierSolver`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error(transparent)]
    Problem(#[from] ProblemError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("Newton system could not be solved: {0}")]
    SingularSystem(#[from] DenseFactorizationError),
    #[error("Newton system has inconsistent dimensions")]
    KKTAssembly(#[from] MatrixConcatenationError),
    #[error("Starting point violates inequality constraint {constraint}")]
    InfeasibleStart { constraint: usize },
    #[error("Iterate left the domain of inequality constraint {constraint}")]
    InfeasibleIterate { constraint: usize },
    #[error("{function} returned derivatives of the wrong dimension, expected {n}")]
    EvaluationDimension { function: EvaluatedFunction, n: usize },
}

impl SolverError {
    fn as_status(&self) -> SolverStatus {
        match self {
            SolverError::InfeasibleStart { .. } | SolverError::InfeasibleIterate { .. } => {
                SolverStatus::InfeasibleIterate
            }
            _ => SolverStatus::NumericalError,
        }
    }
}

/// Log-barrier interior point solver.
///
/// Minimizes `t*f(x) - Σ log(-g_i(x))` by Newton's method for an
/// increasing sequence of barrier weights `t`, starting at a strictly
/// feasible `x0`, until the suboptimality bound `m/t` is below
/// `epsilon`.  Each iterate reached is recorded in the solution path.
///
/// ```
/// use logbarrier::algebra::*;
/// use logbarrier::solver::*;
///
/// // minimize x² subject to 1 - x < 0
/// let f = QuadraticFunction::new(Matrix::from(&[[2.]]), vec![0.], 0.).unwrap();
/// let mut problem = BarrierProblem::new(1, f).unwrap();
/// problem.add_inequality(AffineFunction::new(vec![-1.], 1.));
///
/// let settings: BarrierSettings<f64> = BarrierSettingsBuilder::default().verbose(false).build().unwrap();
/// let mut solver = BarrierSolver::new(problem, &[2.], settings).unwrap();
/// solver.solve().unwrap();
///
/// assert!((solver.solution.x[0] - 1.).abs() < 1e-6);
/// ```
pub struct BarrierSolver<T: FloatT> {
    pub problem: BarrierProblem<T>,
    pub settings: BarrierSettings<T>,
    pub info: BarrierInfo<T>,
    pub solution: BarrierSolution<T>,
    x0: Vec<T>,
    kktsolver: KKTSolver<T>,
    linesearch: BacktrackingLineSearch<T>,
    callbacks: SolverCallbacks<BarrierInfo<T>>,
    stream: PrintTarget,
}

impl<T> BarrierSolver<T>
where
    T: FloatT,
{
    pub fn new(
        problem: BarrierProblem<T>,
        x0: &[T],
        settings: BarrierSettings<T>,
    ) -> Result<Self, SolverError> {
        settings.validate()?;

        if x0.len() != problem.n {
            return Err(ProblemError::StartingPointDimension {
                n: problem.n,
                len: x0.len(),
            }
            .into());
        }
        problem.check_dimensions()?;

        let solution = BarrierSolution::new(
            problem.n,
            problem.num_inequalities(),
            problem.num_equalities(),
        );
        let kktsolver = KKTSolver::new(settings.pivot_tol);
        let linesearch = BacktrackingLineSearch::new(
            settings.linesearch_alpha,
            settings.linesearch_beta,
            settings.linesearch_max_iter,
        );

        Ok(Self {
            problem,
            settings,
            info: BarrierInfo::new(),
            solution,
            x0: x0.to_vec(),
            kktsolver,
            linesearch,
            callbacks: SolverCallbacks::default(),
            stream: PrintTarget::default(),
        })
    }

    /// Run the barrier method from the starting point.  The solution
    /// (and path up to the failure point) is populated whether or not
    /// an error is returned.
    pub fn solve(&mut self) -> Result<(), SolverError> {
        let start = Instant::now();
        let mut x = self.x0.clone();

        // functions may have been added since construction
        if let Err(e) = self.problem.check_dimensions() {
            self.info.status = e.as_status();
            self.solution.status = self.info.status;
            return Err(e);
        }

        // print failures are not solver failures
        let _ = print_banner(&mut self.stream, self.settings.verbose);
        let _ = self
            .info
            .print_configuration(&mut self.stream, &self.settings, &self.problem);
        let _ = self.info.print_status_header(&mut self.stream, &self.settings);

        self.info.reset(self.settings.t_init);
        self.solution.reset(&self.problem, &x);

        let result = self.follow_path(&mut x, &start);

        self.info.solve_time = start.elapsed().as_secs_f64();
        if let Err(ref e) = result {
            self.info.status = e.as_status();
        }

        self.solution.finalize(&self.problem, &x, &self.info);

        let _ = self.info.print_footer(&mut self.stream, &self.settings);

        result
    }

    /// Stop the solver when `f(&info)` returns `true`.  Checked after
    /// every barrier weight.
    pub fn set_termination_callback<F>(&mut self, f: F)
    where
        F: FnMut(&BarrierInfo<T>) -> bool + Send + 'static,
    {
        self.callbacks.termination_callback = Callback::Rust(Box::new(f));
    }

    pub fn unset_termination_callback(&mut self) {
        self.callbacks.termination_callback = Callback::None;
    }

    fn follow_path(&mut self, x: &mut [T], start: &Instant) -> Result<(), SolverError> {
        if let Some((constraint, _)) = self.problem.first_violated(x) {
            return Err(SolverError::InfeasibleStart { constraint });
        }

        let barrier = BarrierObjective::new(&self.problem);
        let epsilon = self.settings.epsilon;
        let m: T = self.problem.num_inequalities().as_T();
        let half: T = (0.5).as_T();

        let mut residual = vec![T::zero(); self.problem.num_equalities()];
        let mut t = self.settings.t_init;

        loop {
            self.info.t = t;
            self.info.gap_bound = m / t;
            if self.info.gap_bound <= epsilon {
                break;
            }

            if start.elapsed().as_secs_f64() > self.settings.time_limit {
                self.info.status = SolverStatus::MaxTime;
                return Ok(());
            }

            // ----------
            // Newton iteration for this barrier weight
            // ----------

            let mut newton_steps = 0;
            let mut is_centered = false;

            while newton_steps < self.settings.max_iter {
                let eval = match barrier.evaluate(x, t)? {
                    BarrierEvaluation::Evaluated(eval) => eval,
                    BarrierEvaluation::Rejected { constraint } => {
                        return Err(SolverError::InfeasibleIterate { constraint });
                    }
                };

                let system = match self.problem.equalities() {
                    None => NewtonSystem::Unconstrained,
                    Some(eq) => {
                        eq.residual(x, &mut residual);
                        NewtonSystem::EqualityConstrained {
                            A: &eq.A,
                            residual: &residual,
                        }
                    }
                };

                let step = self
                    .kktsolver
                    .solve(&eval.hessian, &eval.gradient, system)?;

                let ls = self.linesearch.search(
                    |z| barrier.value(z, t),
                    x,
                    eval.value,
                    &eval.gradient,
                    &step.dx,
                );

                x.axpby(ls.step, &step.dx, T::one());
                newton_steps += 1;

                let decrement = half * eval.hessian.quad_form(&step.dx, &step.dx);
                self.info.newton_decrement = decrement;
                self.info.step_length = ls.step;

                if !step.dnu.is_empty() {
                    // ν ≈ w/t for the multipliers of t*f
                    self.solution
                        .eq_dual
                        .copy_from(&step.dnu)
                        .scale(t.recip());
                }

                is_centered = decrement < epsilon;
                if !ls.accepted && !is_centered {
                    self.info.linesearch_failures += 1;
                }
                if is_centered {
                    break;
                }
            }

            if !is_centered {
                self.info.inner_cap_hits += 1;
            }

            // ----------
            // record the path point
            // ----------

            self.solution.push_path_point(&self.problem, x);
            if self.problem.first_violated(x).is_some() {
                self.info.infeasible_path_points += 1;
            }

            self.info.outer_iterations += 1;
            self.info.inner_iterations += newton_steps;
            self.info.newton_steps = newton_steps;
            self.info.cost = self.problem.objective_value(x);

            let _ = self.info.print_status(&mut self.stream, &self.settings);

            if self.callbacks.check_termination(&self.info) {
                self.info.status = SolverStatus::CallbackTerminated;
                return Ok(());
            }

            t *= self.settings.mu;
        }

        self.info.status = self.info.finished_status();
        Ok(())
    }
}

impl<T> ConfigurablePrintTarget for BarrierSolver<T>
where
    T: FloatT,
{
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.stream.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream.get_print_buffer()
    }
}

/// Solve
///
/// ```text
/// minimize    f(x)
/// subject to  g_i(x) < 0
///             A*x = b
/// ```
///
/// from the strictly feasible point `x0`.  Returns the final point,
/// its objective and constraint values, and the path of iterates.
pub fn interior_point<T, F, G>(
    objective: F,
    inequalities: Vec<G>,
    equalities: Option<EqualityConstraints<T>>,
    x0: &[T],
    settings: BarrierSettings<T>,
) -> Result<BarrierSolution<T>, SolverError>
where
    T: FloatT,
    F: SmoothFunction<T> + Send + Sync + 'static,
    G: SmoothFunction<T> + Send + Sync + 'static,
{
    let mut problem = BarrierProblem::new(x0.len(), objective)?;
    for g in inequalities {
        problem.add_inequality(g);
    }
    if let Some(eq) = equalities {
        problem.set_equalities(eq)?;
    }

    let mut solver = BarrierSolver::new(problem, x0, settings)?;
    solver.solve()?;
    Ok(solver.solution)
}
