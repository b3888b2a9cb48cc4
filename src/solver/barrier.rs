use super::*;
use crate::algebra::*;

/// Outcome of evaluating the barrier-augmented objective.
///
/// A point where some inequality constraint is not strictly negative
/// lies outside the barrier domain and is `Rejected`.
#[derive(Debug, Clone, PartialEq)]
pub enum BarrierEvaluation<T> {
    /// index of the first constraint with `g_i(x) >= 0`
    Rejected { constraint: usize },
    Evaluated(Evaluation<T>),
}

impl<T> BarrierEvaluation<T>
where
    T: FloatT,
{
    /// barrier value, or `+∞` for a rejected point
    pub fn value(&self) -> T {
        match self {
            BarrierEvaluation::Rejected { .. } => T::infinity(),
            BarrierEvaluation::Evaluated(eval) => eval.value,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, BarrierEvaluation::Rejected { .. })
    }
}

/// The function `t*f(x) - Σ log(-g_i(x))` for a [`BarrierProblem`].
pub struct BarrierObjective<'a, T: FloatT> {
    problem: &'a BarrierProblem<T>,
}

impl<'a, T> BarrierObjective<'a, T>
where
    T: FloatT,
{
    pub fn new(problem: &'a BarrierProblem<T>) -> Self {
        Self { problem }
    }

    /// Value, gradient and Hessian at `x` for barrier weight `t`.
    ///
    /// With constraint values `c_i`, gradients `a_i` and Hessians `H_i`
    /// the barrier term contributes
    ///
    /// ```text
    /// φ    = -Σ log(-c_i)
    /// ∇φ   =  Σ a_i / (-c_i)
    /// ∇²φ  =  Σ (a_i a_i' - c_i H_i) / c_i²
    /// ```
    pub fn evaluate(&self, x: &[T], t: T) -> Result<BarrierEvaluation<T>, SolverError> {
        let n = self.problem.n;
        let mut value = T::zero();
        let mut gradient = vec![T::zero(); n];
        let mut hessian = Matrix::zeros((n, n));

        for (i, g) in self.problem.inequalities.iter().enumerate() {
            let eval = g.evaluate(x);
            if !eval.has_dimension(n) {
                return Err(SolverError::EvaluationDimension {
                    function: EvaluatedFunction::Inequality(i),
                    n,
                });
            }

            // NaN is outside the domain too
            let c = eval.value;
            if !(c < T::zero()) {
                return Ok(BarrierEvaluation::Rejected { constraint: i });
            }

            let d = (-c).recip();
            value -= (-c).ln();
            gradient.axpby(d, &eval.gradient, T::one());
            hessian.ger(d * d, &eval.gradient, &eval.gradient);
            hessian.axpby(d, &eval.hessian, T::one());
        }

        let f = self.problem.objective.evaluate(x);
        if !f.has_dimension(n) {
            return Err(SolverError::EvaluationDimension {
                function: EvaluatedFunction::Objective,
                n,
            });
        }

        value += t * f.value;
        gradient.axpby(t, &f.gradient, T::one());
        hessian.axpby(t, &f.hessian, T::one());

        Ok(BarrierEvaluation::Evaluated(Evaluation::new(
            value, gradient, hessian,
        )))
    }

    /// Barrier value only, or `None` if `x` is outside the domain.
    pub fn value(&self, x: &[T], t: T) -> Option<T> {
        let mut value = T::zero();
        for g in self.problem.inequalities.iter() {
            let c = g.value(x);
            if !(c < T::zero()) {
                return None;
            }
            value -= (-c).ln();
        }
        Some(t * self.problem.objective.value(x) + value)
    }
}
